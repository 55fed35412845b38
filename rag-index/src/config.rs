//! Runtime configuration for indexing and retrieval.

use crate::errors::IndexError;

/// Configuration for fragment building and top-k retrieval.
#[derive(Clone, Debug)]
pub struct IndexConfig {
    /// Number of hits returned to the caller.
    pub top_k: usize,
    /// Candidate pool size considered before the final cut.
    pub fetch_k: usize,
    /// Separator used when a document must be split into fragments.
    pub separator: String,
    /// Size policy: documents longer than this are split at separators.
    pub max_chunk_chars: usize,
}

impl IndexConfig {
    /// Creates the default config: top 5 of a 100-candidate pool, comma
    /// separator.
    pub fn new_default() -> Self {
        Self {
            top_k: 5,
            fetch_k: 100,
            separator: ",".to_string(),
            max_chunk_chars: 1000,
        }
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.top_k == 0 {
            return Err(IndexError::Config("top_k must be > 0".into()));
        }
        if self.fetch_k < self.top_k {
            return Err(IndexError::Config("fetch_k must be >= top_k".into()));
        }
        if self.max_chunk_chars == 0 {
            return Err(IndexError::Config("max_chunk_chars must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = IndexConfig::new_default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.top_k, 5);
        assert_eq!(cfg.fetch_k, 100);
        assert_eq!(cfg.separator, ",");
    }

    #[test]
    fn rejects_pool_smaller_than_k() {
        let mut cfg = IndexConfig::new_default();
        cfg.fetch_k = 3;
        assert!(cfg.validate().is_err());
    }
}
