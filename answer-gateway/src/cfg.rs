//! Runtime configuration loaded from environment variables.

use rag_index::IndexConfig;

/// Config bag for the gateway. All fields have defaults via `from_env`.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Hits fed to the prompt.
    pub top_k: usize,
    /// Candidate pool size for retrieval.
    pub fetch_k: usize,
    /// Separator used for document chunking.
    pub separator: String,
    /// Size policy for chunking.
    pub max_chunk_chars: usize,
}

impl GatewayConfig {
    /// Build from environment variables with the pipeline defaults.
    pub fn from_env() -> Self {
        Self {
            top_k: parse("RAG_TOP_K", 5usize),
            fetch_k: parse("RAG_FETCH_K", 100usize),
            separator: env("RAG_SEPARATOR", ","),
            max_chunk_chars: parse("CHUNK_MAX_CHARS", 1000usize),
        }
    }

    /// Convert to a `rag_index::IndexConfig` used by the index and the
    /// chunker, applying per-request overrides (`0` keeps the env value).
    pub fn make_index_config(&self, top_k: usize, fetch_k: usize) -> IndexConfig {
        IndexConfig {
            top_k: if top_k == 0 { self.top_k } else { top_k },
            fetch_k: if fetch_k == 0 { self.fetch_k } else { fetch_k },
            separator: self.separator.clone(),
            max_chunk_chars: self.max_chunk_chars,
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k).unwrap_or_else(|_| dflt.to_string())
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(dflt)
}
