//! Unified error types for the crate.

use thiserror::Error;

/// Top-level error for rag-index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Mismatch in vector dimensionality across fragments.
    #[error("vector size mismatch: got {got}, want {want}")]
    VectorSizeMismatch { got: usize, want: usize },

    /// Embedding backend failure.
    #[error("embedding backend error: {0}")]
    Backend(#[from] llm_service::LlmError),
}
