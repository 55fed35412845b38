//! Typed error for the answer-gateway crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Errors from the measurement provider client (configuration only;
    /// fetch failures collapse to empty data before reaching here).
    #[error("provider error: {0}")]
    Provider(#[from] airkorea_client::AirKoreaError),

    /// Errors from the underlying rag-index crate.
    #[error("index error: {0}")]
    Index(#[from] rag_index::IndexError),

    /// Errors from the generation backend. These surface to the caller:
    /// there is no sensible empty fallback for an answer.
    #[error("generation error: {0}")]
    Llm(#[from] llm_service::LlmError),
}
