//! Unified error types for the crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level error for airkorea-client operations.
#[derive(Debug, Error)]
pub enum AirKoreaError {
    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Transport/HTTP client error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from the measurement service.
    #[error("unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL (without the service key).
        url: String,
        /// Optional short snippet of the response body.
        snippet: String,
    },

    /// Response body was not valid JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
}
