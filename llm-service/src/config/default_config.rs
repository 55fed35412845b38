//! Default LLM configs loaded from environment variables.
//!
//! This module provides convenience constructors for [`LlmModelConfig`],
//! one per role:
//!
//! - **Generation** → the answering model (low temperature, factual)
//! - **Embedding**  → the embedding generator for retrieval
//!
//! # Environment variables
//!
//! Common:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (defaults to `http://localhost:11434`)
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)
//!
//! Role-specific:
//! - `LLM_MODEL_NAME`  = generation model (default `gemma2:2b`)
//! - `EMBEDDING_MODEL` = embedding model (default `bge-m3`)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{ConfigError, LlmError, env_opt_u32},
};

/// Resolves the Ollama endpoint from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
/// 3. `http://localhost:11434`
///
/// # Errors
///
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is set but invalid
fn ollama_endpoint() -> Result<String, LlmError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Ok("http://localhost:11434".to_string())
}

/// Constructs a config for the **generation** model.
///
/// # Env
/// - `LLM_MODEL_NAME` (optional, default `gemma2:2b`)
/// - `LLM_MAX_TOKENS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.3)` (low, favoring factual output)
/// - `timeout_secs = Some(120)`
pub fn config_ollama_generation() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = env_or("LLM_MODEL_NAME", "gemma2:2b");
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        model,
        endpoint,
        max_tokens,
        temperature: Some(0.3),
        top_p: None,
        timeout_secs: Some(120),
    })
}

/// Constructs a config for the **embedding** model.
///
/// # Env
/// - `EMBEDDING_MODEL` (optional, default `bge-m3`)
///
/// # Defaults
/// - `temperature = Some(0.0)` (deterministic)
/// - `timeout_secs = Some(30)`
pub fn config_ollama_embedding() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = env_or("EMBEDDING_MODEL", "bge-m3");

    Ok(LlmModelConfig {
        model,
        endpoint,
        max_tokens: None,
        temperature: Some(0.0),
        top_p: None,
        timeout_secs: Some(30),
    })
}

fn env_or(name: &str, dflt: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| dflt.to_string())
}
