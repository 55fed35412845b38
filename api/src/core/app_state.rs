use std::sync::Arc;

use llm_service::{
    LlmError, LlmServiceProfiles,
    config::default_config::{config_ollama_embedding, config_ollama_generation},
};

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// LLM profiles (generation + embedding), constructed once per process.
    pub llm_profiles: Arc<LlmServiceProfiles>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Returns [`LlmError`] when the LLM profile configuration is invalid.
    pub fn from_env() -> Result<Self, LlmError> {
        let generation = config_ollama_generation()?;
        let embedding = config_ollama_embedding()?;

        Ok(Self {
            llm_profiles: Arc::new(LlmServiceProfiles::new(generation, embedding)),
        })
    }
}
