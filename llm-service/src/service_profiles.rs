//! Shared LLM service with two active profiles: `generation` and `embedding`.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Caches underlying HTTP clients per config (endpoint+model+timeout).
//! - Provides convenience methods to generate answers and compute embeddings.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use llm_service::LlmServiceProfiles;
//! use llm_service::config::default_config::{config_ollama_embedding, config_ollama_generation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), llm_service::LlmError> {
//!     let generation = config_ollama_generation()?;
//!     let embedding = config_ollama_embedding()?;
//!     let svc = Arc::new(LlmServiceProfiles::new(generation, embedding));
//!
//!     let txt = svc.generate("Hello world").await?;
//!     println!("ANSWER: {}", txt);
//!
//!     let emb = svc.embed("Ferris").await?;
//!     println!("Embedding dim = {}", emb.len());
//!
//!     Ok(())
//! }
//! ```

use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
    sync::Arc,
};

use tokio::sync::RwLock;

use crate::{
    config::llm_model_config::LlmModelConfig, error_handler::LlmError,
    services::ollama_service::OllamaService,
};

/// Shared service that manages two logical LLM profiles: **generation** and
/// **embedding**.
///
/// Internally, it caches Ollama clients keyed by their configuration to
/// avoid recreating HTTP clients on each call.
pub struct LlmServiceProfiles {
    generation: LlmModelConfig,
    embedding: LlmModelConfig,

    ollama: RwLock<HashMap<ClientKey, Arc<OllamaService>>>,
}

impl LlmServiceProfiles {
    /// Creates a new service with the two profiles.
    pub fn new(generation: LlmModelConfig, embedding: LlmModelConfig) -> Self {
        Self {
            generation,
            embedding,
            ollama: RwLock::new(HashMap::new()),
        }
    }

    /// Generates text using the **generation** profile.
    ///
    /// # Errors
    /// Returns [`LlmError`] if the backend call fails.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let cli = self.get_or_init_ollama(&self.generation).await?;
        cli.generate(prompt).await.map_err(LlmError::from)
    }

    /// Computes embeddings using the **embedding** profile.
    ///
    /// # Errors
    /// Returns [`LlmError`] if the backend call fails.
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>, LlmError> {
        let cli = self.get_or_init_ollama(&self.embedding).await?;
        cli.embeddings(input).await.map_err(LlmError::from)
    }

    /// Returns references to the current profiles `(generation, embedding)`.
    pub fn profiles(&self) -> (&LlmModelConfig, &LlmModelConfig) {
        (&self.generation, &self.embedding)
    }

    /* --------------------- Internals --------------------- */

    async fn get_or_init_ollama(
        &self,
        cfg: &LlmModelConfig,
    ) -> Result<Arc<OllamaService>, LlmError> {
        let key = ClientKey::from(cfg);
        if let Some(cli) = self.ollama.read().await.get(&key).cloned() {
            return Ok(cli);
        }
        let mut w = self.ollama.write().await;
        if let Some(cli) = w.get(&key).cloned() {
            return Ok(cli);
        }
        let cli = Arc::new(OllamaService::new(cfg.clone())?);
        w.insert(key, cli.clone());
        Ok(cli)
    }
}

/// Internal cache key to identify unique client configs.
#[derive(Clone, Eq)]
struct ClientKey {
    endpoint: String,
    model: String,
    timeout: Option<u64>,
}

impl From<&LlmModelConfig> for ClientKey {
    fn from(cfg: &LlmModelConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            timeout: cfg.timeout_secs,
        }
    }
}

impl PartialEq for ClientKey {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
            && self.model == other.model
            && self.timeout == other.timeout
    }
}

impl Hash for ClientKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoint.hash(state);
        self.model.hash(state);
        self.timeout.hash(state);
    }
}
