//! Ollama embedding provider implementation.
//!
//! Delegates to the shared [`LlmServiceProfiles`] embedding profile.

use std::sync::Arc;

use llm_service::LlmServiceProfiles;

use crate::{Embedder, errors::IndexError};

/// Ollama embedding provider (async).
#[derive(Clone)]
pub struct OllamaEmbedder {
    svc: Arc<LlmServiceProfiles>,
}

impl OllamaEmbedder {
    /// Construct a new embedder over the shared service.
    pub fn new(svc: Arc<LlmServiceProfiles>) -> Self {
        Self { svc }
    }
}

impl Embedder for OllamaEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Vec<f32>, IndexError>> + Send + 'a>>
    {
        Box::pin(async move {
            let v = self.svc.embed(text).await?;
            Ok(v)
        })
    }
}
