//! Generation backend interface and the Ollama-backed implementation.

use std::{future::Future, pin::Pin, sync::Arc};

use llm_service::LlmServiceProfiles;

use crate::error::GatewayError;

/// Provider interface for answer generation.
///
/// Implement this trait to plug in another generation backend without
/// touching pipeline logic.
pub trait Generator: Send + Sync {
    /// Async generation function: prompt in, answer text out.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>>;
}

/// Generator backed by the shared Ollama generation profile.
#[derive(Clone)]
pub struct OllamaGenerator {
    svc: Arc<LlmServiceProfiles>,
}

impl OllamaGenerator {
    /// Construct a new generator over the shared service.
    pub fn new(svc: Arc<LlmServiceProfiles>) -> Self {
        Self { svc }
    }
}

impl Generator for OllamaGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>> {
        Box::pin(async move {
            let text = self.svc.generate(prompt).await?;
            Ok(text)
        })
    }
}
