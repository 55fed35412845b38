use crate::errors::IndexError;
use std::{future::Future, pin::Pin};

/// Provider interface for embedding generation.
///
/// Async is required because real providers (Ollama, remote APIs) perform
/// HTTP requests. Implement this trait to plug in another embedding
/// backend without touching the pipeline.
pub trait Embedder: Send + Sync {
    /// Async embedding function.
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, IndexError>> + Send + 'a>>;
}

pub mod hash_embedder;
pub mod ollama;
