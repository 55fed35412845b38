//! Shared LLM service for a local Ollama backend.
//!
//! This crate provides:
//! - A thin Ollama client ([`services::ollama_service::OllamaService`]) for
//!   non-streaming text generation and embeddings
//! - Environment-driven default configs for the **generation** and
//!   **embedding** roles ([`config::default_config`])
//! - A shared facade ([`service_profiles::LlmServiceProfiles`]) that caches
//!   HTTP clients per config and is meant to be constructed once per process
//!   and shared via `Arc`

pub mod config;
pub mod error_handler;
pub mod service_profiles;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{ConfigError, LlmError};
pub use service_profiles::LlmServiceProfiles;
