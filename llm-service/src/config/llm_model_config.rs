/// Configuration for a single LLM model invocation profile.
///
/// One instance describes one logical role (generation or embedding)
/// against an Ollama endpoint. Extend as needed when new knobs are
/// required by a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"gemma2:2b"`, `"bge-m3"`).
    pub model: String,

    /// Inference endpoint (e.g., `http://localhost:11434`).
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
