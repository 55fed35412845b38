//! Public API types re-used by external crates (e.g., the HTTP API layer).

use serde::Serialize;

/// Options that control retrieval for a single question.
///
/// Setting a field to `0` means: "use the value from env-config".
#[derive(Clone, Debug, Default)]
pub struct AskOptions {
    /// Number of fragments returned by retrieval and fed to the prompt.
    /// If `0`, the library falls back to `RAG_TOP_K` from env (default 5).
    pub top_k: usize,
    /// Candidate pool size considered before the final cut.
    /// If `0`, the library falls back to `RAG_FETCH_K` from env (default 100).
    pub fetch_k: usize,
}

/// A compact record of a context fragment that was fed to the LLM.
#[derive(Clone, Debug, Serialize)]
pub struct UsedFragment {
    pub score: f32,
    pub text: String,
}

/// Final answer together with the exact context passed to the model.
#[derive(Clone, Debug, Serialize)]
pub struct QaAnswer {
    /// Generated answer text.
    pub answer: String,
    /// Raw text of the best-matching fragment, if any was retrieved.
    pub top_match: Option<String>,
    /// Every fragment included in the prompt, ranked.
    pub context: Vec<UsedFragment>,
}
