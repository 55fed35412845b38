//! Core data models used by the library.

use serde::Serialize;

/// A single retrieval hit with similarity score and fragment text.
#[derive(Clone, Debug, Serialize)]
pub struct IndexHit {
    /// Cosine similarity against the query embedding.
    pub score: f32,
    /// The fragment text exactly as indexed.
    pub text: String,
}
