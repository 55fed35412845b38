//! In-memory RAG indexing and retrieval over measurement documents.
//!
//! This crate provides a clean API to:
//! - Project measurement records into retrievable document texts
//! - Split documents into fragments under a separator/size policy
//! - Build an ephemeral vector index and retrieve top-K context for a query
//!
//! The index lives for a single fetch-and-query cycle: it is built fresh
//! from the current fragments, queried, and discarded. Nothing is persisted.

mod chunk;
mod config;
mod document;
mod embed;
mod errors;
mod index;
mod record;
mod retrieve;

pub use chunk::{split_documents, split_with_policy};
pub use config::IndexConfig;
pub use document::{measurement_document, measurement_documents};
pub use embed::{Embedder, hash_embedder::HashEmbedder, ollama::OllamaEmbedder};
pub use errors::IndexError;
pub use record::IndexHit;

use tracing::trace;

/// Ephemeral nearest-neighbor index over text fragments.
///
/// This is the single entry point recommended for application code.
pub struct FragmentIndex {
    entries: Vec<index::IndexEntry>,
}

impl FragmentIndex {
    /// Builds a fresh index by embedding every fragment exactly once.
    ///
    /// An empty fragment list yields an empty index; queries against it
    /// return empty results rather than failing.
    ///
    /// # Errors
    /// Returns embedding backend errors or a dimensionality mismatch.
    pub async fn build(
        fragments: &[String],
        embedder: &dyn Embedder,
    ) -> Result<Self, IndexError> {
        trace!("FragmentIndex::build fragments={}", fragments.len());
        let entries = index::build_entries(fragments, embedder).await?;
        Ok(Self { entries })
    }

    /// Embeds the query and returns the top-K most similar fragments.
    ///
    /// `fetch_k` bounds the candidate pool; `top_k` larger than the index
    /// returns all available hits, never duplicates. Ties resolve to
    /// insertion order.
    ///
    /// # Errors
    /// Returns embedding backend errors. An empty index short-circuits to
    /// an empty result without calling the embedder.
    pub async fn search(
        &self,
        query: &str,
        embedder: &dyn Embedder,
        top_k: usize,
        fetch_k: usize,
    ) -> Result<Vec<IndexHit>, IndexError> {
        trace!("FragmentIndex::search top_k={top_k} fetch_k={fetch_k}");
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let qv = embedder.embed(query).await?;
        Ok(retrieve::top_k_hits(&self.entries, &qv, top_k, fetch_k))
    }

    /// Number of indexed fragments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed fragment texts, in insertion order.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> Vec<String> {
        vec![
            "측정소명: 강남구, 날짜: 2024-01-01 12:00, 미세먼지농도: 45".to_string(),
            "측정소명: 서초구, 날짜: 2024-01-01 12:00, 미세먼지농도: 12".to_string(),
            "측정소명: 송파구, 날짜: 2024-01-01 12:00, 미세먼지농도: 88".to_string(),
        ]
    }

    #[tokio::test]
    async fn identity_retrieval_returns_exact_fragment_first() {
        let emb = HashEmbedder::new(64);
        let frags = fragments();
        let idx = FragmentIndex::build(&frags, &emb).await.unwrap();

        let hits = idx.search(&frags[1], &emb, 5, 100).await.unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].text, frags[1]);
    }

    #[tokio::test]
    async fn k_larger_than_index_returns_all_without_duplicates() {
        let emb = HashEmbedder::new(64);
        let frags = fragments();
        let idx = FragmentIndex::build(&frags, &emb).await.unwrap();

        let hits = idx.search("미세먼지", &emb, 50, 100).await.unwrap();
        assert_eq!(hits.len(), frags.len());
        let mut texts: Vec<_> = hits.iter().map(|h| h.text.clone()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), frags.len());
    }

    #[tokio::test]
    async fn empty_index_returns_empty_result() {
        let emb = HashEmbedder::new(64);
        let idx = FragmentIndex::build(&[], &emb).await.unwrap();
        assert!(idx.is_empty());

        let hits = idx.search("anything", &emb, 5, 100).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn rebuild_has_same_fragment_membership() {
        let emb = HashEmbedder::new(64);
        let frags = fragments();
        let a = FragmentIndex::build(&frags, &emb).await.unwrap();
        let b = FragmentIndex::build(&frags, &emb).await.unwrap();

        let mut fa: Vec<_> = a.fragments().collect();
        let mut fb: Vec<_> = b.fragments().collect();
        fa.sort();
        fb.sort();
        assert_eq!(fa, fb);
    }

    #[tokio::test]
    async fn top_k_bounds_result_size() {
        let emb = HashEmbedder::new(64);
        let frags = fragments();
        let idx = FragmentIndex::build(&frags, &emb).await.unwrap();

        let hits = idx.search("미세먼지농도", &emb, 2, 100).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits[0].score >= hits[1].score);
    }
}
