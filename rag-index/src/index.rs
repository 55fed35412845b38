//! Ephemeral in-memory vector index.
//!
//! The index is rebuilt from scratch on every fetch action and never
//! persisted; fragments are owned solely by the index and become
//! unreachable once it is replaced. There is no incremental update path.

use tracing::{debug, trace};

use crate::Embedder;
use crate::errors::IndexError;

/// One indexed fragment: its embedding and its text.
#[derive(Clone, Debug)]
pub(crate) struct IndexEntry {
    pub vector: Vec<f32>,
    pub text: String,
}

/// Builds the entry list, embedding every fragment exactly once.
///
/// Fragments keep insertion order. An empty fragment list yields an empty
/// entry list, not an error. All embeddings must agree on dimensionality.
pub(crate) async fn build_entries(
    fragments: &[String],
    embedder: &dyn Embedder,
) -> Result<Vec<IndexEntry>, IndexError> {
    let mut entries = Vec::with_capacity(fragments.len());
    let mut want_dim: Option<usize> = None;

    for text in fragments {
        trace!("build_entries: embedding fragment len={}", text.len());
        let vector = embedder.embed(text).await?;

        match want_dim {
            None => want_dim = Some(vector.len()),
            Some(want) if vector.len() != want => {
                return Err(IndexError::VectorSizeMismatch {
                    got: vector.len(),
                    want,
                });
            }
            Some(_) => {}
        }

        entries.push(IndexEntry {
            vector,
            text: text.clone(),
        });
    }

    debug!("build_entries: {} fragments indexed", entries.len());
    Ok(entries)
}
