//! Retrieval helpers: cosine scoring and stable top-k selection.

use crate::index::IndexEntry;
use crate::record::IndexHit;
use tracing::trace;

/// Cosine similarity; 0.0 for mismatched lengths or zero vectors.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Scores every entry against the query vector and returns the best
/// `top_k` from a pool of at most `fetch_k` candidates.
///
/// The sort is stable and entries are scored in insertion order, so ties
/// resolve to the earliest-inserted fragment. An empty entry list yields
/// an empty result.
pub(crate) fn top_k_hits(
    entries: &[IndexEntry],
    query: &[f32],
    top_k: usize,
    fetch_k: usize,
) -> Vec<IndexHit> {
    let mut scored: Vec<(f32, usize)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (cosine_similarity(query, &e.vector), i))
        .collect();

    // Stable by construction: equal scores keep ascending insertion index.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(fetch_k.max(top_k));

    let hits: Vec<IndexHit> = scored
        .into_iter()
        .take(top_k)
        .map(|(score, i)| IndexHit {
            score,
            text: entries[i].text.clone(),
        })
        .collect();

    trace!("top_k_hits: {} hits", hits.len());
    hits
}
