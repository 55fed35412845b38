//! Deterministic offline embedder.
//!
//! Maps text to character-frequency buckets. Identical texts always produce
//! identical vectors, which makes this useful for tests and for running the
//! pipeline without an embedding backend. Not a semantic embedding.

use std::{
    collections::hash_map::DefaultHasher,
    future::Future,
    hash::{Hash, Hasher},
    pin::Pin,
};

use crate::{Embedder, errors::IndexError};

/// Bucketed character-frequency embedder.
#[derive(Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    /// Creates an embedder producing vectors of `dim` buckets.
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    fn bucket_of(&self, c: char) -> usize {
        let mut h = DefaultHasher::new();
        c.hash(&mut h);
        (h.finish() as usize) % self.dim
    }
}

impl Embedder for HashEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, IndexError>> + Send + 'a>> {
        Box::pin(async move {
            let mut v = vec![0.0f32; self.dim];
            for c in text.chars() {
                v[self.bucket_of(c)] += 1.0;
            }
            Ok(v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identical_text_identical_vector() {
        let e = HashEmbedder::new(32);
        let a = e.embed("측정소명: 강남구").await.unwrap();
        let b = e.embed("측정소명: 강남구").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn fixed_dimension() {
        let e = HashEmbedder::new(16);
        assert_eq!(e.embed("").await.unwrap().len(), 16);
        assert_eq!(e.embed("abc").await.unwrap().len(), 16);
    }
}
