//! In-memory embedding index
//!
//! Stores (chunk, vector) pairs in insertion order and answers top-k
//! nearest-neighbor queries by cosine similarity. All similarity math is
//! local; the only service calls happen at build time, one per chunk.

use std::sync::Arc;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::Chunk;
use crate::domain::ports::EmbeddingProvider;

/// Immutable in-memory vector index over the chunks of one document.
///
/// Read-only after `build`; queries never touch the network.
pub struct EmbeddingIndex {
    entries: Vec<(Chunk, Vec<f32>)>,
}

impl EmbeddingIndex {
    /// Embed every chunk and build the index.
    ///
    /// One embedding-service call per chunk, in insertion order. Any failure
    /// aborts the build entirely; no partial index is returned. Vectors must
    /// be non-empty and dimension-consistent.
    pub async fn build(
        embedder: &Arc<dyn EmbeddingProvider>,
        chunks: Vec<Chunk>,
    ) -> RagResult<Self> {
        let mut entries = Vec::with_capacity(chunks.len());
        let mut dimension: Option<usize> = None;

        for chunk in chunks {
            let vector = embedder.embed(&chunk.content).await?;

            if vector.is_empty() {
                return Err(RagError::EmbeddingService(format!(
                    "provider '{}' returned an empty vector for chunk {}",
                    embedder.name(),
                    chunk.chunk_index
                )));
            }

            match dimension {
                None => dimension = Some(vector.len()),
                Some(dim) if dim != vector.len() => {
                    return Err(RagError::EmbeddingService(format!(
                        "inconsistent embedding dimensions: expected {dim}, got {} for chunk {}",
                        vector.len(),
                        chunk.chunk_index
                    )));
                }
                Some(_) => {}
            }

            entries.push((chunk, vector));
        }

        tracing::info!(chunks = entries.len(), "built embedding index");

        Ok(Self { entries })
    }

    /// Create an index with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Return the k chunks closest to `vector` by cosine similarity,
    /// ordered by descending similarity. Ties keep insertion order.
    pub fn query(&self, vector: &[f32], k: usize) -> Vec<(&Chunk, f32)> {
        let mut scored: Vec<(&Chunk, f32)> = self
            .entries
            .iter()
            .map(|(chunk, v)| (chunk, cosine_similarity(vector, v)))
            .collect();

        // Stable sort keeps insertion order for equal scores.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cosine similarity between two vectors. Zero-magnitude vectors and
/// mismatched dimensions score 0.0 rather than erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
