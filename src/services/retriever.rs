//! Chunk retriever
//!
//! Embeds a standalone question and returns the top-k most relevant chunks
//! from the embedding index.

use std::sync::Arc;

use crate::domain::errors::RagResult;
use crate::domain::models::Chunk;
use crate::domain::ports::EmbeddingProvider;
use crate::infrastructure::vector::EmbeddingIndex;

/// Top-k semantic retriever over one document's embedding index.
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<EmbeddingIndex>,
    top_k: usize,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: Arc<EmbeddingIndex>, top_k: usize) -> Self {
        Self {
            embedder,
            index,
            top_k,
        }
    }

    /// Return up to `top_k` chunks in descending relevance order.
    ///
    /// An empty index returns an empty sequence without calling the
    /// embedding service; the caller handles "no context" gracefully.
    pub async fn retrieve(&self, standalone_question: &str) -> RagResult<Vec<Chunk>> {
        if self.index.is_empty() {
            return Ok(Vec::new());
        }

        let query_vector = self.embedder.embed(standalone_question).await?;
        let results = self.index.query(&query_vector, self.top_k);

        tracing::debug!(
            question = standalone_question,
            results = results.len(),
            "retrieved chunks"
        );

        Ok(results.into_iter().map(|(chunk, _)| chunk.clone()).collect())
    }
}
