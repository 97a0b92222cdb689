//! Domain errors for the docchat RAG pipeline.

use thiserror::Error;

/// Errors that can occur while indexing a document or answering a turn.
///
/// Service failures are surfaced to the caller as-is; retry and backoff, if
/// desired, belong to the external service clients, not this layer.
#[derive(Debug, Error)]
pub enum RagError {
    /// The uploaded document could not be split into chunks.
    #[error("chunking failed: {0}")]
    Chunking(String),

    /// The embedding service was unreachable or returned malformed vectors.
    #[error("embedding service error: {0}")]
    EmbeddingService(String),

    /// The language-model service failed during contextualization or
    /// answer generation.
    #[error("generation service error: {0}")]
    GenerationService(String),

    /// A turn was submitted before any document was loaded.
    #[error("no document loaded: upload a document before asking questions")]
    NotReady,
}

pub type RagResult<T> = Result<T, RagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RagError::Chunking("empty document".to_string());
        assert_eq!(err.to_string(), "chunking failed: empty document");

        let err = RagError::NotReady;
        assert!(err.to_string().contains("no document loaded"));
    }
}
