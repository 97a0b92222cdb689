//! Vector infrastructure: document chunking and in-memory similarity search.

pub mod chunker;
pub mod index;

pub use chunker::Chunker;
pub use index::{cosine_similarity, EmbeddingIndex};
