//! Embedding provider adapters.

pub mod nomic;

pub use nomic::NomicEmbeddingProvider;
