//! Domain models
//!
//! Pure data structures for the RAG pipeline: chunks, transcripts, and
//! configuration. No I/O happens here.

pub mod chunking;
pub mod config;
pub mod transcript;

pub use chunking::{Chunk, ChunkerConfig};
pub use config::{
    ChatConfig, Config, EmbeddingConfig, GenerationConfig, LoggingConfig, RetrievalConfig,
};
pub use transcript::{Role, Transcript, Turn};
