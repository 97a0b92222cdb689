//! Docchat - Conversational RAG over a single document
//!
//! Docchat answers natural-language questions about one user-supplied
//! document using retrieval-augmented generation with conversational memory:
//! the document is chunked and embedded into an in-memory index, follow-up
//! questions are rewritten against the chat history, and answers are
//! generated from the retrieved passages only.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, port traits, and errors
//! - **Service Layer** (`services`): the pipeline capabilities and engine
//! - **Adapters Layer** (`adapters`): HTTP implementations of the ports
//! - **Infrastructure Layer** (`infrastructure`): chunking, vector index,
//!   configuration, credentials
//! - **CLI Layer** (`cli`): command-line chat interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{RagError, RagResult};
pub use domain::models::{Chunk, ChunkerConfig, Config, Role, Transcript, Turn};
pub use domain::ports::{ChatModel, EmbeddingProvider};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::vector::{Chunker, EmbeddingIndex};
pub use services::{AnswerGenerator, QueryContextualizer, RagEngine, Retriever, SessionStore};
