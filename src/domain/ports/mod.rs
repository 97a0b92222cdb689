//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that infrastructure
//! adapters must implement:
//! - `EmbeddingProvider`: text to vector, one service call per text
//! - `ChatModel`: system + history + input to completion text
//!
//! These traits define the contracts that allow the pipeline to be
//! independent of specific service implementations.

pub mod chat_model;
pub mod embedding;

pub use chat_model::ChatModel;
pub use embedding::EmbeddingProvider;
