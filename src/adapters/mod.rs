//! Adapters layer: HTTP implementations of the domain ports.

pub mod chat;
pub mod embeddings;
