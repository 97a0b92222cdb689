//! Service layer: the conversational RAG pipeline and its capabilities.

pub mod contextualizer;
pub mod engine;
pub mod generator;
pub mod history;
pub mod retriever;

pub use contextualizer::QueryContextualizer;
pub use engine::RagEngine;
pub use generator::AnswerGenerator;
pub use history::SessionStore;
pub use retriever::Retriever;
