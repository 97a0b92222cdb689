//! Chat model port for language-model completions.
//!
//! Abstracts the LLM backend behind a single completion contract so the
//! contextualizer and answer generator can be composed with any provider
//! (or a deterministic stub in tests).

use async_trait::async_trait;

use crate::domain::errors::RagResult;
use crate::domain::models::Turn;

/// Trait for chat completion providers.
///
/// One call produces one completion: a system instruction, the conversation
/// history so far, and the latest user input. Failures surface as
/// `RagError::GenerationService` and are not retried here.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Provider name (e.g., "groq").
    fn name(&self) -> &'static str;

    /// Generate a completion for the given system instruction, history,
    /// and user input.
    async fn complete(&self, system: &str, history: &[Turn], input: &str) -> RagResult<String>;
}
