//! Answer generator
//!
//! Produces a grounded answer from retrieved chunks, the standalone
//! question, and the conversation history, via one language-model call.

use std::sync::Arc;

use crate::domain::errors::RagResult;
use crate::domain::models::{Chunk, GenerationConfig, Transcript};
use crate::domain::ports::ChatModel;

/// Context-grounded answer generator backed by a chat model.
pub struct AnswerGenerator {
    model: Arc<dyn ChatModel>,
    config: GenerationConfig,
}

impl AnswerGenerator {
    pub fn new(model: Arc<dyn ChatModel>, config: GenerationConfig) -> Self {
        Self { model, config }
    }

    /// Generate an answer grounded in the retrieved chunks.
    ///
    /// Zero chunks is not an error; the prompt then carries an empty context
    /// section and the model is instructed to say it does not know.
    pub async fn generate(
        &self,
        standalone_question: &str,
        chunks: &[Chunk],
        transcript: &Transcript,
    ) -> RagResult<String> {
        let system = self.build_system_prompt(chunks);

        self.model
            .complete(&system, transcript.turns(), standalone_question)
            .await
    }

    fn build_system_prompt(&self, chunks: &[Chunk]) -> String {
        let context = chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "You are an assistant for question-answering tasks. \
             Use the following pieces of retrieved context to answer the question. \
             If you do not know the answer, say that you don't know. \
             Use {} to {} sentences maximum to keep the answer concise.\n\n{}",
            self.config.min_sentences, self.config.max_sentences, context
        )
    }
}
