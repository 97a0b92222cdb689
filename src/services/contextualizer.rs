//! Query contextualizer
//!
//! Rewrites a follow-up question into a standalone question using the chat
//! history, via one language-model call.

use std::sync::Arc;

use crate::domain::errors::RagResult;
use crate::domain::models::Transcript;
use crate::domain::ports::ChatModel;

const CONTEXTUALIZE_PROMPT: &str = "Given a chat history and the latest user question \
which might refer to context in the chat history, formulate a standalone question \
which is relevant and self-understandable without the chat history. \
Do NOT answer the question; just reformulate it if needed and otherwise return it as it is.";

/// Standalone-question rewriter backed by a chat model.
pub struct QueryContextualizer {
    model: Arc<dyn ChatModel>,
}

impl QueryContextualizer {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Rewrite `question` so it stands alone without the transcript.
    ///
    /// The model is invoked even for an empty transcript; it is expected to
    /// echo the question unchanged in that case.
    pub async fn contextualize(&self, question: &str, transcript: &Transcript) -> RagResult<String> {
        let standalone = self
            .model
            .complete(CONTEXTUALIZE_PROMPT, transcript.turns(), question)
            .await?;

        tracing::debug!(%question, %standalone, "contextualized question");

        Ok(standalone)
    }
}
