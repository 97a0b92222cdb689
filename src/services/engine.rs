//! Conversational RAG engine
//!
//! Composes the chunker, embedding index, contextualizer, retriever, and
//! answer generator into one request/response cycle per user turn, threading
//! session history in and out. Holds the tagged pipeline lifecycle state:
//! turns are rejected until a document has been loaded.

use std::sync::Arc;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{Config, Role};
use crate::domain::ports::{ChatModel, EmbeddingProvider};
use crate::infrastructure::vector::{Chunker, EmbeddingIndex};

use super::contextualizer::QueryContextualizer;
use super::generator::AnswerGenerator;
use super::history::SessionStore;
use super::retriever::Retriever;

/// The composed per-document pipeline, built once per loaded document and
/// reused for every turn in that document's lifetime.
struct RagChain {
    contextualizer: QueryContextualizer,
    retriever: Retriever,
    generator: AnswerGenerator,
}

/// Pipeline lifecycle state. There is no way back to `Uninitialized` short
/// of constructing a new engine; loading another document replaces the chain.
enum PipelineState {
    Uninitialized,
    Ready(RagChain),
}

/// Conversational RAG engine for a single active document.
///
/// One logical worker processes one turn at a time; `&mut self` on
/// `handle_turn` makes the engine the sole writer of session history.
pub struct RagEngine {
    config: Config,
    embedder: Arc<dyn EmbeddingProvider>,
    chat_model: Arc<dyn ChatModel>,
    sessions: SessionStore,
    state: PipelineState,
}

impl RagEngine {
    pub fn new(
        config: Config,
        embedder: Arc<dyn EmbeddingProvider>,
        chat_model: Arc<dyn ChatModel>,
    ) -> Self {
        Self {
            config,
            embedder,
            chat_model,
            sessions: SessionStore::new(),
            state: PipelineState::Uninitialized,
        }
    }

    /// True once a document has been chunked and indexed.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, PipelineState::Ready(_))
    }

    /// Chunk and index a document, then assemble the turn pipeline.
    ///
    /// Returns the number of indexed chunks. Any failure aborts
    /// initialization entirely and the prior state (including a previously
    /// loaded document) stays in place. Loading a new document clears all
    /// session transcripts unless `retain_history_on_reload` is set.
    pub async fn load_document(&mut self, text: &str) -> RagResult<usize> {
        let chunker = Chunker::with_config(self.config.chunking.clone())?;
        let chunks = chunker.chunk(text)?;

        let index = EmbeddingIndex::build(&self.embedder, chunks).await?;
        let chunk_count = index.len();
        let index = Arc::new(index);

        let chain = RagChain {
            contextualizer: QueryContextualizer::new(Arc::clone(&self.chat_model)),
            retriever: Retriever::new(
                Arc::clone(&self.embedder),
                index,
                self.config.retrieval.top_k,
            ),
            generator: AnswerGenerator::new(
                Arc::clone(&self.chat_model),
                self.config.generation.clone(),
            ),
        };

        if !self.config.retain_history_on_reload {
            self.sessions.clear();
        }

        self.state = PipelineState::Ready(chain);

        tracing::info!(chunks = chunk_count, "document loaded");

        Ok(chunk_count)
    }

    /// Answer one user turn.
    ///
    /// Contextualizes the question against the session transcript, retrieves
    /// the top-k chunks, and generates a grounded answer. The user and
    /// assistant turns are appended only after the answer succeeds; on any
    /// failure the transcript is untouched and the error propagates.
    pub async fn handle_turn(&mut self, session_id: &str, question: &str) -> RagResult<String> {
        let PipelineState::Ready(chain) = &self.state else {
            return Err(RagError::NotReady);
        };

        let transcript = self.sessions.get_or_create(session_id).clone();

        let standalone = chain.contextualizer.contextualize(question, &transcript).await?;
        let chunks = chain.retriever.retrieve(&standalone).await?;
        let answer = chain.generator.generate(&standalone, &chunks, &transcript).await?;

        self.sessions.append(session_id, Role::User, question);
        self.sessions.append(session_id, Role::Assistant, answer.clone());

        Ok(answer)
    }

    /// Transcript length for a session (test and display hook).
    pub fn transcript_len(&mut self, session_id: &str) -> usize {
        self.sessions.get_or_create(session_id).len()
    }

    /// Read-only view of a session transcript.
    pub fn transcript(&mut self, session_id: &str) -> &crate::domain::models::Transcript {
        self.sessions.get_or_create(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::domain::models::Turn;

    /// Embeds any text as a constant vector.
    struct ConstEmbedder;

    #[async_trait]
    impl EmbeddingProvider for ConstEmbedder {
        fn name(&self) -> &'static str {
            "const"
        }

        fn dimension(&self) -> usize {
            2
        }

        async fn embed(&self, _text: &str) -> RagResult<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }
    }

    /// Echoes the input question; can be switched to fail on demand.
    struct FlakyChat {
        fail: AtomicBool,
    }

    impl FlakyChat {
        fn new() -> Self {
            Self {
                fail: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl ChatModel for FlakyChat {
        fn name(&self) -> &'static str {
            "flaky"
        }

        async fn complete(&self, _system: &str, _history: &[Turn], input: &str) -> RagResult<String> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RagError::GenerationService("service down".to_string()));
            }
            Ok(input.to_string())
        }
    }

    fn engine_with(chat: Arc<FlakyChat>) -> RagEngine {
        RagEngine::new(Config::default(), Arc::new(ConstEmbedder), chat)
    }

    #[tokio::test]
    async fn test_turn_rejected_before_load() {
        let mut engine = engine_with(Arc::new(FlakyChat::new()));
        assert!(!engine.is_ready());

        let result = engine.handle_turn("s", "hello?").await;
        assert!(matches!(result, Err(RagError::NotReady)));
        assert_eq!(engine.transcript_len("s"), 0);
    }

    #[tokio::test]
    async fn test_successful_turn_appends_two_turns() {
        let mut engine = engine_with(Arc::new(FlakyChat::new()));
        engine.load_document("The sky is blue.").await.unwrap();
        assert!(engine.is_ready());

        let answer = engine.handle_turn("s", "What color is the sky?").await.unwrap();
        assert!(!answer.is_empty());

        let transcript = engine.transcript("s");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].role, Role::User);
        assert_eq!(transcript.turns()[0].content, "What color is the sky?");
        assert_eq!(transcript.turns()[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_failed_turn_leaves_transcript_untouched() {
        let chat = Arc::new(FlakyChat::new());
        let mut engine = engine_with(Arc::clone(&chat));
        engine.load_document("The sky is blue.").await.unwrap();

        engine.handle_turn("s", "first").await.unwrap();
        assert_eq!(engine.transcript_len("s"), 2);

        chat.fail.store(true, Ordering::SeqCst);
        let result = engine.handle_turn("s", "second").await;
        assert!(matches!(result, Err(RagError::GenerationService(_))));
        assert_eq!(engine.transcript_len("s"), 2);
    }

    #[tokio::test]
    async fn test_empty_document_fails_and_stays_uninitialized() {
        let mut engine = engine_with(Arc::new(FlakyChat::new()));
        let result = engine.load_document("").await;
        assert!(matches!(result, Err(RagError::Chunking(_))));
        assert!(!engine.is_ready());
    }

    #[tokio::test]
    async fn test_reload_clears_history_by_default() {
        let mut engine = engine_with(Arc::new(FlakyChat::new()));
        engine.load_document("First document.").await.unwrap();
        engine.handle_turn("s", "q").await.unwrap();
        assert_eq!(engine.transcript_len("s"), 2);

        engine.load_document("Second document.").await.unwrap();
        assert_eq!(engine.transcript_len("s"), 0);
    }

    #[tokio::test]
    async fn test_reload_retains_history_when_configured() {
        let config = Config {
            retain_history_on_reload: true,
            ..Config::default()
        };

        let mut engine = RagEngine::new(
            config,
            Arc::new(ConstEmbedder),
            Arc::new(FlakyChat::new()),
        );
        engine.load_document("First document.").await.unwrap();
        engine.handle_turn("s", "q").await.unwrap();

        engine.load_document("Second document.").await.unwrap();
        assert_eq!(engine.transcript_len("s"), 2);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_prior_document() {
        let mut engine = engine_with(Arc::new(FlakyChat::new()));
        engine.load_document("First document.").await.unwrap();

        let result = engine.load_document("").await;
        assert!(result.is_err());

        // The previous pipeline still answers.
        assert!(engine.is_ready());
        assert!(engine.handle_turn("s", "still there?").await.is_ok());
    }
}
