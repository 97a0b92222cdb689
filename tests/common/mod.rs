//! Shared deterministic stubs for the external embedding and chat services.

use std::sync::Mutex;

use async_trait::async_trait;

use docchat::domain::models::Turn;
use docchat::{ChatModel, EmbeddingProvider, RagResult};

pub const EMBED_DIM: usize = 16;

/// Deterministic bag-of-words embedder: each word is hashed into one of
/// `EMBED_DIM` buckets. Identical texts always produce identical vectors.
pub struct HashEmbedder;

fn bucket(word: &str) -> usize {
    word.bytes().map(usize::from).sum::<usize>() % EMBED_DIM
}

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash-stub"
    }

    fn dimension(&self) -> usize {
        EMBED_DIM
    }

    async fn embed(&self, text: &str) -> RagResult<Vec<f32>> {
        let mut vector = vec![0.0f32; EMBED_DIM];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            vector[bucket(&word.to_lowercase())] += 1.0;
        }
        Ok(vector)
    }
}

/// One recorded chat-model invocation.
#[derive(Debug, Clone)]
pub struct ChatCall {
    pub system: String,
    pub history_len: usize,
    pub input: String,
}

/// Deterministic chat stub that plays both pipeline roles.
///
/// Contextualization requests (recognized by the rewrite instruction) echo
/// the question when the history is empty and otherwise apply scripted
/// rewrites. Generation requests echo the context sentences that share a
/// keyword with the question, or answer "I don't know." when nothing
/// matches. Every call is recorded for assertions.
#[derive(Default)]
pub struct ScriptedChat {
    pub rewrites: Vec<(&'static str, &'static str)>,
    pub calls: Mutex<Vec<ChatCall>>,
}

impl ScriptedChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rewrite(mut self, from: &'static str, to: &'static str) -> Self {
        self.rewrites.push((from, to));
        self
    }

    fn contextualize(&self, history_len: usize, input: &str) -> String {
        if history_len == 0 {
            return input.to_string();
        }
        self.rewrites
            .iter()
            .find(|(from, _)| *from == input)
            .map_or_else(|| input.to_string(), |(_, to)| (*to).to_string())
    }

    fn generate(system: &str, input: &str) -> String {
        // Everything after the fixed instruction is the stuffed context.
        let context = system
            .split_once("concise.")
            .map_or("", |(_, rest)| rest)
            .trim();

        if context.is_empty() {
            return "I don't know.".to_string();
        }

        let question_words: Vec<String> = input
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() > 2)
            .map(str::to_lowercase)
            .collect();

        let matched: Vec<&str> = context
            .split_inclusive(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| {
                let lower = sentence.to_lowercase();
                question_words.iter().any(|w| lower.contains(w.as_str()))
            })
            .collect();

        if matched.is_empty() {
            "I don't know.".to_string()
        } else {
            matched.join(" ")
        }
    }
}

#[async_trait]
impl ChatModel for ScriptedChat {
    fn name(&self) -> &'static str {
        "scripted-stub"
    }

    async fn complete(&self, system: &str, history: &[Turn], input: &str) -> RagResult<String> {
        self.calls.lock().unwrap().push(ChatCall {
            system: system.to_string(),
            history_len: history.len(),
            input: input.to_string(),
        });

        let is_contextualize = system.starts_with("Given a chat history");
        if is_contextualize {
            Ok(self.contextualize(history.len(), input))
        } else {
            Ok(Self::generate(system, input))
        }
    }
}
