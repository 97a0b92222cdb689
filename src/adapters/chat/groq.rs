//! Groq chat completion adapter.
//!
//! Calls the Groq OpenAI-compatible `/chat/completions` endpoint. Messages
//! are assembled as system instruction, then conversation history, then the
//! latest user input. Failures surface as `RagError::GenerationService`
//! without retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{ChatConfig, GenerationConfig, Turn};
use crate::domain::ports::ChatModel;

/// Groq chat completion provider.
pub struct GroqChatModel {
    chat: ChatConfig,
    generation: GenerationConfig,
    api_key: String,
    client: reqwest::Client,
}

impl GroqChatModel {
    pub fn new(
        chat: ChatConfig,
        generation: GenerationConfig,
        api_key: String,
    ) -> RagResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(chat.timeout_secs))
            .build()
            .map_err(|e| {
                RagError::GenerationService(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            chat,
            generation,
            api_key,
            client,
        })
    }

    fn build_messages(system: &str, history: &[Turn], input: &str) -> Vec<WireMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);

        messages.push(WireMessage {
            role: "system".to_string(),
            content: system.to_string(),
        });

        for turn in history {
            messages.push(WireMessage {
                role: turn.role.as_str().to_string(),
                content: turn.content.clone(),
            });
        }

        messages.push(WireMessage {
            role: "user".to_string(),
            content: input.to_string(),
        });

        messages
    }
}

#[async_trait]
impl ChatModel for GroqChatModel {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, system: &str, history: &[Turn], input: &str) -> RagResult<String> {
        let url = format!("{}/chat/completions", self.chat.base_url);

        let request_body = ChatCompletionRequest {
            model: self.generation.model.clone(),
            messages: Self::build_messages(system, history, input),
            temperature: self.generation.temperature,
            max_tokens: self.generation.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| RagError::GenerationService(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(RagError::GenerationService(format!(
                "chat API returned {status}: {body}"
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| RagError::GenerationService(format!("failed to parse response: {e}")))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| RagError::GenerationService("empty completion response".to_string()))
    }
}

// -- OpenAI-compatible request/response types --

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: WireMessage,
}
