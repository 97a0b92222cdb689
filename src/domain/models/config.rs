//! Main configuration structure for docchat

use serde::{Deserialize, Serialize};

use super::chunking::ChunkerConfig;

/// Main configuration structure for docchat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Document chunking configuration
    #[serde(default)]
    pub chunking: ChunkerConfig,

    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Answer generation configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Embedding service configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Chat completion service configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Whether loading a new document keeps existing session transcripts.
    /// When false (the default), a re-upload clears all conversation history.
    #[serde(default)]
    pub retain_history_on_reload: bool,
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetrievalConfig {
    /// Number of chunks to retrieve per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

const fn default_top_k() -> usize {
    4
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

/// Answer generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GenerationConfig {
    /// Chat model identifier
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// Sampling temperature (0.0 to 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens to generate per response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Minimum answer length in sentences
    #[serde(default = "default_min_sentences")]
    pub min_sentences: u32,

    /// Maximum answer length in sentences
    #[serde(default = "default_max_sentences")]
    pub max_sentences: u32,
}

fn default_chat_model() -> String {
    "llama3-8b-8192".to_string()
}

const fn default_temperature() -> f64 {
    0.3
}

const fn default_max_tokens() -> u32 {
    2000
}

const fn default_min_sentences() -> u32 {
    5
}

const fn default_max_sentences() -> u32 {
    10
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_chat_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            min_sentences: default_min_sentences(),
            max_sentences: default_max_sentences(),
        }
    }
}

/// Embedding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EmbeddingConfig {
    /// Embedding model identifier
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Base URL for the embedding API
    #[serde(default = "default_embedding_base_url")]
    pub base_url: String,

    /// Expected embedding dimension
    #[serde(default = "default_embedding_dimension")]
    pub dimension: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_embedding_model() -> String {
    "nomic-embed-text-v1.5".to_string()
}

fn default_embedding_base_url() -> String {
    "https://api-atlas.nomic.ai/v1".to_string()
}

const fn default_embedding_dimension() -> usize {
    768
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: default_embedding_model(),
            base_url: default_embedding_base_url(),
            dimension: default_embedding_dimension(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Chat completion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChatConfig {
    /// Base URL for the chat completions API (OpenAI-compatible)
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_chat_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_chat_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

const fn default_chat_timeout_secs() -> u64 {
    120
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_base_url(),
            timeout_secs: default_chat_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
