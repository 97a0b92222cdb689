//! Credentials management infrastructure
//!
//! Resolves the two service API keys once at process start, from the
//! environment when available, otherwise from a local `api_key.json`
//! secrets file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the chat-completion service key.
pub const CHAT_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable holding the embedding service key.
pub const EMBEDDING_API_KEY_VAR: &str = "NOMIC_API_KEY";

const SECRETS_FILE: &str = "api_key.json";

/// API keys for the external embedding and chat services.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub chat_api_key: String,
    pub embedding_api_key: String,
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(rename = "GROQ_API_KEY")]
    groq_api_key: Option<String>,
    #[serde(rename = "NOMIC_API_KEY")]
    nomic_api_key: Option<String>,
}

impl Credentials {
    /// Load credentials from the environment, falling back to `api_key.json`
    /// in the working directory for any key the environment does not provide.
    pub fn load() -> Result<Self> {
        Self::load_from(SECRETS_FILE)
    }

    /// Load credentials with an explicit secrets-file path.
    pub fn load_from(secrets_path: impl AsRef<Path>) -> Result<Self> {
        let env_chat = std::env::var(CHAT_API_KEY_VAR).ok();
        let env_embedding = std::env::var(EMBEDDING_API_KEY_VAR).ok();

        if let (Some(chat), Some(embedding)) = (env_chat.clone(), env_embedding.clone()) {
            return Ok(Self {
                chat_api_key: chat,
                embedding_api_key: embedding,
            });
        }

        let path = secrets_path.as_ref();
        let raw = std::fs::read_to_string(path).with_context(|| {
            format!(
                "API keys not found in environment ({CHAT_API_KEY_VAR}, {EMBEDDING_API_KEY_VAR}) \
                 and secrets file {} is unreadable",
                path.display()
            )
        })?;

        let secrets: SecretsFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse secrets file {}", path.display()))?;

        let chat_api_key = env_chat
            .or(secrets.groq_api_key)
            .with_context(|| format!("{CHAT_API_KEY_VAR} missing from environment and secrets file"))?;
        let embedding_api_key = env_embedding
            .or(secrets.nomic_api_key)
            .with_context(|| format!("{EMBEDDING_API_KEY_VAR} missing from environment and secrets file"))?;

        Ok(Self {
            chat_api_key,
            embedding_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                (CHAT_API_KEY_VAR, Some("chat-key")),
                (EMBEDDING_API_KEY_VAR, Some("embed-key")),
            ],
            || {
                let creds = Credentials::load_from("/nonexistent/api_key.json").unwrap();
                assert_eq!(creds.chat_api_key, "chat-key");
                assert_eq!(creds.embedding_api_key, "embed-key");
            },
        );
    }

    #[test]
    fn test_load_from_secrets_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.json");
        std::fs::write(
            &path,
            r#"{"GROQ_API_KEY": "file-chat", "NOMIC_API_KEY": "file-embed"}"#,
        )
        .unwrap();

        temp_env::with_vars(
            [
                (CHAT_API_KEY_VAR, None::<&str>),
                (EMBEDDING_API_KEY_VAR, None::<&str>),
            ],
            || {
                let creds = Credentials::load_from(&path).unwrap();
                assert_eq!(creds.chat_api_key, "file-chat");
                assert_eq!(creds.embedding_api_key, "file-embed");
            },
        );
    }

    #[test]
    fn test_missing_everywhere_is_error() {
        temp_env::with_vars(
            [
                (CHAT_API_KEY_VAR, None::<&str>),
                (EMBEDDING_API_KEY_VAR, None::<&str>),
            ],
            || {
                let result = Credentials::load_from("/nonexistent/api_key.json");
                assert!(result.is_err());
            },
        );
    }
}
