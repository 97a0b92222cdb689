//! Nomic Atlas embedding provider adapter.
//!
//! Calls the Nomic `/v1/embedding/text` endpoint. One request per text;
//! failures surface as `RagError::EmbeddingService` without retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::EmbeddingConfig;
use crate::domain::ports::EmbeddingProvider;

/// Nomic Atlas embedding provider.
pub struct NomicEmbeddingProvider {
    config: EmbeddingConfig,
    api_key: String,
    client: reqwest::Client,
}

impl NomicEmbeddingProvider {
    pub fn new(config: EmbeddingConfig, api_key: String) -> RagResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RagError::EmbeddingService(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    async fn call_embedding_api(&self, text: &str) -> RagResult<Vec<f32>> {
        let url = format!("{}/embedding/text", self.config.base_url);

        let request_body = EmbeddingRequest {
            model: self.config.model.clone(),
            texts: vec![text.to_string()],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| RagError::EmbeddingService(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(RagError::EmbeddingService(format!(
                "embedding API returned {status}: {body}"
            )));
        }

        let result: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| RagError::EmbeddingService(format!("failed to parse response: {e}")))?;

        let vector = result
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| RagError::EmbeddingService("empty embedding response".to_string()))?;

        if vector.len() != self.config.dimension {
            return Err(RagError::EmbeddingService(format!(
                "malformed vector: expected dimension {}, got {}",
                self.config.dimension,
                vector.len()
            )));
        }

        Ok(vector)
    }
}

#[async_trait]
impl EmbeddingProvider for NomicEmbeddingProvider {
    fn name(&self) -> &'static str {
        "nomic"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    async fn embed(&self, text: &str) -> RagResult<Vec<f32>> {
        self.call_embedding_api(text).await
    }
}

// -- Nomic API request/response types --

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    texts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    embeddings: Vec<Vec<f32>>,
}
