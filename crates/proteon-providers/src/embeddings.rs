//! OpenAI-compatible embeddings client (`POST {base_url}/embeddings`).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use proteon_core::errors::ProviderError;
use proteon_core::traits::IEmbeddingProvider;

use crate::map_reqwest_error;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Embedding provider backed by an OpenAI-compatible `/embeddings`
/// endpoint.
pub struct OpenAiCompatEmbeddings {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

impl OpenAiCompatEmbeddings {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::with_timeout(base_url, api_key, model, DEFAULT_TIMEOUT_MS)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            timeout_ms,
        }
    }

    pub(crate) fn parse(body: &str) -> Result<Vec<f32>, ProviderError> {
        let parsed: EmbeddingsResponse =
            serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse {
                reason: e.to_string(),
            })?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| ProviderError::InvalidResponse {
                reason: "embeddings response has no data".into(),
            })
    }
}

#[async_trait]
impl IEmbeddingProvider for OpenAiCompatEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let request = EmbeddingsRequest {
            model: &self.model,
            input: vec![text],
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, self.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                reason: format!("embeddings endpoint returned {status}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_reqwest_error(e, self.timeout_ms))?;
        let vector = Self::parse(&body)?;
        debug!(model = %self.model, dims = vector.len(), "embedding created");
        Ok(vector)
    }

    fn name(&self) -> &str {
        "openai-compat-embeddings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedding_from_response_body() {
        let body = r#"{"data": [{"embedding": [0.1, 0.2, 0.3]}]}"#;
        let vector = OpenAiCompatEmbeddings::parse(body).unwrap();
        assert_eq!(vector, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn empty_data_is_invalid_response() {
        let body = r#"{"data": []}"#;
        let err = OpenAiCompatEmbeddings::parse(body).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse { .. }));
    }

    #[test]
    fn malformed_json_is_invalid_response() {
        let err = OpenAiCompatEmbeddings::parse("not json").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse { .. }));
    }

    #[test]
    fn request_body_shape_matches_the_wire_format() {
        let request = EmbeddingsRequest {
            model: "Qwen/Qwen3-Embedding-8B",
            input: vec!["what is SIRT6?"],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "Qwen/Qwen3-Embedding-8B");
        assert_eq!(json["input"][0], "what is SIRT6?");
    }
}
