//! OpenAI-compatible chat-completions client
//! (`POST {base_url}/chat/completions`).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use proteon_core::errors::ProviderError;
use proteon_core::traits::{ILlmProvider, LlmRequest};

use crate::map_reqwest_error;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Completion provider backed by an OpenAI-compatible `/chat/completions`
/// endpoint.
pub struct OpenAiCompatLlm {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

impl OpenAiCompatLlm {
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

    pub(crate) fn parse(body: &str) -> Result<String, ProviderError> {
        let parsed: ChatResponse =
            serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse {
                reason: e.to_string(),
            })?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse {
                reason: "chat response has no choices".into(),
            })
    }
}

#[async_trait]
impl ILlmProvider for OpenAiCompatLlm {
    async fn complete(&self, request: &LlmRequest) -> Result<String, ProviderError> {
        let chat = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&chat)
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, self.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                reason: format!("chat endpoint returned {status}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_reqwest_error(e, self.timeout_ms))?;
        let content = Self::parse(&body)?;
        debug!(model = %self.model, chars = content.len(), "completion received");
        Ok(content)
    }

    fn name(&self) -> &str {
        "openai-compat-llm"
    }
}
