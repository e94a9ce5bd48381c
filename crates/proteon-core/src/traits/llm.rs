use async_trait::async_trait;

use crate::errors::ProviderError;

/// A single completion request to the language model.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Language-model completion provider.
#[async_trait]
pub trait ILlmProvider: Send + Sync {
    /// Generate a completion. Implementations must not retry internally;
    /// the synthesizer owns the retry budget.
    async fn complete(&self, request: &LlmRequest) -> Result<String, ProviderError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
