use async_trait::async_trait;

use crate::errors::ProviderError;

/// Embedding generation provider.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a fixed-length vector of floats.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
