use crate::errors::ProviderError;

/// Retrieval-stage errors. Every variant is post-retry and fatal for the
/// request — with nothing retrieved there is nothing to synthesize from.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding failed after {attempts} attempts: {source}")]
    EmbeddingFailed {
        attempts: u32,
        #[source]
        source: ProviderError,
    },

    #[error("vector index unreachable after {attempts} attempts: {source}")]
    IndexUnreachable {
        attempts: u32,
        #[source]
        source: ProviderError,
    },
}
