/// Transport-level failures from external collaborators (embedding
/// provider, vector index, LLM).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("http error: {reason}")]
    Http { reason: String },

    #[error("provider timed out after {ms} ms")]
    Timeout { ms: u64 },

    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("provider unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ProviderError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Timeout { .. } | Self::Unavailable { .. }
        )
    }
}
