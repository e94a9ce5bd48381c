/// Vocabulary loading/compilation errors. Raised once at startup — the
/// hot path never sees these.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("invalid vocabulary json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("failed to compile matcher pattern: {reason}")]
    PatternCompile { reason: String },
}
