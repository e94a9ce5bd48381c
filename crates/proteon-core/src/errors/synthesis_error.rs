use crate::errors::ProviderError;

/// Synthesis-stage errors. Non-fatal: the orchestrator degrades the
/// response (passages and citations kept, answer empty, degraded flag).
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("llm provider failed after {attempts} attempts: {source}")]
    ProviderFailed {
        attempts: u32,
        #[source]
        source: ProviderError,
    },

    #[error("synthesis timed out after {ms} ms")]
    Timeout { ms: u64 },

    #[error("llm returned an empty completion")]
    EmptyCompletion,
}
