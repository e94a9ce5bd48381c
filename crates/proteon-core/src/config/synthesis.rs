use serde::{Deserialize, Serialize};

/// Answer-synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Top-ranked passages embedded into the prompt as grounding context.
    pub context_passages: usize,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Per-attempt timeout for the LLM call.
    pub timeout_ms: u64,
    pub retry_attempts: u32,
    /// First backoff delay; doubles per attempt.
    pub retry_base_delay_ms: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            context_passages: crate::constants::SYNTHESIS_CONTEXT_PASSAGES,
            max_tokens: 400,
            temperature: 0.2,
            timeout_ms: 30_000,
            retry_attempts: 3,
            retry_base_delay_ms: 500,
        }
    }
}
