//! Answer synthesis wrapper around the LLM provider: bounded retries,
//! per-attempt timeout, empty-completion guard.

use std::sync::Arc;

use tracing::{debug, info};

use proteon_core::config::SynthesisConfig;
use proteon_core::errors::{ProviderError, SynthesisError};
use proteon_core::models::{Citation, Query, RankedPassage};
use proteon_core::retry::RetryPolicy;
use proteon_core::traits::ILlmProvider;

use crate::prompt;

pub struct AnswerSynthesizer {
    llm: Arc<dyn ILlmProvider>,
    config: SynthesisConfig,
}

impl AnswerSynthesizer {
    pub fn new(llm: Arc<dyn ILlmProvider>, config: SynthesisConfig) -> Self {
        Self { llm, config }
    }

    /// The number of top-ranked passages supplied to the model as context.
    pub fn context_size(&self) -> usize {
        self.config.context_passages
    }

    /// Synthesize a grounded answer from the context slice.
    ///
    /// Retries transient provider failures with backoff; exhaustion or an
    /// empty completion is a `SynthesisError`, which the orchestrator
    /// degrades instead of failing the request.
    pub async fn synthesize(
        &self,
        query: &Query,
        context: &[RankedPassage],
        citations: &[Citation],
    ) -> Result<String, SynthesisError> {
        let request = prompt::build(&query.text, context, citations, &self.config);
        debug!(
            context_passages = context.len(),
            prompt_chars = request.user.len(),
            provider = self.llm.name(),
            "synthesizing answer"
        );

        let policy = RetryPolicy::new(
            self.config.retry_attempts,
            self.config.retry_base_delay_ms,
            self.config.timeout_ms,
        );
        let answer = policy
            .run("synthesize", || self.llm.complete(&request))
            .await
            .map_err(|(attempts, source)| match source {
                ProviderError::Timeout { ms } => SynthesisError::Timeout { ms },
                source => SynthesisError::ProviderFailed { attempts, source },
            })?;

        let answer = answer.trim().to_string();
        if answer.is_empty() {
            return Err(SynthesisError::EmptyCompletion);
        }

        info!(answer_chars = answer.len(), "answer synthesized");
        Ok(answer)
    }
}
