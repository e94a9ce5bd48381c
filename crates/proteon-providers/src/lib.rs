//! # proteon-providers
//!
//! Production implementations of the embedding and LLM provider traits
//! against OpenAI-compatible HTTP APIs. The hosted embedding and chat
//! services the product uses both speak this wire format, so one client
//! shape covers both collaborators.
//!
//! These adapters do not retry — the retrieval and synthesis layers own
//! the retry budget.

pub mod embeddings;
pub mod llm;

pub use embeddings::OpenAiCompatEmbeddings;
pub use llm::OpenAiCompatLlm;

use proteon_core::errors::ProviderError;

pub(crate) fn map_reqwest_error(error: reqwest::Error, timeout_ms: u64) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout { ms: timeout_ms }
    } else if error.is_connect() {
        ProviderError::Unavailable {
            reason: error.to_string(),
        }
    } else {
        ProviderError::Http {
            reason: error.to_string(),
        }
    }
}
