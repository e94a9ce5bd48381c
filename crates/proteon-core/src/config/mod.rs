//! Engine configuration. Every tunable weight and threshold lives here as
//! a named field so the exact numbers are reviewable and testable apart
//! from the orchestration logic. All sections load from TOML with serde
//! defaults; an empty document yields the full default config.

mod relevance;
mod rerank;
mod retrieval;
mod synthesis;

pub use relevance::RelevanceWeights;
pub use rerank::RerankWeights;
pub use retrieval::RetrievalConfig;
pub use synthesis::SynthesisConfig;

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub retrieval: RetrievalConfig,
    pub rerank: RerankWeights,
    pub relevance: RelevanceWeights,
    pub synthesis: SynthesisConfig,
}

impl EngineConfig {
    /// Parse a TOML document; missing sections and fields fall back to
    /// defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
