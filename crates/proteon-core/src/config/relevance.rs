use serde::{Deserialize, Serialize};

/// Weights for the aging-relevance score.
///
/// `score = min(1.0, theory_weight * theories + keyword_weight * keywords)`
/// — bounded and monotonically non-decreasing in both counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceWeights {
    pub theory_weight: f64,
    pub keyword_weight: f64,
    /// Cap on connection phrases attached to a verdict.
    pub max_connections: usize,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            theory_weight: 0.15,
            keyword_weight: 0.10,
            max_connections: crate::constants::MAX_CONNECTIONS,
        }
    }
}
