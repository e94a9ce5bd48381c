use serde::{Deserialize, Serialize};

/// Weights for the combined rank score.
///
/// `rank = similarity * similarity_weight + recency * recency_weight +
/// filter_match * filter_match_weight`. Recency is a step function over
/// the publication year, not a decay — the product shows a binary
/// "recent" badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankWeights {
    pub similarity_weight: f64,
    pub recency_weight: f64,
    pub filter_match_weight: f64,
    /// Papers published within this many years of "now" get the recency
    /// boost; the boundary year itself counts as recent.
    pub recent_window_years: i32,
}

impl Default for RerankWeights {
    fn default() -> Self {
        Self {
            similarity_weight: 0.7,
            recency_weight: 0.2,
            filter_match_weight: 0.1,
            recent_window_years: crate::constants::RECENT_WINDOW_YEARS,
        }
    }
}
