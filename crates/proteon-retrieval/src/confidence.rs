//! Response confidence: mean similarity of the top-ranked passages.

use proteon_core::models::RankedPassage;

/// Number of top passages averaged into the confidence estimate.
const TOP_N: usize = 3;

/// Mean similarity of the top three ranked passages, clamped to [0, 1].
/// Empty results have zero confidence.
pub fn confidence(ranked: &[RankedPassage]) -> f64 {
    if ranked.is_empty() {
        return 0.0;
    }
    let top = &ranked[..ranked.len().min(TOP_N)];
    let sum: f64 = top.iter().map(|r| r.passage.similarity.value()).sum();
    (sum / top.len() as f64).clamp(0.0, 1.0)
}
