use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Aging-relevance score clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Relevance(f64);

impl Relevance {
    /// Create a new Relevance, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Display band for this score.
    pub fn band(self) -> RelevanceBand {
        RelevanceBand::for_score(self.0)
    }
}

impl Default for Relevance {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Display band for a relevance score. Pure, stateless classification —
/// the UI reproduces these labels verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RelevanceBand {
    High,
    Moderate,
    Low,
}

impl RelevanceBand {
    /// Scores at or above this are High.
    pub const HIGH: f64 = 0.7;
    /// Scores at or above this (and below HIGH) are Moderate.
    pub const MODERATE: f64 = 0.4;

    pub fn for_score(score: f64) -> Self {
        if score >= Self::HIGH {
            Self::High
        } else if score >= Self::MODERATE {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

/// Verdict on how strongly a query/answer connects to aging biology.
/// Derived per response, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgingRelevance {
    /// True when any theory or keyword evidence was found.
    pub has_connection: bool,
    pub score: Relevance,
    /// Human-readable connection phrases, deduplicated, insertion order.
    pub connections: Vec<String>,
    /// Theory ids backing the verdict.
    pub theories: Vec<String>,
}

impl AgingRelevance {
    /// Display band for the score.
    pub fn band(&self) -> RelevanceBand {
        self.score.band()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_thresholds_are_inclusive() {
        assert_eq!(RelevanceBand::for_score(0.7), RelevanceBand::High);
        assert_eq!(RelevanceBand::for_score(0.69), RelevanceBand::Moderate);
        assert_eq!(RelevanceBand::for_score(0.4), RelevanceBand::Moderate);
        assert_eq!(RelevanceBand::for_score(0.39), RelevanceBand::Low);
        assert_eq!(RelevanceBand::for_score(0.0), RelevanceBand::Low);
        assert_eq!(RelevanceBand::for_score(1.0), RelevanceBand::High);
    }

    #[test]
    fn relevance_clamps() {
        assert_eq!(Relevance::new(2.0).value(), 1.0);
        assert_eq!(Relevance::new(-1.0).value(), 0.0);
    }
}
