use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Similarity score clamped to [0.0, 1.0].
/// Produced by the vector index; higher means closer to the query.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Similarity(f64);

impl Similarity {
    /// Create a new Similarity, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Similarity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Similarity> for f64 {
    fn from(s: Similarity) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Similarity::new(1.7).value(), 1.0);
        assert_eq!(Similarity::new(-0.3).value(), 0.0);
        assert_eq!(Similarity::new(0.42).value(), 0.42);
    }
}
