use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::DEFAULT_TOP_K;

/// A user query with optional entity filters.
///
/// Immutable once handed to the engine; build with the `with_*` methods.
/// A query without any filter is a "general" query and additionally gets
/// aging-relevance analysis on its response.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Query {
    /// Raw query text.
    pub text: String,
    /// Restrict results to passages mentioning this protein symbol.
    pub protein_filter: Option<String>,
    /// Restrict results to passages tagged with at least one of these theory ids.
    pub theory_filters: Vec<String>,
    /// Requested result count. Clamped to the configured maximum at retrieval.
    pub top_k: usize,
    /// Whether to synthesize a prose answer via the LLM.
    pub synthesize: bool,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            protein_filter: None,
            theory_filters: Vec::new(),
            top_k: DEFAULT_TOP_K,
            synthesize: true,
        }
    }

    pub fn with_protein_filter(mut self, symbol: impl Into<String>) -> Self {
        self.protein_filter = Some(symbol.into());
        self
    }

    pub fn with_theory_filters(mut self, theories: Vec<String>) -> Self {
        self.theory_filters = theories;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_synthesis(mut self, synthesize: bool) -> Self {
        self.synthesize = synthesize;
        self
    }

    /// Whether any protein or theory filter is active.
    pub fn has_filters(&self) -> bool {
        self.protein_filter.is_some() || !self.theory_filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let q = Query::new("what does SIRT6 do?");
        assert_eq!(q.top_k, DEFAULT_TOP_K);
        assert!(q.synthesize);
        assert!(!q.has_filters());
    }

    #[test]
    fn filters_flip_has_filters() {
        let q = Query::new("x").with_protein_filter("APOE");
        assert!(q.has_filters());
        let q = Query::new("x").with_theory_filters(vec!["cellular_senescence".into()]);
        assert!(q.has_filters());
    }
}
