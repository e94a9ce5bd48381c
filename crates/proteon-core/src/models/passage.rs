use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::query::Query;
use crate::models::similarity::Similarity;

/// A contiguous span of text from an indexed paper — the atomic unit of
/// retrieval. Produced by the vector index and read-only downstream.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PassageRecord {
    /// Unique chunk id within the index.
    pub id: String,
    /// Source paper id (PubMed Central).
    pub pmcid: String,
    /// PubMed id, when the paper has one.
    pub pmid: Option<String>,
    /// Paper title.
    pub title: String,
    /// Publication year.
    pub year: i32,
    /// Raw passage text.
    pub text: String,
    /// Similarity to the query vector.
    pub similarity: Similarity,
    /// Protein symbols mentioned in this passage.
    pub proteins: Vec<String>,
    /// Aging-theory ids tagged on this passage.
    pub theories: Vec<String>,
}

impl PassageRecord {
    /// Whether this passage mentions the given protein symbol (case-insensitive).
    pub fn mentions_protein(&self, symbol: &str) -> bool {
        self.proteins.iter().any(|p| p.eq_ignore_ascii_case(symbol))
    }

    /// Whether this passage is tagged with the given theory id.
    pub fn has_theory(&self, theory_id: &str) -> bool {
        self.theories.iter().any(|t| t == theory_id)
    }
}

/// Conjunctive metadata filters applied at retrieval time.
///
/// A protein filter requires the passage to mention that symbol; theory
/// filters require at least one of the listed theories. Filters are never
/// relaxed for recall.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchFilters {
    pub protein: Option<String>,
    pub theories: Vec<String>,
}

impl SearchFilters {
    pub fn from_query(query: &Query) -> Self {
        Self {
            protein: query.protein_filter.clone(),
            theories: query.theory_filters.clone(),
        }
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.protein.is_none() && self.theories.is_empty()
    }

    /// Whether a passage satisfies every active filter.
    pub fn matches(&self, passage: &PassageRecord) -> bool {
        if let Some(protein) = &self.protein {
            if !passage.mentions_protein(protein) {
                return false;
            }
        }
        if !self.theories.is_empty() && !self.theories.iter().any(|t| passage.has_theory(t)) {
            return false;
        }
        true
    }
}

/// A passage with its combined rank score from re-ranking.
///
/// Ordering is stable: descending rank score, ties broken by original
/// similarity, then by insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedPassage {
    pub passage: PassageRecord,
    /// Combined score: similarity, recency boost, filter-match boost.
    pub rank_score: f64,
    /// Binary "recent" badge — published within the recency window.
    pub recent: bool,
    /// Whether the passage satisfies every active filter.
    pub filter_match: bool,
}
