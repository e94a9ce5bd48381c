use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::citation::Citation;
use crate::models::passage::{RankedPassage, SearchFilters};
use crate::models::query::Query;
use crate::models::relevance::AgingRelevance;

/// Why a response carries zero passages. Empty results are data, not
/// errors — callers render guidance instead of a failure page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EmptyResultReason {
    /// Active filters matched nothing; suggest broadening them.
    FilterTooNarrow,
    /// The index returned nothing for this query.
    NoMatches,
}

/// Response metadata consumed by dashboards and the UI stats strip.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseMetadata {
    /// Mean similarity of the top-ranked passages, clamped to [0, 1].
    pub confidence: f64,
    /// Protein symbols found in retrieved passages and the answer, sorted.
    pub proteins_mentioned: Vec<String>,
    /// Theory ids found in retrieved passages and the answer, sorted.
    pub theories_identified: Vec<String>,
    /// Wall-clock time for the whole query.
    pub query_time_ms: f64,
    /// Echo of the filters that were applied.
    pub filters_applied: SearchFilters,
    /// Number of passages retrieved (after filtering and truncation).
    pub chunks_retrieved: usize,
    /// True when synthesis failed and the answer is empty but passages
    /// and citations are still present.
    pub degraded: bool,
}

/// The assembled result of one query through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueryResponse {
    pub query: Query,
    /// Synthesized answer; empty when synthesis was disabled or degraded.
    pub answer: String,
    pub ranked_passages: Vec<RankedPassage>,
    /// Deduplicated citations for the passages supplied to synthesis.
    pub citations: Vec<Citation>,
    /// Present on general (unfiltered) queries.
    pub relevance: Option<AgingRelevance>,
    pub metadata: ResponseMetadata,
    /// True when the query carried no protein/theory filter.
    pub is_general_query: bool,
    pub empty_reason: Option<EmptyResultReason>,
}

impl QueryResponse {
    pub fn confidence(&self) -> f64 {
        self.metadata.confidence
    }

    pub fn proteins_mentioned(&self) -> &[String] {
        &self.metadata.proteins_mentioned
    }

    pub fn theories_identified(&self) -> &[String] {
        &self.metadata.theories_identified
    }

    pub fn query_time_ms(&self) -> f64 {
        self.metadata.query_time_ms
    }

    pub fn chunks_retrieved(&self) -> usize {
        self.metadata.chunks_retrieved
    }

    pub fn is_degraded(&self) -> bool {
        self.metadata.degraded
    }

    pub fn is_empty_result(&self) -> bool {
        self.ranked_passages.is_empty()
    }
}
