//! Combined-score re-ranking of retrieved passages.
//!
//! Factors: vector similarity, a binary recency boost, and a
//! filter-match boost. Recency is a step function over the publication
//! year — the product shows a binary "recent" badge, not a decay curve.

use std::cmp::Ordering;

use chrono::{Datelike, Utc};

use proteon_core::config::RerankWeights;
use proteon_core::models::{PassageRecord, RankedPassage, SearchFilters};

pub struct Reranker {
    weights: RerankWeights,
}

impl Reranker {
    pub fn new(weights: RerankWeights) -> Self {
        Self { weights }
    }

    /// Re-rank `passages` and truncate to `limit`.
    ///
    /// Sort is descending by combined score with stable tie-breaks:
    /// original similarity first, insertion order second.
    pub fn rerank(
        &self,
        passages: Vec<PassageRecord>,
        filters: &SearchFilters,
        limit: usize,
        current_year: i32,
    ) -> Vec<RankedPassage> {
        let w = &self.weights;
        let mut ranked: Vec<RankedPassage> = passages
            .into_iter()
            .map(|passage| {
                // Factor 1: similarity from the index.
                let similarity = passage.similarity.value();

                // Factor 2: recency step — the boundary year counts as recent.
                let recent = passage.year >= current_year - w.recent_window_years;

                // Factor 3: filter match. Filters are applied at retrieval
                // time, so this is 1.0 unless a filter was relaxed upstream.
                let filter_match = filters.matches(&passage);

                let rank_score = similarity * w.similarity_weight
                    + if recent { w.recency_weight } else { 0.0 }
                    + if filter_match { w.filter_match_weight } else { 0.0 };

                RankedPassage {
                    passage,
                    rank_score,
                    recent,
                    filter_match,
                }
            })
            .collect();

        // sort_by is stable: equal keys keep insertion order.
        ranked.sort_by(|a, b| {
            b.rank_score
                .partial_cmp(&a.rank_score)
                .unwrap_or(Ordering::Equal)
                .then(
                    b.passage
                        .similarity
                        .partial_cmp(&a.passage.similarity)
                        .unwrap_or(Ordering::Equal),
                )
        });
        ranked.truncate(limit);
        ranked
    }

    /// Re-rank against the current calendar year.
    pub fn rerank_now(
        &self,
        passages: Vec<PassageRecord>,
        filters: &SearchFilters,
        limit: usize,
    ) -> Vec<RankedPassage> {
        self.rerank(passages, filters, limit, Utc::now().year())
    }
}
