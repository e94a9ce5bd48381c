use std::sync::Arc;

use proptest::prelude::*;

use proteon_core::config::{RelevanceWeights, RerankWeights};
use proteon_core::models::{RankedPassage, SearchFilters, Similarity};
use proteon_retrieval::confidence::confidence;
use proteon_retrieval::{AgingRelevanceScorer, Reranker};
use proteon_vocab::{EntityExtractor, Vocabulary};
use test_fixtures::passage;

fn passages_from(similarities: &[f64], years: &[i32]) -> Vec<proteon_core::models::PassageRecord> {
    similarities
        .iter()
        .zip(years.iter().cycle())
        .enumerate()
        .map(|(i, (s, y))| {
            let mut p = passage(&format!("p{i}"), &format!("PMC{i}"), None, "t", *y, "");
            p.similarity = Similarity::new(*s);
            p
        })
        .collect()
}

proptest! {
    #[test]
    fn rank_scores_are_sorted_descending(
        sims in prop::collection::vec(0.0f64..=1.0, 0..40),
        limit in 0usize..60,
    ) {
        let reranker = Reranker::new(RerankWeights::default());
        let passages = passages_from(&sims, &[2010, 2021, 2024]);
        let ranked = reranker.rerank(passages, &SearchFilters::default(), limit, 2025);

        prop_assert!(ranked.len() <= limit);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].rank_score >= pair[1].rank_score);
        }
    }

    #[test]
    fn rank_scores_stay_within_weight_bounds(
        sims in prop::collection::vec(0.0f64..=1.0, 1..40),
    ) {
        let weights = RerankWeights::default();
        let max = weights.similarity_weight + weights.recency_weight + weights.filter_match_weight;
        let reranker = Reranker::new(weights);
        let passages = passages_from(&sims, &[1990, 2025]);
        for ranked in reranker.rerank(passages, &SearchFilters::default(), usize::MAX, 2025) {
            prop_assert!(ranked.rank_score >= 0.0);
            prop_assert!(ranked.rank_score <= max + f64::EPSILON);
        }
    }

    #[test]
    fn confidence_is_always_within_unit_interval(
        sims in prop::collection::vec(0.0f64..=1.0, 0..10),
    ) {
        let ranked: Vec<RankedPassage> = passages_from(&sims, &[2020])
            .into_iter()
            .map(|p| RankedPassage { passage: p, rank_score: 0.0, recent: false, filter_match: true })
            .collect();
        let c = confidence(&ranked);
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn relevance_score_is_bounded_and_consistent(text in ".{0,400}") {
        let vocabulary = Arc::new(Vocabulary::builtin());
        let extractor = Arc::new(EntityExtractor::new(&vocabulary).unwrap());
        let scorer = AgingRelevanceScorer::new(vocabulary, extractor, RelevanceWeights::default());

        let verdict = scorer.score(&text, &[]);
        prop_assert!((0.0..=1.0).contains(&verdict.score.value()));
        if verdict.score.value() > 0.0 {
            prop_assert!(verdict.has_connection);
        }
        prop_assert!(verdict.connections.len() <= RelevanceWeights::default().max_connections);
    }

    #[test]
    fn adding_theory_evidence_never_decreases_the_score(text in ".{0,200}") {
        let vocabulary = Arc::new(Vocabulary::builtin());
        let extractor = Arc::new(EntityExtractor::new(&vocabulary).unwrap());
        let scorer = AgingRelevanceScorer::new(vocabulary, extractor, RelevanceWeights::default());

        let without = scorer.score(&text, &[]);

        let mut p = passage("p0", "PMC0", None, "t", 2020, "");
        p.theories = vec!["dysbiosis".into()];
        let with_theory = vec![RankedPassage {
            passage: p,
            rank_score: 0.0,
            recent: false,
            filter_match: true,
        }];
        let with = scorer.score(&text, &with_theory);

        prop_assert!(with.score.value() >= without.score.value());
    }
}
