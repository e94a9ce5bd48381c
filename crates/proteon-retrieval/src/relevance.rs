//! Aging-relevance scoring: does this query/answer connect to aging
//! biology, and how strongly?
//!
//! Evidence is theory hits (from the answer and the retrieved passages)
//! and distinct aging-keyword hits in the answer. The score is a bounded
//! weighted sum, monotonically non-decreasing in both counts.

use std::collections::HashSet;
use std::sync::Arc;

use proteon_core::config::RelevanceWeights;
use proteon_core::models::{AgingRelevance, RankedPassage, Relevance};
use proteon_vocab::{EntityExtractor, Vocabulary};

/// Curated connection phrases for keyword evidence. Keywords without an
/// entry contribute to the score but not to the connection list.
const KEYWORD_CONNECTIONS: &[(&str, &str)] = &[
    ("mitochondrial", "Involved in mitochondrial function and energy metabolism"),
    ("oxidative stress", "Related to oxidative stress response"),
    ("telomere", "Associated with telomere maintenance"),
    ("senescence", "Linked to cellular senescence pathways"),
    ("autophagy", "Regulates autophagy and cellular recycling"),
    ("inflammation", "Modulates inflammatory responses"),
    ("longevity", "Directly associated with longevity regulation"),
    ("lifespan", "Directly associated with longevity regulation"),
];

pub struct AgingRelevanceScorer {
    vocabulary: Arc<Vocabulary>,
    extractor: Arc<EntityExtractor>,
    weights: RelevanceWeights,
}

impl AgingRelevanceScorer {
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        extractor: Arc<EntityExtractor>,
        weights: RelevanceWeights,
    ) -> Self {
        Self {
            vocabulary,
            extractor,
            weights,
        }
    }

    /// Score the aging connection of an answer plus its supporting
    /// passages.
    pub fn score(&self, answer_text: &str, passages: &[RankedPassage]) -> AgingRelevance {
        // Theory evidence: extractor hits on the answer, then passage
        // tags, deduplicated in first-appearance order.
        let mut seen = HashSet::new();
        let mut theories = Vec::new();
        for id in self.extractor.extract_theories(answer_text) {
            if seen.insert(id.clone()) {
                theories.push(id);
            }
        }
        for ranked in passages {
            for id in &ranked.passage.theories {
                if seen.insert(id.clone()) {
                    theories.push(id.clone());
                }
            }
        }

        let keywords = self.extractor.distinct_keywords(answer_text);

        let raw = self.weights.theory_weight * theories.len() as f64
            + self.weights.keyword_weight * keywords.len() as f64;
        let score = Relevance::new(raw.min(1.0));
        let has_connection = score.value() > 0.0 || !theories.is_empty();

        let connections = self.connections(&theories, &keywords);

        AgingRelevance {
            has_connection,
            score,
            connections,
            theories,
        }
    }

    /// Template matched theories and keywords into short display phrases,
    /// deduplicated and capped.
    fn connections(&self, theories: &[String], keywords: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut phrases = Vec::new();

        for id in theories {
            let phrase = match self.vocabulary.theories.get(id) {
                Some(entry) => entry.connection_phrase(),
                None => format!("Involved in {}", id.replace('_', " ")),
            };
            if seen.insert(phrase.clone()) {
                phrases.push(phrase);
            }
        }

        for keyword in keywords {
            if let Some((_, phrase)) = KEYWORD_CONNECTIONS
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(keyword))
            {
                if seen.insert((*phrase).to_string()) {
                    phrases.push((*phrase).to_string());
                }
            }
        }

        phrases.truncate(self.weights.max_connections);
        phrases
    }
}
