//! Entity extraction: find known protein symbols, theory triggers, and
//! aging keywords in free text.
//!
//! Matching is case-insensitive and whole-word only. Protein terms are
//! compiled into a single alternation sorted longest-first, so an overlap
//! like IGF1R never also registers IGF1 for the same span.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use proteon_core::errors::VocabularyError;

use crate::Vocabulary;

/// Entities found in one text, deduplicated in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityHits {
    /// Canonical protein symbols.
    pub proteins: Vec<String>,
    /// Theory ids whose triggers appeared.
    pub theories: Vec<String>,
}

/// Compiled matcher over a vocabulary. Built once at startup; `extract`
/// is pure and lock-free.
pub struct EntityExtractor {
    /// Single alternation over symbols and aliases; `None` when the
    /// protein vocabulary is empty.
    protein_pattern: Option<Regex>,
    /// Lowercased matched text → canonical symbol.
    normalization: HashMap<String, String>,
    theory_patterns: Vec<(String, Regex)>,
    keyword_patterns: Vec<(String, Regex)>,
}

impl EntityExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, VocabularyError> {
        let mut terms = vocabulary.proteins.match_terms();
        // Longest first, then lexical: longer symbols must win overlaps.
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let protein_pattern = if terms.is_empty() {
            None
        } else {
            let alternation = terms
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!(r"(?i)\b(?:{alternation})\b"))?)
        };

        let mut normalization = HashMap::new();
        for entry in vocabulary.proteins.entries() {
            normalization.insert(entry.symbol.to_lowercase(), entry.symbol.clone());
            for alias in &entry.aliases {
                normalization.insert(alias.to_lowercase(), entry.symbol.clone());
            }
        }

        let mut theory_patterns = Vec::new();
        for entry in vocabulary.theories.entries() {
            theory_patterns.push((entry.id.clone(), term_pattern(&entry.triggers)?));
        }

        let mut keyword_patterns = Vec::new();
        for keyword in &vocabulary.keywords {
            keyword_patterns.push((
                keyword.clone(),
                term_pattern(std::slice::from_ref(keyword))?,
            ));
        }

        Ok(Self {
            protein_pattern,
            normalization,
            theory_patterns,
            keyword_patterns,
        })
    }

    /// Find protein symbols and theory ids mentioned in `text`.
    pub fn extract(&self, text: &str) -> EntityHits {
        EntityHits {
            proteins: self.extract_proteins(text),
            theories: self.extract_theories(text),
        }
    }

    /// Canonical protein symbols in `text`, first-appearance order.
    pub fn extract_proteins(&self, text: &str) -> Vec<String> {
        let Some(pattern) = &self.protein_pattern else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut symbols = Vec::new();
        for m in pattern.find_iter(text) {
            if let Some(symbol) = self.normalization.get(&m.as_str().to_lowercase()) {
                if seen.insert(symbol.clone()) {
                    symbols.push(symbol.clone());
                }
            }
        }
        symbols
    }

    /// Theory ids whose trigger terms appear in `text`, registry order.
    pub fn extract_theories(&self, text: &str) -> Vec<String> {
        self.theory_patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Distinct aging keywords appearing in `text`, list order.
    pub fn distinct_keywords(&self, text: &str) -> Vec<String> {
        self.keyword_patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }
}

fn term_pattern(terms: &[String]) -> Result<Regex, VocabularyError> {
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!(r"(?i)\b(?:{alternation})\b"))
}

fn compile(pattern: &str) -> Result<Regex, VocabularyError> {
    Regex::new(pattern).map_err(|e| VocabularyError::PatternCompile {
        reason: e.to_string(),
    })
}
