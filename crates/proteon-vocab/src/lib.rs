//! # proteon-vocab
//!
//! Load-once/read-only vocabulary tables (protein symbols, aging theories,
//! aging keywords) and the entity extractor built from them. Loaded at
//! process startup, shared behind an `Arc`, never mutated afterwards.
//! Tests substitute smaller vocabularies — the tables are injected
//! configuration, not global state.

pub mod extractor;
pub mod keywords;
pub mod protein_registry;
pub mod theory_registry;

pub use extractor::{EntityExtractor, EntityHits};
pub use protein_registry::{ProteinEntry, ProteinRegistry};
pub use theory_registry::{TheoryEntry, TheoryRegistry};

/// The full vocabulary bundle the engine is configured with.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub proteins: ProteinRegistry,
    pub theories: TheoryRegistry,
    /// Aging-domain keywords used by the relevance scorer.
    pub keywords: Vec<String>,
}

impl Vocabulary {
    pub fn new(proteins: ProteinRegistry, theories: TheoryRegistry, keywords: Vec<String>) -> Self {
        Self {
            proteins,
            theories,
            keywords,
        }
    }

    /// The embedded default vocabulary shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            proteins: ProteinRegistry::builtin(),
            theories: TheoryRegistry::builtin(),
            keywords: keywords::AGING_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
