//! Registry of aging-mechanism theories and their trigger terms.
//!
//! The default set covers the hallmark categories used to tag passages.
//! Content is versioned data: a JSON loader allows swapping the set
//! without code changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use proteon_core::errors::VocabularyError;

/// One aging theory: stable id, display label, the terms whose presence
/// tags a text with this theory, and an optional curated connection
/// phrase for relevance verdicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoryEntry {
    pub id: String,
    pub label: String,
    pub triggers: Vec<String>,
    #[serde(default)]
    pub connection: Option<String>,
}

impl TheoryEntry {
    /// Connection phrase for relevance verdicts; curated when available,
    /// templated from the label otherwise.
    pub fn connection_phrase(&self) -> String {
        match &self.connection {
            Some(phrase) => phrase.clone(),
            None => format!("Involved in {}", self.label.to_lowercase()),
        }
    }
}

/// In-memory registry for fast theory lookups by id.
#[derive(Debug, Clone)]
pub struct TheoryRegistry {
    entries: Vec<TheoryEntry>,
    by_id: HashMap<String, usize>,
}

impl TheoryRegistry {
    pub fn new(entries: Vec<TheoryEntry>) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { entries, by_id }
    }

    /// Load entries from a JSON array (versioned vocabulary data).
    pub fn from_json_str(json: &str) -> Result<Self, VocabularyError> {
        let entries: Vec<TheoryEntry> = serde_json::from_str(json)?;
        let registry = Self::new(entries);
        info!(theories = registry.len(), "theory registry loaded");
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&TheoryEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[TheoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The embedded default theory set.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_THEORIES
                .iter()
                .map(|(id, label, triggers, connection)| TheoryEntry {
                    id: id.to_string(),
                    label: label.to_string(),
                    triggers: triggers.iter().map(|t| t.to_string()).collect(),
                    connection: connection.map(String::from),
                })
                .collect(),
        )
    }
}

/// (id, label, triggers, curated connection phrase).
#[allow(clippy::type_complexity)]
const BUILTIN_THEORIES: &[(&str, &str, &[&str], Option<&str>)] = &[
    (
        "genomic_instability",
        "Genomic instability",
        &["DNA damage", "mutation", "genomic", "chromosome", "repair"],
        Some("Plays a role in DNA damage response and genomic stability"),
    ),
    (
        "telomere_attrition",
        "Telomere attrition",
        &["telomere", "telomerase", "chromosome end", "replicative"],
        Some("Associated with telomere maintenance"),
    ),
    (
        "epigenetic_alterations",
        "Epigenetic alterations",
        &["epigenetic", "methylation", "histone", "chromatin"],
        None,
    ),
    (
        "loss_of_proteostasis",
        "Loss of proteostasis",
        &["proteostasis", "protein folding", "chaperone", "ubiquitin", "proteasome"],
        None,
    ),
    (
        "mitochondrial_dysfunction",
        "Mitochondrial dysfunction",
        &["mitochondrial", "mitochondria", "oxidative", "ROS", "electron transport"],
        Some("Involved in mitochondrial function and energy metabolism"),
    ),
    (
        "cellular_senescence",
        "Cellular senescence",
        &["senescence", "senescent", "SASP", "p16", "p21"],
        Some("Linked to cellular senescence pathways"),
    ),
    (
        "stem_cell_exhaustion",
        "Stem cell exhaustion",
        &["stem cell", "progenitor", "regeneration", "tissue renewal"],
        None,
    ),
    (
        "altered_intercellular_communication",
        "Altered intercellular communication",
        &["inflammation", "cytokine", "immune", "inflammaging"],
        Some("Modulates inflammatory responses"),
    ),
    (
        "disabled_macroautophagy",
        "Disabled macroautophagy",
        &["autophagy", "lysosome", "degradation", "recycling"],
        Some("Regulates autophagy and cellular recycling"),
    ),
    (
        "chronic_inflammation",
        "Chronic inflammation",
        &["inflammation", "inflammatory", "inflammaging", "cytokine"],
        Some("Modulates inflammatory responses"),
    ),
    (
        "dysbiosis",
        "Dysbiosis",
        &["microbiome", "gut bacteria", "dysbiosis", "microbiota"],
        None,
    ),
];
