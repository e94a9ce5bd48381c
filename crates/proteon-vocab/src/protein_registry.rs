//! Registry of known longevity-associated protein symbols.
//!
//! Mirrors the GenAge gene set: canonical gene symbols plus common alias
//! spellings. Lookups are case-insensitive; the registry is built once
//! and read-only afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use proteon_core::errors::VocabularyError;

/// One protein in the vocabulary: canonical symbol, display name, and
/// alias spellings that normalize to the symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinEntry {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// In-memory registry for fast protein-symbol lookups.
#[derive(Debug, Clone)]
pub struct ProteinRegistry {
    entries: Vec<ProteinEntry>,
    /// Lowercased symbol/alias → index into `entries`.
    by_term: HashMap<String, usize>,
}

impl ProteinRegistry {
    pub fn new(entries: Vec<ProteinEntry>) -> Self {
        let mut by_term = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            by_term.insert(entry.symbol.to_lowercase(), i);
            for alias in &entry.aliases {
                by_term.insert(alias.to_lowercase(), i);
            }
        }
        Self { entries, by_term }
    }

    /// Load entries from a JSON array (versioned vocabulary data).
    pub fn from_json_str(json: &str) -> Result<Self, VocabularyError> {
        let entries: Vec<ProteinEntry> = serde_json::from_str(json)?;
        let registry = Self::new(entries);
        info!(proteins = registry.len(), "protein registry loaded");
        Ok(registry)
    }

    /// Look up an entry by symbol or alias (case-insensitive).
    pub fn get(&self, term: &str) -> Option<&ProteinEntry> {
        self.by_term
            .get(&term.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Canonical symbol for a mention, if the mention is in the vocabulary.
    pub fn canonical(&self, mention: &str) -> Option<&str> {
        self.get(mention).map(|e| e.symbol.as_str())
    }

    /// All terms the matcher must recognize: symbols and aliases.
    pub fn match_terms(&self) -> Vec<&str> {
        let mut terms = Vec::new();
        for entry in &self.entries {
            terms.push(entry.symbol.as_str());
            for alias in &entry.aliases {
                terms.push(alias.as_str());
            }
        }
        terms
    }

    pub fn entries(&self) -> &[ProteinEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The embedded GenAge-style default set.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_PROTEINS
                .iter()
                .map(|(symbol, name, aliases)| ProteinEntry {
                    symbol: symbol.to_string(),
                    name: name.to_string(),
                    aliases: aliases.iter().map(|a| a.to_string()).collect(),
                })
                .collect(),
        )
    }
}

/// (symbol, name, aliases) — curated subset of GenAge human genes.
const BUILTIN_PROTEINS: &[(&str, &str, &[&str])] = &[
    ("AKT1", "RAC-alpha serine/threonine-protein kinase", &[]),
    ("APOE", "Apolipoprotein E", &[]),
    ("ATM", "ATM serine/threonine kinase", &[]),
    ("BCL2", "Apoptosis regulator Bcl-2", &[]),
    ("BRCA1", "Breast cancer type 1 susceptibility protein", &[]),
    ("CDKN1A", "Cyclin-dependent kinase inhibitor 1A", &["p21"]),
    ("CDKN2A", "Cyclin-dependent kinase inhibitor 2A", &["p16", "p16INK4a"]),
    ("CETP", "Cholesteryl ester transfer protein", &[]),
    ("EGFR", "Epidermal growth factor receptor", &[]),
    ("FOXO1", "Forkhead box protein O1", &[]),
    ("FOXO3", "Forkhead box protein O3", &["FOXO3A"]),
    ("GHR", "Growth hormone receptor", &[]),
    ("HSPA1A", "Heat shock 70 kDa protein 1A", &["HSP70"]),
    ("IGF1", "Insulin-like growth factor 1", &["IGF-1"]),
    ("IGF1R", "Insulin-like growth factor 1 receptor", &["IGF-1R"]),
    ("IL6", "Interleukin-6", &["IL-6"]),
    ("INS", "Insulin", &[]),
    ("INSR", "Insulin receptor", &[]),
    ("KL", "Klotho", &["Klotho"]),
    ("LMNA", "Prelamin-A/C", &[]),
    ("MTOR", "Serine/threonine-protein kinase mTOR", &["FRAP1"]),
    ("NFE2L2", "Nuclear factor erythroid 2-related factor 2", &["NRF2"]),
    ("NFKB1", "Nuclear factor NF-kappa-B p105 subunit", &[]),
    ("PARP1", "Poly [ADP-ribose] polymerase 1", &[]),
    ("POT1", "Protection of telomeres protein 1", &[]),
    ("PRKAA1", "5'-AMP-activated protein kinase catalytic subunit alpha-1", &[]),
    ("PTEN", "Phosphatase and tensin homolog", &[]),
    ("RB1", "Retinoblastoma-associated protein", &[]),
    ("SIRT1", "NAD-dependent protein deacetylase sirtuin-1", &[]),
    ("SIRT3", "NAD-dependent protein deacetylase sirtuin-3", &[]),
    ("SIRT6", "NAD-dependent protein deacetylase sirtuin-6", &[]),
    ("SOD1", "Superoxide dismutase [Cu-Zn]", &[]),
    ("SOD2", "Superoxide dismutase [Mn], mitochondrial", &[]),
    ("STAT3", "Signal transducer and activator of transcription 3", &[]),
    ("TERC", "Telomerase RNA component", &[]),
    ("TERT", "Telomerase reverse transcriptase", &[]),
    ("TP53", "Cellular tumor antigen p53", &["P53"]),
    ("TXN", "Thioredoxin", &[]),
    ("WRN", "Werner syndrome ATP-dependent helicase", &[]),
    ("XRCC5", "X-ray repair cross-complementing protein 5", &["Ku80"]),
    ("XRCC6", "X-ray repair cross-complementing protein 6", &["Ku70"]),
];
