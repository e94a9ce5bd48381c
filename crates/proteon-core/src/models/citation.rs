use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::models::passage::PassageRecord;

/// Stable identifier for a cited paper. PMID is preferred when the paper
/// has one; PMCID otherwise. Citations are deduplicated by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CitationId {
    Pmid(String),
    Pmcid(String),
}

impl CitationId {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pmid(id) | Self::Pmcid(id) => id,
        }
    }
}

impl fmt::Display for CitationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pmid(id) => write!(f, "PMID:{id}"),
            Self::Pmcid(id) => write!(f, "PMCID:{id}"),
        }
    }
}

/// A reference to a paper actually supplied to answer synthesis.
///
/// Normalized at ingestion into one canonical shape — downstream code
/// never branches on where the identifier came from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Citation {
    pub id: CitationId,
    pub pmcid: String,
    pub pmid: Option<String>,
    pub title: String,
    pub year: i32,
    /// Similarity of the best-ranked passage from this paper.
    pub similarity: f64,
}

impl Citation {
    /// Build a citation from a passage, or `None` when the passage carries
    /// no citable identifier at all.
    pub fn from_passage(passage: &PassageRecord) -> Option<Self> {
        let id = match (&passage.pmid, passage.pmcid.is_empty()) {
            (Some(pmid), _) if !pmid.is_empty() => CitationId::Pmid(pmid.clone()),
            (_, false) => CitationId::Pmcid(passage.pmcid.clone()),
            _ => return None,
        };
        Some(Self {
            id,
            pmcid: passage.pmcid.clone(),
            pmid: passage.pmid.clone(),
            title: passage.title.clone(),
            year: passage.year,
            similarity: passage.similarity.value(),
        })
    }
}
