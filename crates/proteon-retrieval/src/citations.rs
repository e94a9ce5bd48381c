//! Citation building from the passages supplied to synthesis.
//!
//! Only passages actually presented as LLM context can be cited — answer
//! text is never trusted as a source of citation identifiers.

use std::collections::HashSet;

use tracing::warn;

use proteon_core::models::{Citation, RankedPassage};

/// Build the citation list for a synthesis context slice.
///
/// Deduplicates by identifier (PMID preferred, else PMCID) preserving
/// first-appearance order. Passages with no identifier are skipped with a
/// logged warning; they stay visible in `ranked_passages`.
pub fn build(context: &[RankedPassage]) -> Vec<Citation> {
    let mut seen = HashSet::new();
    let mut citations = Vec::new();

    for ranked in context {
        match Citation::from_passage(&ranked.passage) {
            Some(citation) => {
                if seen.insert(citation.id.clone()) {
                    citations.push(citation);
                }
            }
            None => warn!(
                passage = %ranked.passage.id,
                title = %ranked.passage.title,
                "passage has no PMID or PMCID, excluded from citations"
            ),
        }
    }

    citations
}
