//! Prompt construction for grounded answer synthesis.
//!
//! Context passages are numbered `[n]` with their PMCID so the model can
//! cite them; the citation list mirrors what the response will carry.

use proteon_core::config::SynthesisConfig;
use proteon_core::constants::CITATION_TITLE_MAX_CHARS;
use proteon_core::models::{Citation, RankedPassage};
use proteon_core::traits::LlmRequest;

const SYSTEM_PROMPT: &str = "You are an expert in aging biology and gerontology. \
Answer questions based on the provided scientific literature excerpts. \
Always cite sources using [number] notation. \
Be precise and scientific in your language. \
If the context doesn't contain enough information, say so.";

/// Build the completion request for a query and its context slice.
pub fn build(
    query_text: &str,
    context: &[RankedPassage],
    citations: &[Citation],
    config: &SynthesisConfig,
) -> LlmRequest {
    let mut excerpts = String::new();
    for (i, ranked) in context.iter().enumerate() {
        let pmcid = if ranked.passage.pmcid.is_empty() {
            "Unknown"
        } else {
            &ranked.passage.pmcid
        };
        excerpts.push_str(&format!(
            "[{}] (PMCID: {})\n{}\n\n",
            i + 1,
            pmcid,
            ranked.passage.text
        ));
    }

    let mut citation_refs = String::new();
    for (i, citation) in citations.iter().enumerate() {
        citation_refs.push_str(&format!(
            "[{}] {} ({}) - {}\n",
            i + 1,
            truncate_title(&citation.title),
            citation.year,
            citation.id
        ));
    }

    let user = format!(
        "Question: {query_text}\n\n\
         Context from scientific literature:\n{excerpts}\
         Available citations:\n{citation_refs}\n\
         Provide a comprehensive answer based on the context above. \
         Cite sources using [number] notation (e.g., [1], [2]). \
         Focus on aging-related mechanisms and proteins when relevant."
    );

    LlmRequest {
        system: SYSTEM_PROMPT.to_string(),
        user,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > CITATION_TITLE_MAX_CHARS {
        let short: String = title.chars().take(CITATION_TITLE_MAX_CHARS).collect();
        format!("{short}...")
    } else {
        title.to_string()
    }
}
