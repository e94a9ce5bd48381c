//! End-to-end pipeline scenarios against deterministic mock providers.

use std::sync::Arc;

use proteon_core::config::{EngineConfig, RetrievalConfig, SynthesisConfig};
use proteon_core::errors::RetrievalError;
use proteon_core::models::{EmptyResultReason, Query};
use proteon_core::traits::ILlmProvider;
use proteon_engine::QueryOrchestrator;
use test_fixtures::{
    longevity_corpus, passage, FailingIndex, FailingLlm, HangingLlm, HashEmbeddings, InMemoryIndex,
    ScriptedLlm, test_vocabulary,
};

const DIMS: usize = 64;

fn fast_config() -> EngineConfig {
    EngineConfig {
        retrieval: RetrievalConfig {
            retry_base_delay_ms: 1,
            ..Default::default()
        },
        synthesis: SynthesisConfig {
            retry_base_delay_ms: 1,
            timeout_ms: 1_000,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn orchestrator_with_llm(llm: Arc<dyn ILlmProvider>) -> QueryOrchestrator {
    let index = Arc::new(InMemoryIndex::new(DIMS));
    index.seed_all(longevity_corpus());
    QueryOrchestrator::new(
        Arc::new(HashEmbeddings::new(DIMS)),
        index,
        llm,
        Arc::new(test_vocabulary()),
        fast_config(),
    )
    .unwrap()
}

fn orchestrator() -> QueryOrchestrator {
    orchestrator_with_llm(Arc::new(ScriptedLlm::new(
        "TP53 coordinates the DNA damage response and maintains genomic \
         stability [1]. Its decline contributes to cellular senescence.",
    )))
}

#[tokio::test]
async fn general_p53_query_scenario() {
    let response = orchestrator()
        .query_general("What is the function of p53?", 5, true)
        .await
        .unwrap();

    assert!(response.is_general_query);
    assert!(!response.ranked_passages.is_empty());
    assert!(response.ranked_passages.len() <= 5);

    // Answer mentions p53; the extractor normalizes it to TP53.
    assert!(response
        .proteins_mentioned()
        .contains(&"TP53".to_string()));

    // Passage text and answer both talk about DNA damage.
    assert!(response
        .theories_identified()
        .contains(&"genomic_instability".to_string()));

    let relevance = response.relevance.as_ref().expect("general path scores relevance");
    assert!(relevance.has_connection);
    assert!(relevance.score.value() > 0.0);

    assert!(!response.citations.is_empty());
    assert!(response.citations.len() <= response.ranked_passages.len());
    assert!(response.metadata.query_time_ms >= 0.0);
    assert_eq!(
        response.metadata.chunks_retrieved,
        response.ranked_passages.len()
    );
}

#[tokio::test]
async fn citations_only_reference_retrieved_passages() {
    let response = orchestrator()
        .query_general("telomerase and telomere maintenance", 5, true)
        .await
        .unwrap();

    for citation in &response.citations {
        assert!(
            response
                .ranked_passages
                .iter()
                .any(|r| r.passage.pmcid == citation.pmcid),
            "citation {} must come from a retrieved passage",
            citation.id
        );
    }
}

#[tokio::test]
async fn filtered_query_matches_only_tagged_passages() {
    let index = Arc::new(InMemoryIndex::new(DIMS));
    let mut p53 = passage(
        "c-p53",
        "PMC1",
        Some("101"),
        "p53 and DNA repair",
        2023,
        "TP53 orchestrates DNA repair pathways",
    );
    p53.proteins = vec!["TP53".into()];
    let mut sirt = passage(
        "c-sirt",
        "PMC2",
        Some("102"),
        "SIRT6 and DNA repair",
        2023,
        "SIRT6 promotes DNA repair under stress",
    );
    sirt.proteins = vec!["SIRT6".into()];
    index.seed(p53);
    index.seed(sirt);

    let engine = QueryOrchestrator::new(
        Arc::new(HashEmbeddings::new(DIMS)),
        index,
        Arc::new(ScriptedLlm::new("SIRT6 promotes repair [1].")),
        Arc::new(test_vocabulary()),
        fast_config(),
    )
    .unwrap();

    let response = engine
        .query(Query::new("DNA repair").with_protein_filter("SIRT6"))
        .await
        .unwrap();

    assert!(!response.is_general_query);
    // The filtered path does not run the relevance scorer.
    assert!(response.relevance.is_none());
    assert!(!response.ranked_passages.is_empty());
    for ranked in &response.ranked_passages {
        assert_eq!(ranked.passage.id, "c-sirt");
        assert!(ranked.filter_match);
    }
}

#[tokio::test]
async fn narrow_filter_yields_empty_result_marker_not_error() {
    let response = orchestrator()
        .query(Query::new("anything").with_protein_filter("SIRT6"))
        .await
        .unwrap();

    assert!(response.ranked_passages.is_empty());
    assert!(response.citations.is_empty());
    assert_eq!(response.empty_reason, Some(EmptyResultReason::FilterTooNarrow));
    assert_eq!(response.confidence(), 0.0);
    assert!(response.is_empty_result());
}

#[tokio::test]
async fn synthesis_failure_degrades_but_keeps_sources() {
    let engine = orchestrator_with_llm(Arc::new(FailingLlm::default()));
    let response = engine
        .query_general("What does SIRT1 regulate?", 5, true)
        .await
        .unwrap();

    assert!(response.is_degraded());
    assert!(response.answer.is_empty());
    assert!(!response.ranked_passages.is_empty());
    assert!(!response.citations.is_empty());
}

#[tokio::test]
async fn hanging_llm_times_out_into_degraded_response() {
    let config = EngineConfig {
        synthesis: SynthesisConfig {
            retry_attempts: 1,
            retry_base_delay_ms: 1,
            timeout_ms: 20,
            ..Default::default()
        },
        ..fast_config()
    };
    let index = Arc::new(InMemoryIndex::new(DIMS));
    index.seed_all(longevity_corpus());
    let engine = QueryOrchestrator::new(
        Arc::new(HashEmbeddings::new(DIMS)),
        index,
        Arc::new(HangingLlm),
        Arc::new(test_vocabulary()),
        config,
    )
    .unwrap();

    let response = engine
        .query_general("What does FOXO3 do?", 5, true)
        .await
        .unwrap();

    // A slow LLM must not block the retrieved sources.
    assert!(response.is_degraded());
    assert!(!response.ranked_passages.is_empty());
}

#[tokio::test]
async fn retrieval_failure_is_a_request_error() {
    let engine = QueryOrchestrator::new(
        Arc::new(HashEmbeddings::new(DIMS)),
        Arc::new(FailingIndex::default()),
        Arc::new(ScriptedLlm::new("unused")),
        Arc::new(test_vocabulary()),
        fast_config(),
    )
    .unwrap();

    let err = engine
        .query_general("anything", 5, true)
        .await
        .unwrap_err();
    assert!(matches!(err, RetrievalError::IndexUnreachable { .. }));
}

#[tokio::test]
async fn identical_queries_are_idempotent() {
    let engine = orchestrator();
    let first = engine
        .query_general("What is the function of p53?", 5, true)
        .await
        .unwrap();
    let second = engine
        .query_general("What is the function of p53?", 5, true)
        .await
        .unwrap();

    let ids = |r: &proteon_core::models::QueryResponse| {
        r.ranked_passages
            .iter()
            .map(|p| p.passage.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.confidence(), second.confidence());
    assert_eq!(
        first.relevance.unwrap().score.value(),
        second.relevance.unwrap().score.value()
    );
}

#[tokio::test]
async fn top_k_zero_returns_empty_not_error() {
    let response = orchestrator().query_general("p53", 0, false).await.unwrap();
    assert!(response.ranked_passages.is_empty());
    assert!(response.citations.is_empty());
    assert!(!response.is_degraded());
}

#[tokio::test]
async fn top_k_above_maximum_is_clamped() {
    let response = orchestrator()
        .query_general("p53 aging", 500, false)
        .await
        .unwrap();
    assert!(response.ranked_passages.len() <= 50);
    assert_eq!(response.query.top_k, 500);
}

#[tokio::test]
async fn synthesis_disabled_still_builds_citations() {
    let response = orchestrator()
        .query_general("SIRT1 and caloric restriction", 5, false)
        .await
        .unwrap();
    assert!(response.answer.is_empty());
    assert!(!response.is_degraded());
    assert!(!response.citations.is_empty());
}

#[tokio::test]
async fn queries_are_recorded_in_the_log() {
    let engine = orchestrator();
    engine
        .query_general("What is the function of p53?", 5, false)
        .await
        .unwrap();
    let entries = engine.recent_queries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].query, "What is the function of p53?");
    assert!(!entries[0].degraded);
}
