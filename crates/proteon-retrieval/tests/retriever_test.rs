use std::sync::atomic::Ordering;
use std::sync::Arc;

use proteon_core::config::RetrievalConfig;
use proteon_core::errors::RetrievalError;
use proteon_core::models::Query;
use proteon_retrieval::Retriever;
use test_fixtures::{
    longevity_corpus, passage, FailingEmbeddings, FailingIndex, HashEmbeddings, InMemoryIndex,
};

const DIMS: usize = 64;

fn fast_config() -> RetrievalConfig {
    RetrievalConfig {
        retry_base_delay_ms: 1,
        ..Default::default()
    }
}

#[tokio::test]
async fn top_k_zero_returns_empty_without_touching_providers() {
    let embeddings = Arc::new(FailingEmbeddings::default());
    let retriever = Retriever::new(
        embeddings.clone(),
        Arc::new(FailingIndex::default()),
        fast_config(),
    );

    let query = Query::new("anything").with_top_k(0);
    let passages = retriever.retrieve(&query).await.unwrap();
    assert!(passages.is_empty());
    assert_eq!(embeddings.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn top_k_above_the_maximum_is_clamped() {
    let config = fast_config();
    let retriever = Retriever::new(
        Arc::new(HashEmbeddings::new(DIMS)),
        Arc::new(InMemoryIndex::new(DIMS)),
        config.clone(),
    );
    assert_eq!(retriever.effective_top_k(500), config.max_top_k);
    assert_eq!(retriever.effective_top_k(5), 5);
}

#[tokio::test]
async fn index_failure_surfaces_after_retry_budget() {
    let index = Arc::new(FailingIndex::default());
    let config = fast_config();
    let retriever = Retriever::new(
        Arc::new(HashEmbeddings::new(DIMS)),
        index.clone(),
        config.clone(),
    );

    let err = retriever
        .retrieve(&Query::new("what is SIRT6?"))
        .await
        .unwrap_err();
    assert!(matches!(err, RetrievalError::IndexUnreachable { .. }));
    assert_eq!(index.calls.load(Ordering::SeqCst), config.retry_attempts);
}

#[tokio::test]
async fn embedding_failure_surfaces_after_retry_budget() {
    let embeddings = Arc::new(FailingEmbeddings::default());
    let config = fast_config();
    let retriever = Retriever::new(
        embeddings.clone(),
        Arc::new(InMemoryIndex::new(DIMS)),
        config.clone(),
    );

    let err = retriever.retrieve(&Query::new("q")).await.unwrap_err();
    assert!(matches!(err, RetrievalError::EmbeddingFailed { .. }));
    assert_eq!(
        embeddings.calls.load(Ordering::SeqCst),
        config.retry_attempts
    );
}

#[tokio::test]
async fn query_embeddings_are_cached() {
    let embeddings = Arc::new(HashEmbeddings::new(DIMS));
    let index = Arc::new(InMemoryIndex::new(DIMS));
    index.seed_all(longevity_corpus());
    let retriever = Retriever::new(embeddings.clone(), index, fast_config());

    let query = Query::new("what does TP53 do?");
    retriever.retrieve(&query).await.unwrap();
    retriever.retrieve(&query).await.unwrap();
    assert_eq!(embeddings.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn protein_filter_excludes_non_matching_passages() {
    let index = Arc::new(InMemoryIndex::new(DIMS));
    let mut tagged = passage("c-sirt6", "PMC1", None, "SIRT6 study", 2022, "SIRT6 and DNA repair");
    tagged.proteins = vec!["SIRT6".into()];
    let mut other = passage("c-apoe", "PMC2", None, "APOE study", 2022, "APOE and lipids");
    other.proteins = vec!["APOE".into()];
    index.seed(tagged);
    index.seed(other);

    let retriever = Retriever::new(Arc::new(HashEmbeddings::new(DIMS)), index, fast_config());
    let query = Query::new("DNA repair").with_protein_filter("SIRT6");
    let passages = retriever.retrieve(&query).await.unwrap();

    assert!(!passages.is_empty());
    assert!(passages.iter().all(|p| p.id == "c-sirt6"));
}

#[tokio::test]
async fn narrow_filters_yield_empty_not_error() {
    let index = Arc::new(InMemoryIndex::new(DIMS));
    index.seed_all(longevity_corpus());
    let retriever = Retriever::new(Arc::new(HashEmbeddings::new(DIMS)), index, fast_config());

    let query = Query::new("anything at all").with_protein_filter("SIRT6");
    let passages = retriever.retrieve(&query).await.unwrap();
    assert!(passages.is_empty());
}
