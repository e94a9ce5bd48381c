//! # proteon-retrieval
//!
//! The retrieval half of the query pipeline: embedding + vector search
//! behind a retry/backoff adapter, combined-score re-ranking, aging
//! relevance scoring, citation building, and confidence estimation.

pub mod citations;
pub mod confidence;
pub mod relevance;
pub mod reranker;
pub mod retriever;

pub use relevance::AgingRelevanceScorer;
pub use reranker::Reranker;
pub use retriever::Retriever;
