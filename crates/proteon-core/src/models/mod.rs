//! Data model for the query pipeline. All types are read-only once
//! constructed and serialize to the UI via serde / ts-rs bindings.

mod citation;
mod passage;
mod query;
mod relevance;
mod response;
mod similarity;

pub use citation::{Citation, CitationId};
pub use passage::{PassageRecord, RankedPassage, SearchFilters};
pub use query::Query;
pub use relevance::{AgingRelevance, Relevance, RelevanceBand};
pub use response::{EmptyResultReason, QueryResponse, ResponseMetadata};
pub use similarity::Similarity;
