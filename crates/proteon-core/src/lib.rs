//! # proteon-core
//!
//! Foundation crate for the Proteon protein-literature query engine.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod retry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{ProviderError, RetrievalError, SynthesisError, VocabularyError};
pub use models::{
    AgingRelevance, Citation, CitationId, EmptyResultReason, PassageRecord, Query, QueryResponse,
    RankedPassage, Relevance, RelevanceBand, ResponseMetadata, SearchFilters, Similarity,
};
