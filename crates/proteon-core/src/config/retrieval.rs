use serde::{Deserialize, Serialize};

/// Retrieval-stage configuration: result bounds, retry budget, timeouts,
/// and the query-embedding cache size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Requested result counts above this are silently clamped.
    pub max_top_k: usize,
    pub default_top_k: usize,
    /// Candidate multiplier applied when filters are active — ANN indexes
    /// apply metadata filters after the scan, so more candidates are
    /// needed to fill the requested count.
    pub overfetch_factor: usize,
    /// Hard ceiling on the candidate count requested from the index.
    pub max_search_k: usize,
    pub retry_attempts: u32,
    /// First backoff delay; doubles per attempt.
    pub retry_base_delay_ms: u64,
    pub embed_timeout_ms: u64,
    pub search_timeout_ms: u64,
    pub embedding_cache_entries: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_top_k: crate::constants::MAX_TOP_K,
            default_top_k: crate::constants::DEFAULT_TOP_K,
            overfetch_factor: 5,
            max_search_k: 250,
            retry_attempts: 3,
            retry_base_delay_ms: 200,
            embed_timeout_ms: 10_000,
            search_timeout_ms: 10_000,
            embedding_cache_entries: 1_024,
        }
    }
}
