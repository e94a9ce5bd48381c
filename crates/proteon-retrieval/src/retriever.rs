//! Retrieval adapter: query embedding (cached) plus filtered vector
//! search, each behind a bounded retry/backoff policy.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, info};

use proteon_core::config::RetrievalConfig;
use proteon_core::errors::RetrievalError;
use proteon_core::models::{PassageRecord, Query, SearchFilters};
use proteon_core::retry::RetryPolicy;
use proteon_core::traits::{IEmbeddingProvider, IVectorIndex};

/// Front door to the external retrieval collaborators.
///
/// Clamps result counts, overfetches when filters are active, retries
/// transient failures, and caches query embeddings. Stateless per query
/// apart from the concurrent embedding cache.
pub struct Retriever {
    embeddings: Arc<dyn IEmbeddingProvider>,
    index: Arc<dyn IVectorIndex>,
    config: RetrievalConfig,
    /// Query text (blake3) → embedding vector.
    query_cache: Cache<String, Vec<f32>>,
}

impl Retriever {
    pub fn new(
        embeddings: Arc<dyn IEmbeddingProvider>,
        index: Arc<dyn IVectorIndex>,
        config: RetrievalConfig,
    ) -> Self {
        let query_cache = Cache::new(config.embedding_cache_entries);
        Self {
            embeddings,
            index,
            config,
            query_cache,
        }
    }

    /// The requested result count after clamping.
    pub fn effective_top_k(&self, requested: usize) -> usize {
        requested.min(self.config.max_top_k)
    }

    /// Retrieve candidate passages for a query. Returns up to
    /// `effective_top_k * overfetch` candidates when filters are active so
    /// the re-ranker can still fill the requested count.
    pub async fn retrieve(&self, query: &Query) -> Result<Vec<PassageRecord>, RetrievalError> {
        let top_k = self.effective_top_k(query.top_k);
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let vector = self.embed_query(&query.text).await?;
        let filters = SearchFilters::from_query(query);

        let search_k = if filters.is_empty() {
            top_k
        } else {
            (top_k * self.config.overfetch_factor).min(self.config.max_search_k)
        };

        let passages = self.search(&vector, search_k, &filters).await?;
        info!(
            candidates = passages.len(),
            search_k,
            filtered = !filters.is_empty(),
            index = self.index.name(),
            "vector search complete"
        );
        Ok(passages)
    }

    /// Embed the query text, consulting the cache first.
    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let key = blake3::hash(text.as_bytes()).to_hex().to_string();
        if let Some(vector) = self.query_cache.get(&key) {
            debug!(hash = %key, "query embedding cache hit");
            return Ok(vector);
        }

        let policy = RetryPolicy::new(
            self.config.retry_attempts,
            self.config.retry_base_delay_ms,
            self.config.embed_timeout_ms,
        );
        let vector = policy
            .run("embed", || self.embeddings.embed(text))
            .await
            .map_err(|(attempts, source)| RetrievalError::EmbeddingFailed { attempts, source })?;

        self.query_cache.insert(key, vector.clone());
        Ok(vector)
    }

    async fn search(
        &self,
        vector: &[f32],
        k: usize,
        filters: &SearchFilters,
    ) -> Result<Vec<PassageRecord>, RetrievalError> {
        let policy = RetryPolicy::new(
            self.config.retry_attempts,
            self.config.retry_base_delay_ms,
            self.config.search_timeout_ms,
        );
        policy
            .run("search", || self.index.search(vector, k, filters))
            .await
            .map_err(|(attempts, source)| RetrievalError::IndexUnreachable { attempts, source })
    }
}
