use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{PassageRecord, SearchFilters};

/// Read-only nearest-neighbour search over the indexed passage corpus.
///
/// The index is loaded once at process start and never mutated by the
/// query path.
#[async_trait]
pub trait IVectorIndex: Send + Sync {
    /// Return the `k` nearest passages to `vector`, restricted to records
    /// satisfying `filters`. Results are ordered by descending similarity.
    async fn search(
        &self,
        vector: &[f32],
        k: usize,
        filters: &SearchFilters,
    ) -> Result<Vec<PassageRecord>, ProviderError>;

    /// Human-readable index name.
    fn name(&self) -> &str;
}
