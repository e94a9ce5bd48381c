//! Query performance log: latency, result count, confidence, degradation.
//! Ring-buffer semantics; consumed by the stats dashboard.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single query log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query: String,
    pub latency: Duration,
    pub result_count: usize,
    pub confidence: f64,
    pub degraded: bool,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Create a new entry with the timestamp set to now.
    pub fn new(
        query: impl Into<String>,
        latency: Duration,
        result_count: usize,
        confidence: f64,
        degraded: bool,
    ) -> Self {
        Self {
            query: query.into(),
            latency,
            result_count,
            confidence,
            degraded,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only query log with bounded retention.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: Vec<QueryLogEntry>,
    max_entries: usize,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::with_capacity(10_000)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record a query, evicting the oldest entries past capacity.
    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            query = %entry.query,
            latency_ms = entry.latency.as_millis() as u64,
            result_count = entry.result_count,
            degraded = entry.degraded,
            "query logged"
        );
        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    pub fn entries(&self) -> &[QueryLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Average latency across all retained entries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::new()
    }
}
