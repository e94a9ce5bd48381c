//! # proteon-engine
//!
//! The query orchestrator: sequences embedding, retrieval, re-ranking,
//! synthesis, relevance scoring, and citation building into one
//! `QueryResponse`, with per-stage timeouts and a degraded path when
//! synthesis fails. Queries are independent stateless units; the only
//! shared state is the read-only vocabulary and index loaded at startup.

pub mod orchestrator;
pub mod query_log;

pub use orchestrator::QueryOrchestrator;
pub use query_log::{QueryLog, QueryLogEntry};
