//! Narrow interfaces to external collaborators. The engine owns all
//! decision logic; these traits only move text and vectors.

mod embedding;
mod llm;
mod vector_index;

pub use embedding::IEmbeddingProvider;
pub use llm::{ILlmProvider, LlmRequest};
pub use vector_index::IVectorIndex;
