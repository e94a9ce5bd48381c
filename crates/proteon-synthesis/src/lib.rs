//! # proteon-synthesis
//!
//! Turns a query and its re-ranked context passages into a grounded
//! prose answer via the LLM provider. The prompt instructs the model to
//! stay within the supplied excerpts and cite with `[n]` notation;
//! citation identifiers are never read back out of the answer text.

pub mod prompt;
pub mod synthesizer;

pub use synthesizer::AnswerSynthesizer;
