//! Runtime: batch concept extraction and interactive question entry.
//!
//! Ties the pure extractor to the CSV store and the optional LLM provider.

pub mod interactive;
pub mod pipeline;
pub mod types;

pub use interactive::{parse_entry, InteractiveOutcome, InteractiveSession};
pub use pipeline::ConceptPipeline;
pub use types::*;
