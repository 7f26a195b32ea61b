//! examtag extract: keyword catalog, concept extraction, subject detection,
//! and concept distribution analysis.
//!
//! Everything here is pure and synchronous. The catalog is built once and
//! shared read-only.

pub mod analyze;
pub mod catalog;
pub mod concepts;
pub mod detect;

pub use analyze::{analyze, ConceptFrequency, DistributionReport};
pub use catalog::{lookup, KeywordCatalog, KeywordEntry};
pub use concepts::{extract, extract_detailed, extract_for_name, ConceptExtraction};
pub use detect::detect;
