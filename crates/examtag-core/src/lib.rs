//! examtag core: subjects, configuration, error types.

pub mod config;
pub mod error;
pub mod subject;

pub use config::{DataPaths, ExamtagConfig};
pub use error::{Error, Result};
pub use subject::{Subject, GENERIC_FALLBACK_LABEL};
