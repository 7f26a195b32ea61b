//! examtag store: CSV question files in, concept files out.

pub mod csv_store;
pub mod types;

pub use csv_store::CsvStore;
pub use types::*;
