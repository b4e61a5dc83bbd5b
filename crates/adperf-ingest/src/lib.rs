//! Tabular input loading for ad performance validation.

pub mod csv;
pub mod error;
pub mod schema_file;

pub use crate::csv::{
    CsvTable, DEFAULT_NULL_TOKENS, IngestOptions, normalize_header, read_csv_from_reader,
    read_csv_table,
};
pub use error::{IngestError, Result};
pub use schema_file::load_schema;
