//! CSV reading into raw rows.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{
    CsvTable, DEFAULT_NULL_TOKENS, IngestOptions, read_csv_from_reader, read_csv_table,
};
