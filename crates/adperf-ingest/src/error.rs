//! Error types for ad performance data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort reading a whole input table.
///
/// Problems confined to a single row never surface here; they are carried as
/// [`adperf_model::RowFault`]s inside the table instead.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Input contains no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row could not be parsed.
    #[error("unreadable header row in {path}")]
    InvalidHeader {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header row is not valid UTF-8.
    #[error("header row of {path} is not valid UTF-8")]
    HeaderEncoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The reader stopped mid-table.
    #[error("failed to read CSV {path}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Schema File Errors ===
    /// Schema file is not a valid schema definition.
    #[error("invalid schema file {path}")]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
