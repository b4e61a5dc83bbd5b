//! CSV table reader producing one [`RowRead`] per data line.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, warn};

use adperf_model::{CellValue, RawRow, RowFault, RowRead, Schema};

use super::header::build_headers;
use crate::error::{IngestError, Result};

/// Cell texts treated as missing values.
///
/// Mirrors the usual spreadsheet/dataframe null markers so exports from
/// those tools validate the same way.
pub const DEFAULT_NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Name reported for tables read from a stream rather than a file.
const STREAM_ORIGIN: &str = "<stdin>";

/// Options controlling how CSV input is tokenized.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Trimmed cell texts that become [`CellValue::Missing`].
    pub null_tokens: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_tokens: DEFAULT_NULL_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_null_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    fn cell(&self, raw: &str) -> CellValue {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if self.null_tokens.iter().any(|token| token == trimmed) {
            CellValue::Missing
        } else {
            CellValue::from_raw(trimmed)
        }
    }
}

/// Header plus one read outcome per data line, in input order.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RowRead>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows that could not be read.
    pub fn fault_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_err()).count()
    }

    /// Columns present in the header but not declared by the schema.
    pub fn unknown_columns<'a>(&'a self, schema: &Schema) -> Vec<&'a str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|header| !schema.contains(header))
            .collect()
    }

    /// Required schema fields that have no column in the header.
    pub fn missing_columns<'a>(&self, schema: &'a Schema) -> Vec<&'a str> {
        schema
            .required_fields()
            .map(|field| field.name.as_str())
            .filter(|name| !self.headers.iter().any(|header| header == name))
            .collect()
    }
}

/// Read a CSV file whose first row is the header.
///
/// # Errors
///
/// Fails when the file is missing or unreadable, has no header row, or its
/// header is undecodable. Row-level problems are kept in the returned table
/// as [`RowFault`]s.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<CsvTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(file, options, path)
}

/// Read CSV from any byte stream (e.g. stdin).
///
/// # Errors
///
/// Same conditions as [`read_csv_table`], reported against `<stdin>`.
pub fn read_csv_from_reader<R: Read>(reader: R, options: &IngestOptions) -> Result<CsvTable> {
    read_table(reader, options, &PathBuf::from(STREAM_ORIGIN))
}

fn read_table<R: Read>(source: R, options: &IngestOptions, path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(source);
    let mut records = reader.byte_records();

    let header_record = match records.next() {
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
        Some(Err(source)) => {
            return Err(IngestError::InvalidHeader {
                path: path.to_path_buf(),
                source,
            });
        }
        Some(Ok(record)) => record,
    };
    let header_cells = header_record
        .iter()
        .map(std::str::from_utf8)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| IngestError::HeaderEncoding {
            path: path.to_path_buf(),
            source,
        })?;
    let headers = build_headers(header_cells);

    let mut rows = Vec::new();
    for result in records {
        match result {
            Ok(record) => rows.push(build_row(&headers, &record, options)),
            Err(source) if source.is_io_error() => {
                return Err(IngestError::CsvRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(error) => {
                warn!(line = rows.len() + 2, %error, "unreadable csv record");
                rows.push(Err(RowFault::new(error.to_string())));
            }
        }
    }

    let table = CsvTable { headers, rows };
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        faults = table.fault_count(),
        "read csv table"
    );
    Ok(table)
}

/// Map one record onto the header; short records are padded with missing cells.
fn build_row(headers: &[String], record: &ByteRecord, options: &IngestOptions) -> RowRead {
    let mut row = RawRow::new();
    let mut undecodable = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        let cell = match record.get(idx) {
            None => CellValue::Missing,
            Some(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => options.cell(text),
                Err(_) => {
                    undecodable.push(header.as_str());
                    continue;
                }
            },
        };
        row.insert(header.clone(), cell);
    }
    if record.len() > headers.len() {
        let message = format!(
            "expected {} fields, found {}",
            headers.len(),
            record.len()
        );
        return Err(RowFault::new(message).with_partial(row));
    }
    if !undecodable.is_empty() {
        let message = format!("invalid UTF-8 in column(s): {}", undecodable.join(", "));
        return Err(RowFault::new(message).with_partial(row));
    }
    Ok(row)
}
