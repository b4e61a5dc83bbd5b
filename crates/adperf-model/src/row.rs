//! Raw, untyped input rows as read from a tabular source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single untyped cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Trim the raw text; blank input becomes [`CellValue::Missing`].
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    /// Text content, or `None` for missing and blank cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) if !value.trim().is_empty() => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.as_text().is_none()
    }
}

/// One input record keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) {
        self.cells.insert(name.into(), value);
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: &str) -> Self {
        self.insert(name, CellValue::from_raw(value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.cells.get(name)
    }

    /// Non-blank text of a cell; absent columns and missing cells yield `None`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.cells.get(name).and_then(CellValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// A row that could not be read at all.
///
/// Carries whatever cells could be recovered so the row can still be
/// labelled in the error report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RowFault {
    pub message: String,
    pub partial: RawRow,
}

impl RowFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            partial: RawRow::default(),
        }
    }

    #[must_use]
    pub fn with_partial(mut self, partial: RawRow) -> Self {
        self.partial = partial;
        self
    }
}

/// Outcome of reading one input row.
pub type RowRead = Result<RawRow, RowFault>;
