//! Batch results: valid records, error report and counts.

use std::collections::BTreeMap;

use adperf_model::{ErrorReportEntry, ValidatedRecord, ViolationCategory};
use serde::Serialize;

/// Everything a batch run produces.
///
/// `valid_records.len() + error_report.len()` always equals the number of
/// input rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    pub valid_records: Vec<ValidatedRecord>,
    pub error_report: Vec<ErrorReportEntry>,
    /// Rows that could not be read; each also has an error report entry.
    pub fault_count: usize,
    tally: BTreeMap<(String, ViolationCategory), usize>,
}

/// Headline counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub faulted_rows: usize,
}

/// Violations of one category on one field, across all rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub field: String,
    pub category: ViolationCategory,
    pub count: usize,
}

impl ValidationOutcome {
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            total_rows: self.valid_records.len() + self.error_report.len(),
            valid_rows: self.valid_records.len(),
            invalid_rows: self.error_report.len(),
            faulted_rows: self.fault_count,
        }
    }

    /// True when every row passed.
    pub fn is_clean(&self) -> bool {
        self.error_report.is_empty()
    }

    pub(crate) fn record_violation(&mut self, field: &str, category: ViolationCategory) {
        *self
            .tally
            .entry((field.to_string(), category))
            .or_default() += 1;
    }

    /// Per-field violation counts, most frequent first, then by field name.
    pub fn tally(&self) -> Vec<TallyEntry> {
        let mut entries: Vec<TallyEntry> = self
            .tally
            .iter()
            .map(|((field, category), count)| TallyEntry {
                field: field.clone(),
                category: *category,
                count: *count,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.field.cmp(&b.field))
                .then_with(|| a.category.cmp(&b.category))
        });
        entries
    }
}
