//! Batch runner: validates every row and builds the error report.

use adperf_model::{
    ErrorReportEntry, LABEL_PLACEHOLDER, RawRow, RowFault, RowRead, Schema,
};
use tracing::{debug, info, info_span, warn};

use crate::format::{Locale, format_fault, format_violation};
use crate::outcome::ValidationOutcome;
use crate::validator::{RowViolations, validate_row};

/// Options for a batch run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub locale: Locale,
    /// Lines preceding the first data row in the source.
    pub header_lines: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            header_lines: 1,
        }
    }
}

impl RunOptions {
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    /// 1-based source line of the row at zero-based `index`.
    pub fn line_number(&self, index: usize) -> usize {
        index + 1 + self.header_lines
    }
}

/// Validate every row in order.
///
/// Never stops early: each row lands in exactly one of the two output
/// collections, in input order.
pub fn validate_rows<I>(schema: &Schema, rows: I, options: &RunOptions) -> ValidationOutcome
where
    I: IntoIterator<Item = RowRead>,
{
    let span = info_span!("batch", schema = schema.name());
    let _guard = span.enter();
    let mut outcome = ValidationOutcome::default();
    for (index, read) in rows.into_iter().enumerate() {
        let line = options.line_number(index);
        match read {
            Ok(row) => match validate_row(schema, &row) {
                Ok(record) => outcome.valid_records.push(record),
                Err(violations) => {
                    debug!(line, error_count = violations.len(), "row rejected");
                    let entry = rejected_entry(schema, &row, line, &violations, options.locale);
                    for violation in violations.iter() {
                        outcome.record_violation(violation.field(), violation.category());
                    }
                    outcome.error_report.push(entry);
                }
            },
            Err(fault) => {
                warn!(line, error = %fault, "row could not be read");
                outcome.fault_count += 1;
                outcome
                    .error_report
                    .push(fault_entry(schema, &fault, line, options.locale));
            }
        }
    }
    let summary = outcome.summary();
    info!(
        rows = summary.total_rows,
        valid = summary.valid_rows,
        invalid = summary.invalid_rows,
        faulted = summary.faulted_rows,
        "batch validated"
    );
    outcome
}

fn rejected_entry(
    schema: &Schema,
    row: &RawRow,
    line: usize,
    violations: &RowViolations,
    locale: Locale,
) -> ErrorReportEntry {
    ErrorReportEntry {
        line,
        row_label: row_label(schema, row),
        first_error: format_violation(violations.first(), locale),
        error_count: violations.len(),
    }
}

fn fault_entry(schema: &Schema, fault: &RowFault, line: usize, locale: Locale) -> ErrorReportEntry {
    ErrorReportEntry {
        line,
        row_label: row_label(schema, &fault.partial),
        first_error: format_fault(&fault.message, locale),
        error_count: 1,
    }
}

/// Best-effort row label; never fails, falls back to `N/A`.
pub fn row_label(schema: &Schema, row: &RawRow) -> String {
    schema
        .label_field()
        .and_then(|field| row.text(field))
        .unwrap_or(LABEL_PLACEHOLDER)
        .to_string()
}
