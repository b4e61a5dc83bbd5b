use serde::{Deserialize, Serialize};

/// Row label used when the label field cannot be read.
pub const LABEL_PLACEHOLDER: &str = "N/A";

/// Summary of one failing row for human review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReportEntry {
    /// 1-based source line, header included.
    pub line: usize,
    /// Best-effort identifying label for the row.
    pub row_label: String,
    /// Formatted text of the first violation in field declaration order.
    pub first_error: String,
    /// Total number of violations found on the row.
    pub error_count: usize,
}

impl ErrorReportEntry {
    /// Column names of the tabular report, in output order.
    pub const COLUMNS: [&'static str; 4] = ["line", "row_label", "first_error", "error_count"];
}
