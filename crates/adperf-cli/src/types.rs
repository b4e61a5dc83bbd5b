use std::path::PathBuf;
use std::time::Duration;

use adperf_model::RowRead;
use adperf_validate::ValidationOutcome;

#[derive(Debug)]
pub struct ValidateResult {
    pub input: String,
    pub schema_name: String,
    pub headers: Vec<String>,
    pub preview: Vec<RowRead>,
    pub unknown_columns: Vec<String>,
    pub missing_columns: Vec<String>,
    pub outcome: ValidationOutcome,
    pub elapsed: Duration,
    pub outputs: OutputPaths,
    pub show_errors: usize,
}

impl ValidateResult {
    pub fn has_errors(&self) -> bool {
        !self.outcome.is_clean()
    }
}

#[derive(Debug, Default)]
pub struct OutputPaths {
    pub errors: Option<PathBuf>,
    pub valid: Option<PathBuf>,
}
