//! Row validation engine for ad performance tables.
//!
//! [`validate_row`] checks one row against a [`adperf_model::Schema`];
//! [`validate_rows`] runs it over a whole table and produces the valid
//! records plus a flat, human-readable error report.

pub mod coerce;
pub mod format;
pub mod outcome;
pub mod runner;
pub mod validator;

pub use format::{Locale, capitalize, format_fault, format_violation};
pub use outcome::{TallyEntry, ValidationOutcome, ValidationSummary};
pub use runner::{RunOptions, row_label, validate_rows};
pub use validator::{RowViolations, validate_row};
