//! Field-level validation failures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{Constraint, FieldType};

/// Broad class of a violation; the error formatter is keyed on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    Missing,
    WrongType,
    OutOfRange,
    Other,
}

impl ViolationCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::WrongType => "wrong-type",
            Self::OutOfRange => "out-of-range",
            Self::Other => "other",
        }
    }
}

/// One failed rule for one field of one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    /// Required field absent or empty.
    MissingField { field: String },
    /// Value present but not coercible to the declared type.
    TypeMismatch {
        field: String,
        expected: FieldType,
        value: String,
    },
    /// Coerced value fails a declared constraint.
    ConstraintViolation {
        field: String,
        constraint: Constraint,
        value: f64,
    },
    /// Numeric text that parses to NaN or an infinity.
    NonFinite { field: String, value: String },
}

impl Violation {
    pub fn field(&self) -> &str {
        match self {
            Violation::MissingField { field } => field,
            Violation::TypeMismatch { field, .. } => field,
            Violation::ConstraintViolation { field, .. } => field,
            Violation::NonFinite { field, .. } => field,
        }
    }

    pub fn category(&self) -> ViolationCategory {
        match self {
            Violation::MissingField { .. } => ViolationCategory::Missing,
            Violation::TypeMismatch { .. } => ViolationCategory::WrongType,
            Violation::ConstraintViolation { .. } => ViolationCategory::OutOfRange,
            Violation::NonFinite { .. } => ViolationCategory::Other,
        }
    }

    /// Engine-native diagnostic text, lower case and without punctuation.
    pub fn diagnostic(&self) -> String {
        match self {
            Violation::MissingField { .. } => "field required".to_string(),
            Violation::TypeMismatch { expected, .. } => match expected {
                FieldType::Integer => "value is not a valid integer".to_string(),
                FieldType::Float | FieldType::Number => "value is not a valid float".to_string(),
                FieldType::Text => "value is not a valid string".to_string(),
            },
            Violation::ConstraintViolation { constraint, .. } => constraint.diagnostic(),
            Violation::NonFinite { .. } => "value must be a finite number".to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.diagnostic())
    }
}
