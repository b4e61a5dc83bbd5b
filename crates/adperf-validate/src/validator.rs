//! Per-row schema validation.
//!
//! Fields are checked in schema declaration order. Each field goes through
//! presence, type coercion and constraint checks; the first failing check
//! yields that field's violation and later checks are skipped for it. Other
//! fields are still checked, so a row reports every failing field.

use adperf_model::{
    FieldSpec, FieldType, FieldValue, RawRow, Schema, ValidatedRecord, Violation,
};

use crate::coerce::{parse_float, parse_integer, parse_strict_integer};

/// Non-empty, ordered violations of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViolations {
    first: Violation,
    rest: Vec<Violation>,
}

impl RowViolations {
    /// Returns `None` for an empty list.
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        let mut iter = violations.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// First violation in field declaration order.
    pub fn first(&self) -> &Violation {
        &self.first
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_vec(self) -> Vec<Violation> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

/// Validate one row against the schema.
///
/// Returns the coerced record, or every violation found. Columns not
/// declared by the schema are ignored.
pub fn validate_row(schema: &Schema, row: &RawRow) -> Result<ValidatedRecord, RowViolations> {
    let mut fields = Vec::with_capacity(schema.len());
    let mut violations = Vec::new();
    for spec in schema.fields() {
        match check_field(spec, row.text(&spec.name)) {
            Ok(Some(value)) => fields.push((spec.name.clone(), value)),
            Ok(None) => {}
            Err(violation) => violations.push(violation),
        }
    }
    match RowViolations::from_vec(violations) {
        None => Ok(ValidatedRecord::from_fields(fields)),
        Some(violations) => Err(violations),
    }
}

/// Check one field; `Ok(None)` means an optional field was absent.
fn check_field(spec: &FieldSpec, text: Option<&str>) -> Result<Option<FieldValue>, Violation> {
    let Some(text) = text else {
        if spec.required {
            return Err(Violation::MissingField {
                field: spec.name.clone(),
            });
        }
        return Ok(None);
    };
    let value = coerce(spec, text)?;
    if let (Some(constraint), Some(number)) = (spec.constraint, value.as_f64())
        && !constraint.allows(number)
    {
        return Err(Violation::ConstraintViolation {
            field: spec.name.clone(),
            constraint,
            value: number,
        });
    }
    Ok(Some(value))
}

fn coerce(spec: &FieldSpec, text: &str) -> Result<FieldValue, Violation> {
    let mismatch = || Violation::TypeMismatch {
        field: spec.name.clone(),
        expected: spec.field_type,
        value: text.to_string(),
    };
    match spec.field_type {
        FieldType::Text => Ok(FieldValue::Text(text.to_string())),
        FieldType::Integer => parse_integer(text)
            .map(FieldValue::Integer)
            .ok_or_else(mismatch),
        FieldType::Float => finite_float(spec, text)?
            .map(FieldValue::Float)
            .ok_or_else(mismatch),
        FieldType::Number => match parse_strict_integer(text) {
            Some(value) => Ok(FieldValue::Integer(value)),
            None => finite_float(spec, text)?
                .map(FieldValue::Float)
                .ok_or_else(mismatch),
        },
    }
}

/// `Ok(None)` when the text is not a number at all.
fn finite_float(spec: &FieldSpec, text: &str) -> Result<Option<f64>, Violation> {
    match parse_float(text) {
        Some(value) if !value.is_finite() => Err(Violation::NonFinite {
            field: spec.name.clone(),
            value: text.to_string(),
        }),
        parsed => Ok(parsed),
    }
}
