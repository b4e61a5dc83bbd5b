pub mod error;
pub mod record;
pub mod report;
pub mod row;
pub mod schema;
pub mod violation;

pub use error::SchemaError;
pub use record::{FieldValue, ValidatedRecord};
pub use report::{ErrorReportEntry, LABEL_PLACEHOLDER};
pub use row::{CellValue, RawRow, RowFault, RowRead};
pub use schema::{
    AD_PERFORMANCE_SCHEMA, Constraint, DEFAULT_LABEL_FIELD, FieldSpec, FieldType, Schema,
};
pub use violation::{Violation, ViolationCategory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_categories() {
        let missing = Violation::MissingField {
            field: "Date".to_string(),
        };
        let spend = Violation::ConstraintViolation {
            field: "Amount_spent".to_string(),
            constraint: Constraint::Min(0.0),
            value: -5.0,
        };
        assert_eq!(missing.category(), ViolationCategory::Missing);
        assert_eq!(spend.category(), ViolationCategory::OutOfRange);
        assert_eq!(spend.field(), "Amount_spent");
        assert_eq!(
            spend.to_string(),
            "Amount_spent: must be greater than or equal to 0"
        );
    }

    #[test]
    fn record_serializes_in_field_order() {
        let record = ValidatedRecord::from_fields(vec![
            ("Organizador".to_string(), FieldValue::Integer(7)),
            ("AdSet_name".to_string(), FieldValue::Text("X".to_string())),
            ("Amount_spent".to_string(), FieldValue::Float(10.5)),
        ]);
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(
            json,
            r#"{"Organizador":7,"AdSet_name":"X","Amount_spent":10.5}"#
        );
    }
}
