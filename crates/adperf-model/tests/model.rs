//! Tests for adperf-model types.

use adperf_model::{
    CellValue, Constraint, FieldSpec, FieldType, RawRow, RowFault, Schema, SchemaError,
};

#[test]
fn ad_performance_schema_shape() {
    let schema = Schema::ad_performance();
    assert_eq!(schema.len(), 14);
    assert_eq!(schema.label_field(), Some("AdSet_name"));
    assert_eq!(schema.required_fields().count(), 10);

    let spend = schema.field("Amount_spent").expect("Amount_spent");
    assert!(spend.required);
    assert_eq!(spend.field_type, FieldType::Float);
    assert_eq!(spend.constraint, Some(Constraint::Min(0.0)));

    let clicks = schema.field("Link_clicks").expect("Link_clicks");
    assert!(!clicks.required);
    assert_eq!(clicks.field_type, FieldType::Number);

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"Organizador"));
    assert_eq!(names.last(), Some(&"Fase"));
    assert!(schema.contains("Segmentação"));
    assert!(!schema.contains("Unknown"));
}

#[test]
fn schema_rejects_duplicate_fields() {
    let err = Schema::new(
        "dup",
        vec![
            FieldSpec::required("A", FieldType::Text),
            FieldSpec::optional("A", FieldType::Integer),
        ],
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SchemaError::DuplicateField {
            field: "A".to_string()
        }
    );
}

#[test]
fn schema_rejects_constraint_on_text() {
    let err = Schema::new(
        "bad",
        vec![FieldSpec::required("Name", FieldType::Text).with_constraint(Constraint::Min(1.0))],
        None,
    )
    .unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintOnText { .. }));
}

#[test]
fn schema_rejects_unknown_label_and_empty() {
    let err = Schema::new(
        "bad",
        vec![FieldSpec::required("A", FieldType::Text)],
        Some("B".to_string()),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "label field 'B' is not declared in the schema");

    let err = Schema::new("empty", Vec::new(), None).unwrap_err();
    assert!(matches!(err, SchemaError::Empty { .. }));
}

#[test]
fn schema_json_round_trip_goes_through_checks() {
    let json = r#"{
        "name": "spend_only",
        "label_field": "Campaign",
        "fields": [
            { "name": "Campaign", "required": true, "type": "text" },
            { "name": "Spend", "required": true, "type": "float",
              "constraint": { "kind": "min", "value": 0.0 } }
        ]
    }"#;
    let schema: Schema = serde_json::from_str(json).expect("parse schema");
    assert_eq!(schema.name(), "spend_only");
    assert_eq!(schema.label_field(), Some("Campaign"));
    assert_eq!(
        schema.field("Spend").and_then(|f| f.constraint),
        Some(Constraint::Min(0.0))
    );

    let invalid = r#"{ "name": "x", "fields": [] }"#;
    let err = serde_json::from_str::<Schema>(invalid).unwrap_err();
    assert!(err.to_string().contains("declares no fields"));
}

#[test]
fn raw_row_text_skips_missing_and_blank() {
    let mut row = RawRow::new().with("AdSet_name", "  Summer  ");
    row.insert("Date", CellValue::Missing);
    row.insert("Fase", CellValue::Text("   ".to_string()));

    assert_eq!(row.text("AdSet_name"), Some("Summer"));
    assert_eq!(row.text("Date"), None);
    assert_eq!(row.text("Fase"), None);
    assert_eq!(row.text("Absent"), None);
    assert_eq!(row.len(), 3);
}

#[test]
fn row_fault_keeps_partial_row() {
    let partial = RawRow::new().with("AdSet_name", "Launch");
    let fault = RowFault::new("expected 3 fields, found 5").with_partial(partial);
    assert_eq!(fault.to_string(), "expected 3 fields, found 5");
    assert_eq!(fault.partial.text("AdSet_name"), Some("Launch"));
}
