//! Behavioural tests for row validation and batch reporting.

use adperf_ingest::{IngestOptions, read_csv_from_reader};
use adperf_model::{
    CellValue, FieldValue, RawRow, RowFault, Schema, Violation, ViolationCategory,
};
use adperf_validate::{Locale, RunOptions, format_violation, validate_row, validate_rows};

fn valid_row(label: &str) -> RawRow {
    RawRow::new()
        .with("Organizador", "12")
        .with("Ano_Mes", "2024 | Março")
        .with("Dia_da_Semana", "Sexta-Feira")
        .with("Tipo_Dia", "Dia útil")
        .with("Objetivo", "Leads")
        .with("Date", "2024-03-01")
        .with("AdSet_name", label)
        .with("Amount_spent", "150.75")
        .with("Link_clicks", "42")
        .with("Impressions", "1200.0")
        .with("Tipo_de_Anúncio", "Video")
        .with("Fase", "Captação")
}

#[test]
fn conforming_row_yields_record() {
    let schema = Schema::ad_performance();
    let row = valid_row("Launch").with("Extra_column", "ignored");
    let record = validate_row(&schema, &row).expect("row is valid");

    assert_eq!(record.get("Organizador"), Some(&FieldValue::Integer(12)));
    assert_eq!(record.get("Amount_spent"), Some(&FieldValue::Float(150.75)));
    assert_eq!(record.get("Link_clicks"), Some(&FieldValue::Integer(42)));
    assert_eq!(record.get("Impressions"), Some(&FieldValue::Float(1200.0)));
    assert_eq!(
        record.get("AdSet_name"),
        Some(&FieldValue::Text("Launch".to_string()))
    );
    // Optional fields left blank are absent; unknown columns are dropped.
    assert_eq!(record.get("Conversions"), None);
    assert_eq!(record.get("Segmentação"), None);
    assert_eq!(record.get("Extra_column"), None);
    assert_eq!(record.len(), 12);

    let names: Vec<&str> = record.field_names().collect();
    assert_eq!(names.first(), Some(&"Organizador"));
    assert_eq!(names.last(), Some(&"Fase"));
}

#[test]
fn missing_required_field_is_reported() {
    let schema = Schema::ad_performance();
    let mut row = valid_row("Launch");
    row.insert("Date", CellValue::Missing);

    let violations = validate_row(&schema, &row).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations.first(),
        &Violation::MissingField {
            field: "Date".to_string()
        }
    );
    assert_eq!(
        format_violation(violations.first(), Locale::En),
        "Field 'Date' is missing or empty."
    );
}

#[test]
fn invalid_optional_field_rejects_row() {
    let schema = Schema::ad_performance();
    let row = valid_row("Launch").with("Link_clicks", "abc");

    let violations = validate_row(&schema, &row).unwrap_err();
    assert_eq!(violations.first().category(), ViolationCategory::WrongType);
    assert_eq!(violations.first().field(), "Link_clicks");
    assert_eq!(
        format_violation(violations.first(), Locale::En),
        "Field 'Link_clicks' must be a whole number (e.g., 100)."
    );
}

#[test]
fn all_violations_returned_in_declaration_order() {
    let schema = Schema::ad_performance();
    let row = valid_row("Launch")
        .with("Organizador", "1.5")
        .with("Amount_spent", "-3")
        .with("Fase", "");

    let violations = validate_row(&schema, &row).unwrap_err();
    let summary: Vec<(&str, ViolationCategory)> = violations
        .iter()
        .map(|v| (v.field(), v.category()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Organizador", ViolationCategory::WrongType),
            ("Amount_spent", ViolationCategory::OutOfRange),
            ("Fase", ViolationCategory::Missing),
        ]
    );
    assert_eq!(
        format_violation(violations.first(), Locale::En),
        "Field 'Organizador' must be a whole number (e.g., 100)."
    );
}

#[test]
fn negative_spend_reports_constraint_with_label() {
    let schema = Schema::ad_performance();
    let rows = vec![Ok(valid_row("X").with("Amount_spent", "-5"))];
    let outcome = validate_rows(&schema, rows, &RunOptions::default());

    assert!(outcome.valid_records.is_empty());
    let entry = &outcome.error_report[0];
    assert_eq!(entry.line, 2);
    assert_eq!(entry.row_label, "X");
    assert_eq!(
        entry.first_error,
        "Field 'Amount_spent': Must be greater than or equal to 0."
    );
    assert_eq!(entry.error_count, 1);
}

#[test]
fn missing_label_uses_placeholder() {
    let schema = Schema::ad_performance();
    let mut row = valid_row("ignored");
    row.insert("AdSet_name", CellValue::Missing);
    let outcome = validate_rows(&schema, vec![Ok(row)], &RunOptions::default());

    let entry = &outcome.error_report[0];
    assert_eq!(entry.row_label, "N/A");
    assert_eq!(entry.first_error, "Field 'AdSet_name' is missing or empty.");
}

#[test]
fn batch_preserves_order_and_counts() {
    let schema = Schema::ad_performance();
    let rows = vec![
        Ok(valid_row("A")),
        Ok(valid_row("B").with("Organizador", "")),
        Err(RowFault::new("expected 14 fields, found 16")),
        Ok(valid_row("D")),
        Ok(valid_row("E").with("Amount_spent", "free").with("Fase", "")),
    ];
    let outcome = validate_rows(&schema, rows, &RunOptions::default());

    let summary = outcome.summary();
    assert_eq!(summary.total_rows, 5);
    assert_eq!(summary.valid_rows, 2);
    assert_eq!(summary.invalid_rows, 3);
    assert_eq!(summary.faulted_rows, 1);
    assert!(!outcome.is_clean());

    let labels: Vec<Option<&FieldValue>> = outcome
        .valid_records
        .iter()
        .map(|record| record.get("AdSet_name"))
        .collect();
    assert_eq!(
        labels,
        vec![
            Some(&FieldValue::Text("A".to_string())),
            Some(&FieldValue::Text("D".to_string()))
        ]
    );

    let lines: Vec<usize> = outcome.error_report.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![3, 4, 6]);
    assert_eq!(outcome.error_report[1].row_label, "N/A");
    assert_eq!(
        outcome.error_report[1].first_error,
        "General error: expected 14 fields, found 16"
    );
    assert_eq!(outcome.error_report[2].error_count, 2);

    let tally = outcome.tally();
    assert_eq!(tally.len(), 3);
    assert!(tally.iter().all(|entry| entry.count == 1));
    assert_eq!(tally[0].field, "Amount_spent");
}

#[test]
fn portuguese_report_messages() {
    let schema = Schema::ad_performance();
    let rows = vec![
        Ok(valid_row("A").with("Date", "")),
        Ok(valid_row("B").with("Amount_spent", "muito")),
        Ok(valid_row("C").with("Link_clicks", "abc")),
        Err(RowFault::new("linha ilegível")),
    ];
    let options = RunOptions::default().with_locale(Locale::PtBr);
    let outcome = validate_rows(&schema, rows, &options);
    let messages: Vec<&str> = outcome
        .error_report
        .iter()
        .map(|e| e.first_error.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "O campo 'Date' está faltando ou vazio.",
            "O campo 'Amount_spent' deve ser um número decimal (ex: 100.50).",
            "O campo 'Link_clicks' deve ser um número inteiro (ex: 100).",
            "Erro Geral: linha ilegível",
        ]
    );
}

#[test]
fn every_row_fails_or_every_row_passes() {
    let schema = Schema::ad_performance();
    let all_bad = (0..4).map(|_| Ok(RawRow::new()));
    let outcome = validate_rows(&schema, all_bad, &RunOptions::default());
    assert_eq!(outcome.error_report.len(), 4);
    assert!(outcome.error_report.iter().all(|e| e.error_count == 10));

    let all_good = (0..4).map(|i| Ok(valid_row(&format!("Set {i}"))));
    let outcome = validate_rows(&schema, all_good, &RunOptions::default());
    assert_eq!(outcome.valid_records.len(), 4);
    assert!(outcome.is_clean());
}

#[test]
fn csv_to_report_end_to_end() {
    let csv = "Organizador,Ano_Mes,Dia_da_Semana,Tipo_Dia,Objetivo,Date,AdSet_name,Amount_spent,\
               Link_clicks,Impressions,Conversions,Segmentação,Tipo_de_Anúncio,Fase\n\
               1,2024 | Março,Sexta-Feira,Dia útil,Leads,2024-03-01,Launch A,10.5,3,100,1,Broad,Video,F1\n\
               2,2024 | Março,Sábado,Fim de semana,Leads,,Launch B,-1,,,,,Estático,F1\n\
               x,2024 | Março,Domingo,Fim de semana,Leads,2024-03-03,Launch C,5,abc,,,,Video,F2,extra\n\
               4,2024 | Março,Segunda-Feira,Dia útil,Vendas,2024-03-04,Launch D,0,NaN,,,,Video,F2\n";
    let table = read_csv_from_reader(csv.as_bytes(), &IngestOptions::default()).expect("read");
    let outcome = validate_rows(
        &Schema::ad_performance(),
        table.rows,
        &RunOptions::default(),
    );

    assert_eq!(outcome.valid_records.len(), 2);
    let report: Vec<String> = outcome
        .error_report
        .iter()
        .map(|e| {
            format!(
                "{} | {} | {} | {}",
                e.line, e.row_label, e.first_error, e.error_count
            )
        })
        .collect();
    insta::assert_snapshot!("csv_error_report", report.join("\n"));
}
