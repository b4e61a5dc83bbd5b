use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use adperf_model::{CellValue, RowRead, Schema, ViolationCategory};

use crate::types::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    println!("Input: {}", result.input);
    println!("Schema: {}", result.schema_name);
    if !result.preview.is_empty() {
        print_preview(result);
    }
    if !result.unknown_columns.is_empty() {
        println!("Ignored columns: {}", result.unknown_columns.join(", "));
    }
    if !result.missing_columns.is_empty() {
        eprintln!(
            "Missing required columns: {}",
            result.missing_columns.join(", ")
        );
    }

    let summary = result.outcome.summary();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Unreadable"),
        header_cell("Time (s)"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total_rows).add_attribute(Attribute::Bold),
        count_cell(summary.valid_rows, Color::Green),
        count_cell(summary.invalid_rows, Color::Red),
        count_cell(summary.faulted_rows, Color::Yellow),
        Cell::new(format!("{:.2}", result.elapsed.as_secs_f64())),
    ]);
    println!("{table}");

    print_error_table(result);
    print_tally_table(result);

    if let Some(path) = &result.outputs.errors {
        println!("Error report: {}", path.display());
    }
    if let Some(path) = &result.outputs.valid {
        println!("Valid records: {}", path.display());
    }
    if result.has_errors() {
        eprintln!(
            "{} of {} rows failed validation.",
            summary.invalid_rows, summary.total_rows
        );
    } else {
        println!("All {} rows passed validation.", summary.total_rows);
    }
}

fn print_preview(result: &ValidateResult) {
    let mut table = Table::new();
    table.set_header(
        result
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for read in &result.preview {
        table.add_row(preview_cells(&result.headers, read));
    }
    println!();
    println!("Preview ({} rows):", result.preview.len());
    println!("{table}");
}

fn preview_cells(headers: &[String], read: &RowRead) -> Vec<Cell> {
    let row = match read {
        Ok(row) => row,
        Err(fault) => &fault.partial,
    };
    headers
        .iter()
        .map(|header| match row.get(header) {
            Some(CellValue::Text(value)) => Cell::new(value),
            Some(CellValue::Missing) | None => dim_cell("-"),
        })
        .collect()
}

fn print_error_table(result: &ValidateResult) {
    let report = &result.outcome.error_report;
    if report.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Row label"),
        header_cell("First error"),
        header_cell("Errors"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in report.iter().take(result.show_errors) {
        table.add_row(vec![
            Cell::new(entry.line),
            Cell::new(&entry.row_label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.first_error),
            count_cell(entry.error_count, Color::Red),
        ]);
    }
    println!();
    println!("Error report:");
    println!("{table}");
    let hidden = report.len().saturating_sub(result.show_errors);
    if hidden > 0 {
        println!("... {hidden} more rows not shown (use --errors-out to save the full report)");
    }
}

fn print_tally_table(result: &ValidateResult) {
    let tally = result.outcome.tally();
    if tally.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Problem"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in tally {
        table.add_row(vec![
            Cell::new(&entry.field),
            category_cell(entry.category),
            Cell::new(entry.count),
        ]);
    }
    println!();
    println!("Violations by field:");
    println!("{table}");
}

pub fn print_schema(schema: &Schema) {
    println!("Schema: {}", schema.name());
    if let Some(label) = schema.label_field() {
        println!("Row label field: {label}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Required"),
        header_cell("Type"),
        header_cell("Constraint"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for field in schema.fields() {
        let required = if field.required {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        let constraint = match &field.constraint {
            Some(constraint) => Cell::new(constraint.describe()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&field.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            required,
            Cell::new(field.field_type),
            constraint,
            Cell::new(field.description.as_deref().unwrap_or("")),
        ]);
    }
    println!("{table}");
}

fn category_cell(category: ViolationCategory) -> Cell {
    let color = match category {
        ViolationCategory::Missing => Color::Red,
        ViolationCategory::WrongType => Color::Magenta,
        ViolationCategory::OutOfRange => Color::Yellow,
        ViolationCategory::Other => Color::DarkGrey,
    };
    Cell::new(category.label()).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
