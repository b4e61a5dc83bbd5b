use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use adperf_cli::logging::redact_value;
use adperf_cli::output::{OutputFormat, write_error_report, write_file, write_valid_records};
use adperf_ingest::{CsvTable, IngestOptions, load_schema, read_csv_from_reader, read_csv_table};
use adperf_model::Schema;
use adperf_validate::{Locale, RunOptions, ValidationOutcome, validate_rows};

use crate::cli::{LocaleArg, OutputFormatArg, SchemaArgs, ValidateArgs};
use crate::summary::print_schema;
use crate::types::{OutputPaths, ValidateResult};

const STDIN_ARG: &str = "-";

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = resolve_schema(args.schema.as_deref())?;
    print_schema(&schema);
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let input = input_name(&args.input);
    let validate_span = info_span!("validate", input = %input);
    let _validate_guard = validate_span.enter();

    let schema = resolve_schema(args.schema.as_deref())?;
    let options = IngestOptions::default().with_delimiter(delimiter_byte(args.delimiter)?);

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_span = info_span!("ingest", input = %input);
    let table = ingest_span.in_scope(|| read_input(&args.input, &options))?;
    info!(
        rows = table.row_count(),
        columns = table.headers.len(),
        "input loaded"
    );

    let unknown_columns: Vec<String> = table
        .unknown_columns(&schema)
        .into_iter()
        .map(str::to_string)
        .collect();
    if !unknown_columns.is_empty() {
        info!(columns = %unknown_columns.join(", "), "ignoring columns not in schema");
    }
    let missing_columns: Vec<String> = table
        .missing_columns(&schema)
        .into_iter()
        .map(str::to_string)
        .collect();
    if !missing_columns.is_empty() {
        warn!(
            columns = %missing_columns.join(", "),
            "required columns absent; every row will fail"
        );
    }
    let preview = table.rows.iter().take(args.preview).cloned().collect();
    let CsvTable { headers, rows } = table;

    // =========================================================================
    // Stage 2: Validate
    // =========================================================================
    let run_options = RunOptions::default().with_locale(locale(args.locale));
    let start = Instant::now();
    let outcome = validate_rows(&schema, rows, &run_options);
    let elapsed = start.elapsed();
    for entry in &outcome.error_report {
        debug!(
            line = entry.line,
            label = redact_value(&entry.row_label),
            error_count = entry.error_count,
            "invalid row"
        );
    }

    // =========================================================================
    // Stage 3: Outputs
    // =========================================================================
    let outputs = write_outputs(args, &schema, &outcome)?;

    Ok(ValidateResult {
        input,
        schema_name: schema.name().to_string(),
        headers,
        preview,
        unknown_columns,
        missing_columns,
        outcome,
        elapsed,
        outputs,
        show_errors: args.show_errors,
    })
}

fn resolve_schema(path: Option<&Path>) -> Result<Schema> {
    match path {
        Some(path) => load_schema(path).context("load schema"),
        None => Ok(Schema::ad_performance()),
    }
}

fn read_input(path: &Path, options: &IngestOptions) -> Result<CsvTable> {
    if path.as_os_str() == STDIN_ARG {
        return read_csv_from_reader(io::stdin().lock(), options).context("read stdin");
    }
    read_csv_table(path, options).with_context(|| format!("read input {}", path.display()))
}

fn write_outputs(
    args: &ValidateArgs,
    schema: &Schema,
    outcome: &ValidationOutcome,
) -> Result<OutputPaths> {
    let format = output_format(args.output_format);
    let mut outputs = OutputPaths::default();
    if let Some(path) = &args.errors_out {
        write_file(path, |writer| {
            write_error_report(writer, &outcome.error_report, format)
        })?;
        info!(path = %path.display(), entries = outcome.error_report.len(), "wrote error report");
        outputs.errors = Some(path.clone());
    }
    if let Some(path) = &args.valid_out {
        write_file(path, |writer| {
            write_valid_records(writer, schema, &outcome.valid_records, format)
        })?;
        info!(path = %path.display(), records = outcome.valid_records.len(), "wrote valid records");
        outputs.valid = Some(path.clone());
    }
    Ok(outputs)
}

fn input_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_ARG {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{delimiter}'");
    }
    Ok(delimiter as u8)
}

fn locale(arg: LocaleArg) -> Locale {
    match arg {
        LocaleArg::En => Locale::En,
        LocaleArg::PtBr => Locale::PtBr,
    }
}

fn output_format(arg: OutputFormatArg) -> OutputFormat {
    match arg {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}
