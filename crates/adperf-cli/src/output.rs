//! Writers for the error report and the valid records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use adperf_model::{ErrorReportEntry, Schema, ValidatedRecord};

/// File format of written outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Write the error report with columns `line,row_label,first_error,error_count`.
pub fn write_error_report<W: Write>(
    writer: W,
    entries: &[ErrorReportEntry],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(writer);
            wtr.write_record(ErrorReportEntry::COLUMNS)
                .context("write error report header")?;
            for entry in entries {
                wtr.write_record([
                    entry.line.to_string(),
                    entry.row_label.clone(),
                    entry.first_error.clone(),
                    entry.error_count.to_string(),
                ])
                .context("write error report row")?;
            }
            wtr.flush().context("flush error report")?;
        }
        OutputFormat::Json => write_json(writer, entries)?,
    }
    Ok(())
}

/// Write valid records; CSV columns follow the schema's field order.
pub fn write_valid_records<W: Write>(
    writer: W,
    schema: &Schema,
    records: &[ValidatedRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(writer);
            wtr.write_record(schema.fields().iter().map(|field| field.name.as_str()))
                .context("write records header")?;
            for record in records {
                let row = schema.fields().iter().map(|field| {
                    record
                        .get(&field.name)
                        .map(ToString::to_string)
                        .unwrap_or_default()
                });
                wtr.write_record(row).context("write record row")?;
            }
            wtr.flush().context("flush records")?;
        }
        OutputFormat::Json => write_json(writer, records)?,
    }
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("serialize json")?;
    writeln!(writer).context("write json")?;
    writer.flush().context("flush json")?;
    Ok(())
}

/// Create `path` (and its parent directory) and hand a buffered writer to `write`.
pub fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write(BufWriter::new(file)).with_context(|| format!("write {}", path.display()))
}
