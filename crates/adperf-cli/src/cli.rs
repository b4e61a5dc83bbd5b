//! CLI argument definitions for the ad performance validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "adperf",
    version,
    about = "Validate ad performance CSV files against a field schema",
    long_about = "Validate advertising performance records row by row.\n\n\
                  Every row either passes the schema and is kept as a valid record,\n\
                  or is listed in an error report with its line, label and first error."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row labels and cell values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV file and print the error report.
    Validate(ValidateArgs),

    /// Print the field contract rows are validated against.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV file to validate ("-" reads from stdin).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// JSON schema file to use instead of the built-in ad performance schema.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Field delimiter of the input.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Language of the error messages.
    #[arg(long = "locale", value_enum, default_value = "en")]
    pub locale: LocaleArg,

    /// Write the error report to this file.
    #[arg(long = "errors-out", value_name = "PATH")]
    pub errors_out: Option<PathBuf>,

    /// Write the valid records to this file.
    #[arg(long = "valid-out", value_name = "PATH")]
    pub valid_out: Option<PathBuf>,

    /// Format of the files written by --errors-out and --valid-out.
    #[arg(long = "output-format", value_enum, default_value = "csv")]
    pub output_format: OutputFormatArg,

    /// Print the first N input rows before validating.
    #[arg(long = "preview", value_name = "N", default_value_t = 0)]
    pub preview: usize,

    /// Maximum number of error report rows printed to the terminal.
    #[arg(long = "show-errors", value_name = "N", default_value_t = 50)]
    pub show_errors: usize,

    /// Exit successfully even when some rows fail validation.
    #[arg(long = "no-fail-on-invalid")]
    pub no_fail_on_invalid: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// JSON schema file to print instead of the built-in schema.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    En,
    PtBr,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
