//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sheets_cli::columns::parse_column_arg;
use sheets_model::ColumnRequest;

#[derive(Parser)]
#[command(
    name = "sheets2csv",
    version,
    about = "Convert a publicly shared spreadsheet to normalized CSV",
    long_about = "Fetch a publicly shared Google Sheets document, normalize cell values\n\
                  (dates, currency, numbers, e-mails), and write the result as CSV.\n\
                  Columns can be filtered, reordered, and typed per request."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a spreadsheet, normalize it, and write a CSV file.
    Convert(ConvertArgs),

    /// Fetch a spreadsheet and preview its headers and first rows.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Sharing URL of the publicly accessible spreadsheet.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Sheet id within the document (default: first sheet).
    #[arg(long = "gid", value_name = "GID")]
    pub gid: Option<String>,

    /// Column to keep, in output order. Repeatable.
    /// Syntax: NAME, NAME:TYPE, or NAME:currency:CODE.
    #[arg(
        long = "column",
        value_name = "NAME[:TYPE[:CURRENCY]]",
        value_parser = parse_column_arg
    )]
    pub columns: Vec<ColumnRequest>,

    /// JSON file with the column request list (array of names or
    /// {"name", "type", "currency"} objects).
    #[arg(long = "columns-file", value_name = "PATH", conflicts_with = "columns")]
    pub columns_file: Option<PathBuf>,

    /// Field separator for the CSV output (default: comma).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Directory the CSV file is written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the CSV to stdout instead of writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Sharing URL of the publicly accessible spreadsheet.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Sheet id within the document (default: first sheet).
    #[arg(long = "gid", value_name = "GID")]
    pub gid: Option<String>,

    /// Number of data rows to preview.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
