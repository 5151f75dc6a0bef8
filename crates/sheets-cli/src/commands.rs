//! Command implementations.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use sheets_core::{convert, ConvertOptions};
use sheets_ingest::SheetsClient;
use sheets_model::{ColumnRequest, Table};

use crate::cli::{ConvertArgs, InspectArgs};
use crate::summary::{print_convert_summary, print_preview};

/// Outcome of a `convert` run, for summary printing.
#[derive(Debug)]
pub struct ConvertSummary {
    pub filename: String,
    /// Written file path; `None` when the CSV went to stdout.
    pub path: Option<PathBuf>,
    pub data_rows: usize,
    pub bytes: usize,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertSummary> {
    let table = fetch(&args.url, args.gid.as_deref())?;

    let options = ConvertOptions {
        columns: load_columns(args)?,
        delimiter: delimiter_byte(args.delimiter)?,
    };
    let result = convert(table, &options).context("convert table")?;

    let data_rows = result.csv.lines().count().saturating_sub(1);
    let bytes = result.csv.len();

    if args.stdout {
        print!("{}", result.csv);
        return Ok(ConvertSummary {
            filename: result.filename,
            path: None,
            data_rows,
            bytes,
        });
    }

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create output dir {}", args.output_dir.display()))?;
    let path = args.output_dir.join(&result.filename);
    fs::write(&path, &result.csv).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = data_rows, "wrote CSV output");

    Ok(ConvertSummary {
        filename: result.filename,
        path: Some(path),
        data_rows,
        bytes,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let table = fetch(&args.url, args.gid.as_deref())?;
    print_preview(&table, args.rows);
    Ok(())
}

fn fetch(url: &str, gid: Option<&str>) -> Result<Table> {
    let client = SheetsClient::new().context("build HTTP client")?;
    let table = client
        .fetch_spreadsheet(url, gid)
        .context("fetch spreadsheet")?;
    debug!(
        source_id = %table.source_id,
        columns = table.headers.len(),
        rows = table.rows.len(),
        "fetched spreadsheet"
    );
    Ok(table)
}

/// Column requests from `--column` flags or a `--columns-file` JSON list.
fn load_columns(args: &ConvertArgs) -> Result<Vec<ColumnRequest>> {
    let Some(path) = &args.columns_file else {
        return Ok(args.columns.clone());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read columns file {}", path.display()))?;
    let requests: Vec<ColumnRequest> = serde_json::from_str(&text)
        .with_context(|| format!("parse columns file {}", path.display()))?;
    Ok(requests)
}

fn delimiter_byte(delimiter: Option<char>) -> Result<Option<u8>> {
    match delimiter {
        None => Ok(None),
        Some(c) if c.is_ascii() => Ok(Some(c as u8)),
        Some(c) => bail!("delimiter must be a single ASCII character, got {c:?}"),
    }
}

/// Print the result of a successful convert run.
pub fn report_convert(summary: &ConvertSummary) {
    // Nothing to print when the CSV itself went to stdout.
    if summary.path.is_some() {
        print_convert_summary(summary);
    }
}
