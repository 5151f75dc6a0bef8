//! The conversion pipeline: select → format → assemble.

use sheets_model::{ColumnRequest, Table};
use sheets_output::{assemble, derive_filename, OutputError};
use tracing::{debug, info_span};

use crate::format::{format_table, FormattingMode};
use crate::select::select_columns;

/// Per-request conversion options.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Columns to keep, in output order. Empty means keep everything and
    /// classify heuristically.
    pub columns: Vec<ColumnRequest>,
    /// Field separator override for the CSV output.
    pub delimiter: Option<u8>,
}

/// The finished product of one conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Serialized CSV text.
    pub csv: String,
    /// Derived download filename.
    pub filename: String,
}

/// Convert an in-memory table to CSV text plus a derived filename.
///
/// # Errors
///
/// The only failure is [`OutputError::EmptyHeaders`] from the assembler;
/// it propagates unmodified.
pub fn convert(table: Table, options: &ConvertOptions) -> Result<Conversion, OutputError> {
    let span = info_span!("convert", source_id = %table.source_id);
    let _guard = span.enter();

    let (selected, specs) = select_columns(table, &options.columns);
    let mode = FormattingMode::from_specs(specs);
    debug!(
        columns = selected.headers.len(),
        rows = selected.rows.len(),
        explicit = matches!(mode, FormattingMode::Explicit(_)),
        "selected columns"
    );

    let formatted = format_table(selected, &mode);
    let csv = assemble(&formatted, options.delimiter)?;
    let filename = derive_filename(formatted.title.as_deref());

    Ok(Conversion { csv, filename })
}
