//! Table formatting: apply the value classifier to every cell.

use sheets_model::{ColumnSpec, ColumnType, Table};
use sheets_transform::classify;

/// How cell types are decided for a request, chosen once per conversion.
#[derive(Debug, Clone, Default)]
pub enum FormattingMode {
    /// No column definitions were supplied: every cell runs through the
    /// heuristic interpreter chain.
    #[default]
    Heuristic,
    /// Cells are classified positionally by the resolved column specs.
    Explicit(Vec<ColumnSpec>),
}

impl FormattingMode {
    /// Mode for an optional spec list as returned by column selection.
    #[must_use]
    pub fn from_specs(specs: Option<Vec<ColumnSpec>>) -> Self {
        match specs {
            Some(specs) => Self::Explicit(specs),
            None => Self::Heuristic,
        }
    }
}

/// Rewrite every cell of every row in canonical form.
///
/// In explicit mode, the cell at position `i` uses `specs[i]`; a cell
/// beyond the spec range (extra ragged columns) is treated as Text. The
/// header row, `source_id`, and `title` pass through untouched and rows
/// keep their original length.
pub fn format_table(table: Table, mode: &FormattingMode) -> Table {
    let Table {
        headers,
        rows,
        source_id,
        title,
    } = table;

    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(index, cell)| match mode {
                    FormattingMode::Heuristic => classify(&cell, None, None),
                    FormattingMode::Explicit(specs) => match specs.get(index) {
                        Some(spec) => classify(&cell, Some(spec.column_type), spec.currency),
                        None => classify(&cell, Some(ColumnType::Text), None),
                    },
                })
                .collect()
        })
        .collect();

    Table {
        headers,
        rows,
        source_id,
        title,
    }
}
