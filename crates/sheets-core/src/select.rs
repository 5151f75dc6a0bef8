//! Column selection: filter and reorder a table by requested header names.

use sheets_model::{ColumnRequest, ColumnSpec, Table};
use tracing::debug;

/// Project a table onto the requested columns, in caller order.
///
/// Each request resolves to the *first* header whose value equals the
/// requested name exactly (case-sensitive). Unknown names are dropped
/// silently; a request where nothing resolves is treated as a no-op and
/// the table passes through unchanged, signalling heuristic formatting
/// downstream via the `None` spec list.
///
/// Rows are indexed defensively: a ragged row projects only the cells it
/// has, leaving absent positions as empty strings.
pub fn select_columns(table: Table, requested: &[ColumnRequest]) -> (Table, Option<Vec<ColumnSpec>>) {
    if requested.is_empty() {
        return (table, None);
    }

    let mut resolved: Vec<(usize, ColumnSpec)> = Vec::with_capacity(requested.len());
    for request in requested {
        let spec = request.clone().into_spec();
        match table.headers.iter().position(|header| *header == spec.name) {
            Some(index) => resolved.push((index, spec)),
            None => debug!(column = %spec.name, "requested column not found, dropping"),
        }
    }

    if resolved.is_empty() {
        debug!("no requested columns resolved, keeping table unfiltered");
        return (table, None);
    }

    let headers = resolved
        .iter()
        .map(|(index, _)| table.headers[*index].clone())
        .collect();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            resolved
                .iter()
                .map(|(index, _)| row.get(*index).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    let specs = resolved.into_iter().map(|(_, spec)| spec).collect();

    (
        Table {
            headers,
            rows,
            source_id: table.source_id,
            title: table.title,
        },
        Some(specs),
    )
}
