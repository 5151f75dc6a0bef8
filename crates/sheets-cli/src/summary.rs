//! Terminal summary and preview tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use sheets_model::Table as SheetTable;

use crate::commands::ConvertSummary;

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn print_convert_summary(summary: &ConvertSummary) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("File"), header_cell("Rows"), header_cell("Bytes")]);
    let path = summary
        .path
        .as_ref()
        .map_or_else(|| summary.filename.clone(), |p| p.display().to_string());
    table.add_row(vec![
        Cell::new(path),
        Cell::new(summary.data_rows).set_alignment(CellAlignment::Right),
        Cell::new(summary.bytes).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}

/// Print headers plus the first `rows` data rows of a fetched table.
pub fn print_preview(sheet: &SheetTable, rows: usize) {
    println!("Source: {}", sheet.source_id);
    if let Some(title) = &sheet.title {
        println!("Title: {title}");
    }

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(sheet.headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    for row in sheet.rows.iter().take(rows) {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    println!("{table}");

    let remaining = sheet.rows.len().saturating_sub(rows);
    if remaining > 0 {
        println!("... and {remaining} more rows");
    }
}
