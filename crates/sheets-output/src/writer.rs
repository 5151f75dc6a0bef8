//! Table-to-CSV serialization.

use sheets_model::Table;
use tracing::debug;

use crate::error::OutputError;

/// Field separator used when the caller does not override it.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Serialize a table as CSV text.
///
/// Every header yields exactly one field per row: short rows are padded
/// with empty fields, extra cells beyond the header count are dropped. An
/// empty header string is rendered as a positional `Column N` label on the
/// header line only; data mapping stays positional.
///
/// # Errors
///
/// Returns [`OutputError::EmptyHeaders`] when the table has no header
/// columns. This is the single hard failure of the conversion core and
/// must reach the caller unmodified.
pub fn assemble(table: &Table, delimiter: Option<u8>) -> Result<String, OutputError> {
    if table.headers.is_empty() {
        return Err(OutputError::EmptyHeaders);
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.unwrap_or(DEFAULT_DELIMITER))
        .from_writer(Vec::new());

    let header_line: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            if header.is_empty() {
                format!("Column {}", index + 1)
            } else {
                header.clone()
            }
        })
        .collect();
    writer.write_record(&header_line)?;

    for row in &table.rows {
        let record: Vec<&str> = (0..table.headers.len())
            .map(|index| row.get(index).map_or("", String::as_str))
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| OutputError::Write(error.into_error().into()))?;
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "assembled CSV output"
    );
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(ToString::to_string).collect(),
            rows.iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
            "test",
        )
    }

    #[test]
    fn serializes_headers_and_rows() {
        let csv = assemble(
            &table(&["Nome", "Idade"], &[&["Maria", "30"], &["João", "25"]]),
            None,
        )
        .expect("assemble");
        assert_eq!(csv, "Nome,Idade\nMaria,30\nJoão,25\n");
    }

    #[test]
    fn empty_headers_are_a_hard_failure() {
        let result = assemble(&table(&[], &[&["a"]]), None);
        assert!(matches!(result, Err(OutputError::EmptyHeaders)));
    }

    #[test]
    fn blank_headers_get_positional_labels() {
        let csv = assemble(&table(&["", "B", ""], &[&["1", "2", "3"]]), None).expect("assemble");
        assert_eq!(csv, "Column 1,B,Column 3\n1,2,3\n");
    }

    #[test]
    fn ragged_rows_pad_and_drop() {
        let csv = assemble(
            &table(&["A", "B", "C"], &[&["1"], &["1", "2", "3", "4"]]),
            None,
        )
        .expect("assemble");
        assert_eq!(csv, "A,B,C\n1,,\n1,2,3\n");
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let csv = assemble(
            &table(&["Nome", "Nota"], &[&["Silva, Maria", "disse \"oi\""]]),
            None,
        )
        .expect("assemble");
        assert_eq!(csv, "Nome,Nota\n\"Silva, Maria\",\"disse \"\"oi\"\"\"\n");
    }

    #[test]
    fn delimiter_override() {
        let csv = assemble(&table(&["A", "B"], &[&["1", "2"]]), Some(b';')).expect("assemble");
        assert_eq!(csv, "A;B\n1;2\n");
    }
}
