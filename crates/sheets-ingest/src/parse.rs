//! CSV response parsing.

use sheets_model::Table;

use crate::error::IngestError;

/// Parse an export response body into a table.
///
/// The first record becomes the headers, the rest become rows. The reader
/// is flexible: ragged records are kept, blank lines are skipped.
///
/// # Errors
///
/// Returns [`IngestError::EmptySpreadsheet`] when no records remain, or
/// [`IngestError::Parse`] when the body is not valid CSV.
pub fn parse_csv_body(body: &str, source_id: &str) -> Result<Table, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(ToString::to_string).collect());
    }

    if records.is_empty() {
        return Err(IngestError::EmptySpreadsheet);
    }

    let mut records = records.into_iter();
    let headers = records.next().unwrap_or_default();
    Ok(Table::new(headers, records.collect(), source_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_becomes_headers() {
        let table = parse_csv_body("A,B\n1,2\n3,4\n", "sheet-1").expect("parse");
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
        assert_eq!(table.source_id, "sheet-1");
    }

    #[test]
    fn ragged_records_are_kept() {
        let table = parse_csv_body("A,B,C\n1\n1,2,3,4\n", "sheet-1").expect("parse");
        assert_eq!(table.rows[0], vec!["1"]);
        assert_eq!(table.rows[1], vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn quoted_fields_with_delimiters() {
        let table = parse_csv_body("Nome,Cidade\n\"Silva, Maria\",Recife\n", "sheet-1")
            .expect("parse");
        assert_eq!(table.rows[0], vec!["Silva, Maria", "Recife"]);
    }

    #[test]
    fn empty_body_is_an_error() {
        assert!(matches!(
            parse_csv_body("", "sheet-1"),
            Err(IngestError::EmptySpreadsheet)
        ));
    }
}
