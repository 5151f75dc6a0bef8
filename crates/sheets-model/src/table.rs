use serde::{Deserialize, Serialize};

/// An in-memory spreadsheet: a header record plus data records.
///
/// Rows are positional against `headers` and may be ragged (shorter or
/// longer than the header record). Consumers index defensively; ragged data
/// is tolerated, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// First record of the source document. Entries may be empty strings.
    pub headers: Vec<String>,
    /// Remaining records, positionally aligned with `headers`.
    pub rows: Vec<Vec<String>>,
    /// Stable identifier of the source document (e.g. the spreadsheet id).
    pub source_id: String,
    /// Human-readable title, when the source exposes one.
    pub title: Option<String>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, source_id: impl Into<String>) -> Self {
        Self {
            headers,
            rows,
            source_id: source_id.into(),
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_round_trips_through_json() {
        let table = Table::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec!["1".to_string(), "2".to_string()]],
            "sheet-1",
        )
        .with_title("Example");

        let json = serde_json::to_string(&table).expect("serialize table");
        let round: Table = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round, table);
    }
}
