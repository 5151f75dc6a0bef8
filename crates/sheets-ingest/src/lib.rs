//! Remote spreadsheet fetching and CSV ingestion.
//!
//! Fetches a publicly shared Google Sheets document through its CSV export
//! endpoint and parses the response into a [`Table`](sheets_model::Table).
//! Ragged records are kept as-is; downstream components index defensively.

mod client;
mod error;
mod parse;
mod url;

pub use client::{SheetsClient, REQUEST_TIMEOUT};
pub use error::IngestError;
pub use parse::parse_csv_body;
pub use url::{extract_spreadsheet_id, is_valid_sheets_url};
