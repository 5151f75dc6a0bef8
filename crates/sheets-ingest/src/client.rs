//! Blocking HTTP client for the public CSV export endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use sheets_model::Table;
use tracing::debug;

use crate::error::IngestError;
use crate::parse::parse_csv_body;
use crate::url::{extract_spreadsheet_id, is_valid_sheets_url};

/// HTTP request timeout for the export endpoint.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Base of the public CSV export endpoint.
const EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// Client for fetching publicly shared spreadsheets.
pub struct SheetsClient {
    client: Client,
}

impl SheetsClient {
    /// Create a client with the standard timeout.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] when the underlying client cannot be
    /// built.
    pub fn new() -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| IngestError::Http(error.to_string()))?;
        Ok(Self { client })
    }

    fn export_url(spreadsheet_id: &str, gid: Option<&str>) -> String {
        format!(
            "{EXPORT_BASE}/{spreadsheet_id}/export?format=csv&gid={}",
            gid.unwrap_or("0")
        )
    }

    /// Fetch a spreadsheet by its sharing URL and parse it into a table.
    ///
    /// `gid` selects a sheet within the document; the first sheet is used
    /// when absent.
    ///
    /// # Errors
    ///
    /// - [`IngestError::InvalidUrl`] when the URL is not a spreadsheet URL
    /// - [`IngestError::AccessDenied`] on HTTP 403/404 (not publicly shared)
    /// - [`IngestError::Http`] on transport failures or other statuses
    /// - [`IngestError::EmptySpreadsheet`] when the export has no records
    pub fn fetch_spreadsheet(&self, url: &str, gid: Option<&str>) -> Result<Table, IngestError> {
        if !is_valid_sheets_url(url) {
            return Err(IngestError::InvalidUrl(url.to_string()));
        }
        let spreadsheet_id = extract_spreadsheet_id(url)?;
        let export_url = Self::export_url(spreadsheet_id, gid);
        debug!(%export_url, "fetching spreadsheet export");

        let response = self
            .client
            .get(&export_url)
            .send()
            .map_err(|error| IngestError::Http(error.to_string()))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::NOT_FOUND {
            return Err(IngestError::AccessDenied);
        }
        if !status.is_success() {
            return Err(IngestError::Http(format!("unexpected status {status}")));
        }

        let body = response
            .text()
            .map_err(|error| IngestError::Http(error.to_string()))?;
        if body.trim().is_empty() {
            return Err(IngestError::EmptySpreadsheet);
        }

        parse_csv_body(&body, spreadsheet_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_defaults_to_first_sheet() {
        assert_eq!(
            SheetsClient::export_url("abc123", None),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=0"
        );
        assert_eq!(
            SheetsClient::export_url("abc123", Some("42")),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=42"
        );
    }
}
