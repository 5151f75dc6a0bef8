use thiserror::Error;

/// Errors raised while fetching and parsing a remote spreadsheet.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The URL is not a recognizable public spreadsheet URL.
    #[error("invalid spreadsheet URL: {0}")]
    InvalidUrl(String),

    /// The document exists but is not publicly accessible (HTTP 403/404).
    #[error("cannot access spreadsheet: make sure it is publicly shared")]
    AccessDenied,

    /// The export request failed at the HTTP level.
    #[error("failed to fetch spreadsheet: {0}")]
    Http(String),

    /// The export returned no usable records.
    #[error("spreadsheet is empty or could not be read")]
    EmptySpreadsheet,

    /// The response body was not parseable as CSV.
    #[error("failed to parse spreadsheet response: {0}")]
    Parse(#[from] csv::Error),
}
