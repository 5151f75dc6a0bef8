use thiserror::Error;

/// Errors raised while assembling CSV output.
///
/// `EmptyHeaders` is the only hard failure of the conversion core; every
/// other stage degrades to best-effort pass-through instead of failing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// A table with no header columns cannot be serialized.
    #[error("cannot generate CSV: headers are missing")]
    EmptyHeaders,

    /// The underlying CSV writer failed.
    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),

    /// The serialized buffer was not valid UTF-8.
    #[error("CSV output was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
