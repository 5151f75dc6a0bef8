//! CSV output generation.
//!
//! Serializes a [`Table`](sheets_model::Table) into delimited text and
//! derives a filesystem-safe filename from the document title. Quoting and
//! escaping are delegated to the `csv` crate writer.

mod error;
mod filename;
mod writer;

pub use error::OutputError;
pub use filename::derive_filename;
pub use writer::{assemble, DEFAULT_DELIMITER};
