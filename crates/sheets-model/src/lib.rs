//! Data model for spreadsheet-to-CSV conversion.
//!
//! All types here are request-scoped value objects: they are built when a
//! conversion request starts and dropped when it finishes. Nothing in this
//! crate holds state across requests.

pub mod column;
pub mod table;

pub use column::{ColumnRequest, ColumnSpec, ColumnType, CurrencyCode};
pub use table::Table;
