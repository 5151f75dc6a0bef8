//! Conversion core: column selection, cell formatting, and the pipeline
//! composing them with CSV assembly.
//!
//! The flow is `select` (filter + reorder columns) → `format` (normalize
//! every surviving cell) → `assemble` (serialize), driven by
//! [`convert`](pipeline::convert). Selection misses degrade silently and
//! classification never fails; the only hard error is a table with no
//! header columns, surfaced unmodified from the assembler.

pub mod format;
pub mod pipeline;
pub mod select;

pub use format::{format_table, FormattingMode};
pub use pipeline::{convert, Conversion, ConvertOptions};
pub use select::select_columns;
