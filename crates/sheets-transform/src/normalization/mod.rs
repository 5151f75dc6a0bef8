//! Normalization rules for individual cell values.
//!
//! Each module exposes fallible rewrites returning `Option<String>`:
//! `Some` when the rule recognized the value, `None` when it did not.
//! Callers decide whether `None` degrades to pass-through.

pub mod date;
pub mod money;
pub mod numeric;
