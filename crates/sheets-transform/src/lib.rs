//! Cell value classification and locale normalization.
//!
//! This crate decides what a raw spreadsheet cell *is* (a date, a monetary
//! amount, a plain number, an e-mail, a phone number, or opaque text) and
//! renders it in the canonical target representation (pt-BR conventions,
//! `DD/MM/YYYY` dates, `R$ 1.234,56` amounts).
//!
//! - **classify**: dispatch on an explicit column type, or run the
//!   heuristic interpreter chain when no type was supplied
//! - **normalization**: the date, currency, and number rewrite rules
//!
//! Every function here is pure and total: unparseable input degrades to
//! pass-through of the original text, never to an error.

pub mod classify;
pub mod normalization;

pub use classify::classify;
pub use normalization::date::normalize_date;
pub use normalization::money::normalize_currency;
pub use normalization::numeric::normalize_number;
