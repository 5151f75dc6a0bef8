//! Library surface of the CLI: column-argument parsing and logging setup.

pub mod columns;
pub mod logging;
