//! CLI module
//!
//! Command-line interface for running an export.
//!
//! Flags follow the single-dash style (`-server`, `-rows=10`, `-k`); the
//! double-dash form works as well.

mod commands;
mod runner;

pub use commands::{normalize_args, Cli};
pub use runner::{RunOutcome, Runner};
