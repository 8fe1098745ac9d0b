//! Command-line interface
//!
//! Argument parsing and the batch driver that iterates the configured
//! lists, exporting each one and continuing past per-list failures.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
