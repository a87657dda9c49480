//! CLI module
//!
//! Command-line interface for running the connector.
//!
//! # Commands
//!
//! - `check` - Test connection to the reporting API
//! - `streams` - List stream names
//! - `discover` - Print stream schemas as JSON
//! - `sync` - Extract records from streams

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
