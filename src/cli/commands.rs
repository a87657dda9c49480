//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pepperjam reporting API connector CLI
#[derive(Parser, Debug)]
#[command(name = "pepperjam-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// State file (JSON)
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Inline state JSON
    #[arg(long, global = true)]
    pub state_json: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test connection to the reporting API
    Check,

    /// List available stream names
    Streams,

    /// Print stream schemas as JSON
    Discover,

    /// Extract records from streams
    Sync {
        /// Streams to sync (comma-separated, empty = all)
        #[arg(long)]
        streams: Option<String>,

        /// Output destination (file path, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum records per stream
        #[arg(long)]
        max_records: Option<usize>,

        /// Ignore persisted cursors and start from the configured start date
        #[arg(long)]
        full_refresh: bool,
    },
}
