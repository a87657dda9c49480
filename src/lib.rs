//! # Pepperjam Connector
//!
//! Incremental extractor for the Pepperjam publisher reporting API.
//!
//! The API paginates every report along two nested axes: a bounded date
//! window (at most 28 days per request, capped by the current date) and,
//! within a window, an opaque page token. The extraction engine walks that
//! space with a resumable `{window start, page}` cursor, normalizes each
//! record's numeric fields, and emits records one at a time to a sink.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pepperjam_connector::config::ConnectorConfig;
//! use pepperjam_connector::engine::SyncEngine;
//! use pepperjam_connector::http::HttpClient;
//! use pepperjam_connector::sink::JsonlSink;
//! use pepperjam_connector::state::StateManager;
//! use pepperjam_connector::streams;
//!
//! #[tokio::main]
//! async fn main() -> pepperjam_connector::Result<()> {
//!     let connector = ConnectorConfig::from_file("config.json")?;
//!     let state = StateManager::from_file("state.json")?;
//!     let mut engine = SyncEngine::new(HttpClient::new(), state);
//!     let mut sink = JsonlSink::new(std::io::stdout());
//!
//!     let outcomes = engine.sync_all(&streams::all(), &connector, &mut sink).await;
//!     for outcome in outcomes {
//!         // Inspect per-stream results
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Engine                             │
//! │  request → decode → normalize each → emit each → advance    │
//! └─────────────────────────────────────────────────────────────┘
//!                │
//! ┌──────────┬───┴────────┬────────────┬───────────┬───────────┐
//! │   HTTP   │ Pagination │   Decode   │ Normalize │   Sink    │
//! ├──────────┼────────────┼────────────┼───────────┼───────────┤
//! │ Retry    │ Date window│ data array │ int/float │ JSONL     │
//! │ Backoff  │ Page token │ meta block │ null      │ schema/   │
//! │ Rate lim │ End bound  │            │           │ record/   │
//! │          │            │            │           │ state     │
//! └──────────┴────────────┴────────────┴───────────┴───────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connector configuration
pub mod config;

/// HTTP client with retry and rate limiting
pub mod http;

/// Date-window pagination (the extraction cursor engine)
pub mod pagination;

/// Report envelope decoding
pub mod decode;

/// Numeric field normalization
pub mod normalize;

/// Stream schema declarations
pub mod schema;

/// Built-in stream definitions
pub mod streams;

/// State management and checkpointing
pub mod state;

/// Record output
pub mod sink;

/// Main execution engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
