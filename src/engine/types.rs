//! Engine types
//!
//! Configuration, statistics, and per-stream outcomes for the sync engine.

use crate::error::Error;
use chrono::NaiveDateTime;

/// Configuration for a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncConfig {
    /// Maximum records to emit per stream (0 = unlimited)
    pub max_records: usize,
    /// Pagination end bound override; `None` captures wall-clock now per
    /// stream run
    pub end_bound: Option<NaiveDateTime>,
    /// Ignore persisted cursors and start every stream from the configured
    /// start date
    pub full_refresh: bool,
}

impl SyncConfig {
    /// Create a new sync config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max records per stream
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    /// Pin the pagination end bound (tests use this for determinism)
    #[must_use]
    pub fn with_end_bound(mut self, end_bound: NaiveDateTime) -> Self {
        self.end_bound = Some(end_bound);
        self
    }

    /// Ignore persisted cursors for this run
    #[must_use]
    pub fn with_full_refresh(mut self, full_refresh: bool) -> Self {
        self.full_refresh = full_refresh;
        self
    }
}

/// Statistics from a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Total records emitted
    pub records_synced: usize,
    /// Total pages fetched
    pub pages_fetched: usize,
    /// Total streams that completed
    pub streams_synced: usize,
    /// Streams that failed
    pub errors: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_synced += count;
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add a completed stream
    pub fn add_stream(&mut self) {
        self.streams_synced += 1;
    }

    /// Add a failed stream
    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Result of syncing one stream
#[derive(Debug)]
pub struct StreamOutcome {
    /// Stream name
    pub stream: String,
    /// Records emitted for this stream
    pub records: usize,
    /// Pages fetched for this stream
    pub pages: usize,
    /// The failure, if the stream run aborted
    pub error: Option<Error>,
}

impl StreamOutcome {
    /// Whether the stream run completed its traversal
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
