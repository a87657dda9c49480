//! Execution engine
//!
//! Drives one stream end-to-end: build parameters from the cursor, issue one
//! request, decode the envelope, normalize and emit every record, then decide
//! on the same response's metadata whether to advance the cursor and loop.
//! The cursor is persisted only after a page's records have been fully
//! emitted, so an aborted run resumes by re-requesting at worst one
//! already-seen window/page.

mod types;

pub use types::{StreamOutcome, SyncConfig, SyncStats};

use crate::config::{ConnectorConfig, DATE_FORMAT};
use crate::decode::ReportDecoder;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::normalize::normalize_record;
use crate::pagination::WindowPaginator;
use crate::sink::RecordSink;
use crate::state::StateManager;
use crate::streams::StreamDescriptor;
use chrono::Utc;
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sync engine orchestrating the extraction loop
pub struct SyncEngine {
    client: HttpClient,
    state: StateManager,
    decoder: ReportDecoder,
    config: SyncConfig,
    stats: SyncStats,
}

impl SyncEngine {
    /// Create a new sync engine
    pub fn new(client: HttpClient, state: StateManager) -> Self {
        Self {
            client,
            state,
            decoder: ReportDecoder::new(),
            config: SyncConfig::default(),
            stats: SyncStats::default(),
        }
    }

    /// Set sync configuration
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the state manager
    pub fn state(&self) -> &StateManager {
        &self.state
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Sync every given stream sequentially
    ///
    /// Stream failures are independent: a failed stream aborts its own run
    /// and the remaining streams still execute. The caller turns any failed
    /// outcome into a non-zero exit.
    pub async fn sync_all(
        &mut self,
        streams: &[StreamDescriptor],
        connector: &ConnectorConfig,
        sink: &mut dyn RecordSink,
    ) -> Vec<StreamOutcome> {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(streams.len());

        for stream in streams {
            let before_records = self.stats.records_synced;
            let before_pages = self.stats.pages_fetched;

            let result = self.sync_stream(stream, connector, sink).await;
            let records = self.stats.records_synced - before_records;
            let pages = self.stats.pages_fetched - before_pages;

            match result {
                Ok(()) => {
                    self.stats.add_stream();
                    info!(stream = stream.name, records, pages, "stream completed");
                    outcomes.push(StreamOutcome {
                        stream: stream.name.to_string(),
                        records,
                        pages,
                        error: None,
                    });
                }
                Err(e) => {
                    self.stats.add_error();
                    warn!(stream = stream.name, error = %e, "stream failed");
                    outcomes.push(StreamOutcome {
                        stream: stream.name.to_string(),
                        records,
                        pages,
                        error: Some(e),
                    });
                }
            }
        }

        self.stats.set_duration(start.elapsed().as_millis() as u64);
        outcomes
    }

    /// Sync a single stream
    pub async fn sync_stream(
        &mut self,
        stream: &StreamDescriptor,
        connector: &ConnectorConfig,
        sink: &mut dyn RecordSink,
    ) -> Result<()> {
        // The end bound is captured once per stream run; every pagination
        // decision below is a pure function of it.
        let end_bound = self
            .config
            .end_bound
            .unwrap_or_else(|| Utc::now().naive_utc());
        let paginator = WindowPaginator::new(end_bound);

        let resume_cursor = if self.config.full_refresh {
            None
        } else {
            self.state.get_cursor(stream.name).await
        };
        let mut cursor = match resume_cursor {
            Some(cursor) => {
                info!(
                    stream = stream.name,
                    window_start = %cursor.window_start,
                    page = cursor.page,
                    "resuming from persisted cursor"
                );
                cursor
            }
            None => paginator.initialize(connector.parsed_start_date()?),
        };

        sink.write_schema(stream.name, &stream.schema.to_json())?;

        let url = format!("{}{}", connector.report_base(), stream.path);
        let mut emitted = 0usize;

        loop {
            let request = self.build_request(connector, &paginator, &cursor);
            let response = self.client.get_with_config(&url, request).await?;
            let body = response
                .text()
                .await
                .map_err(|e| Error::decode(format!("failed to read response body: {e}")))?;

            let page = self.decoder.decode(&body)?;
            self.stats.add_page();
            debug!(
                stream = stream.name,
                window_start = %cursor.window_start,
                page = cursor.page,
                records = page.records.len(),
                has_next = page.meta.has_next,
                "page fetched"
            );

            for mut record in page.records {
                normalize_record(stream.name, &mut record)?;
                sink.write_record(stream.name, &record)?;
                emitted += 1;
                self.stats.add_records(1);

                if self.config.max_records > 0 && emitted >= self.config.max_records {
                    info!(
                        stream = stream.name,
                        emitted, "record limit reached, stopping stream early"
                    );
                    sink.flush()?;
                    return Ok(());
                }
            }

            if !paginator.has_more(&cursor, &page.meta) {
                break;
            }
            cursor = paginator.advance(&cursor, &page.meta);

            // Page fully emitted: the new cursor is a safe resume point.
            self.state.set_cursor(stream.name, cursor).await?;
            sink.write_state(&json!({
                "stream": stream.name,
                "cursor": cursor,
            }))?;
        }

        self.state.mark_completed(stream.name).await?;
        sink.write_state(&json!({
            "stream": stream.name,
            "completed": true,
        }))?;
        sink.flush()?;

        Ok(())
    }

    /// Validate connectivity with a single cheap request
    ///
    /// Requests page 1 of the transactions report for the current day and
    /// decodes the envelope; any transport or envelope failure surfaces as a
    /// connection-check error.
    pub async fn check_connection(&self, connector: &ConnectorConfig) -> Result<()> {
        let today = self
            .config
            .end_bound
            .unwrap_or_else(|| Utc::now().naive_utc())
            .date()
            .format(DATE_FORMAT)
            .to_string();

        let stream = crate::streams::transactions();
        let url = format!("{}{}", connector.report_base(), stream.path);
        let request = self
            .static_params(connector)
            .query("startDate", &today)
            .query("endDate", &today)
            .query("page", "1");

        let outcome: Result<()> = async {
            let response = self.client.get_with_config(&url, request).await?;
            let body = response
                .text()
                .await
                .map_err(|e| Error::decode(format!("failed to read response body: {e}")))?;
            self.decoder.decode(&body)?;
            Ok(())
        }
        .await;

        outcome.map_err(|e| Error::ConnectionCheck {
            message: e.to_string(),
        })
    }

    /// Request config with the window/page parameters for `cursor`
    fn build_request(
        &self,
        connector: &ConnectorConfig,
        paginator: &WindowPaginator,
        cursor: &crate::pagination::WindowCursor,
    ) -> RequestConfig {
        let mut request = self.static_params(connector);
        for (key, value) in paginator.query_params(cursor) {
            request = request.query(key, value);
        }
        request
    }

    /// Static pass-through parameters owned by configuration
    fn static_params(&self, connector: &ConnectorConfig) -> RequestConfig {
        let mut request = RequestConfig::new()
            .query("format", "json")
            .query("apiKey", &connector.auth_token)
            .query("website", "all");
        if let Some(user_agent) = &connector.user_agent {
            request = request.header("User-Agent", user_agent);
        }
        request
    }
}
