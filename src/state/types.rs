//! State types for tracking sync progress
//!
//! These types are serialized to JSON and persisted between runs.

use crate::pagination::WindowCursor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete state for a connector run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    /// Per-stream state
    #[serde(default)]
    pub streams: HashMap<String, StreamState>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get state for a stream
    pub fn get_stream(&self, stream: &str) -> Option<&StreamState> {
        self.streams.get(stream)
    }

    /// Get mutable state for a stream, creating if needed
    pub fn get_stream_mut(&mut self, stream: &str) -> &mut StreamState {
        self.streams.entry(stream.to_string()).or_default()
    }

    /// Get the resume cursor for a stream
    pub fn get_cursor(&self, stream: &str) -> Option<WindowCursor> {
        self.streams.get(stream)?.cursor
    }

    /// Set the resume cursor for a stream
    pub fn set_cursor(&mut self, stream: &str, cursor: WindowCursor) {
        self.get_stream_mut(stream).cursor = Some(cursor);
    }
}

/// State for a single stream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamState {
    /// Resume position: the next window/page to request
    #[serde(default)]
    pub cursor: Option<WindowCursor>,

    /// Whether the last run of this stream completed its traversal
    #[serde(default)]
    pub completed: bool,
}

impl StreamState {
    /// Create a new empty stream state
    pub fn new() -> Self {
        Self::default()
    }
}
