//! Pagination types
//!
//! The cursor value and the per-response metadata it is advanced with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resume point in the two-dimensional pagination space
///
/// `window_start` is a calendar date, not a timestamp. `page` is 1-based.
/// A cursor is only ever mutated by [`WindowPaginator::advance`]; the request
/// builder and the driver treat it as read-only.
///
/// [`WindowPaginator::advance`]: super::WindowPaginator::advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCursor {
    /// First day of the current date window
    pub window_start: NaiveDate,
    /// Page number within the current window (1-based)
    pub page: u32,
}

impl WindowCursor {
    /// Create a cursor at the first page of the window starting at `start`
    pub fn new(start: NaiveDate) -> Self {
        Self {
            window_start: start,
            page: 1,
        }
    }
}

/// Pagination metadata extracted from one response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationMeta {
    /// Whether the envelope advertised a next page within the current window
    pub has_next: bool,
}

impl PaginationMeta {
    /// Metadata for an envelope with a next-page token
    pub fn with_next() -> Self {
        Self { has_next: true }
    }

    /// Metadata for an envelope without a next-page token
    pub fn exhausted() -> Self {
        Self { has_next: false }
    }
}
