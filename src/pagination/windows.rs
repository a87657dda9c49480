//! Window paginator implementation
//!
//! Owns the cursor transition rules and the translation of a cursor into
//! request query parameters.

use super::types::{PaginationMeta, WindowCursor};
use crate::config::DATE_FORMAT;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

/// Days covered by one date window
pub const WINDOW_DAYS: i64 = 28;

/// Paginator over date windows with in-window page tokens
///
/// The end bound is wall-clock "now", captured once per stream run and
/// injected here so every pagination decision is a pure function of its
/// inputs.
#[derive(Debug, Clone)]
pub struct WindowPaginator {
    window_days: i64,
    end_bound: NaiveDateTime,
}

impl WindowPaginator {
    /// Create a paginator bounded by the given instant
    pub fn new(end_bound: NaiveDateTime) -> Self {
        Self {
            window_days: WINDOW_DAYS,
            end_bound,
        }
    }

    /// Override the window size (tests only use this to shrink traversals)
    #[must_use]
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    /// The injected end bound
    pub fn end_bound(&self) -> NaiveDateTime {
        self.end_bound
    }

    /// Cursor for the first request of a stream run
    pub fn initialize(&self, start: NaiveDate) -> WindowCursor {
        WindowCursor::new(start)
    }

    /// Last day of the window addressed by `cursor`: `min(start + 28d, now)`
    pub fn window_end(&self, cursor: &WindowCursor) -> NaiveDate {
        let limit = cursor.window_start + Duration::days(self.window_days);
        if limit.and_time(NaiveTime::MIN) < self.end_bound {
            limit
        } else {
            self.end_bound.date()
        }
    }

    /// Termination predicate
    ///
    /// Another request is required while the current window still has a page
    /// token, or while the next window would start before the end bound.
    pub fn has_more(&self, cursor: &WindowCursor, meta: &PaginationMeta) -> bool {
        meta.has_next
            || (cursor.window_start + Duration::days(self.window_days)).and_time(NaiveTime::MIN)
                < self.end_bound
    }

    /// Compute the next cursor
    ///
    /// Pages take precedence over windows: a next-page token keeps the window
    /// fixed and bumps the page; only an exhausted window jumps forward by
    /// the window increment, back at page 1. Callers must check [`has_more`]
    /// first; advancing past the end of the traversal is a contract
    /// violation.
    ///
    /// [`has_more`]: Self::has_more
    pub fn advance(&self, cursor: &WindowCursor, meta: &PaginationMeta) -> WindowCursor {
        if meta.has_next {
            WindowCursor {
                window_start: cursor.window_start,
                page: cursor.page + 1,
            }
        } else {
            WindowCursor {
                window_start: cursor.window_start + Duration::days(self.window_days),
                page: 1,
            }
        }
    }

    /// Fused transition: `Some(next)` while the traversal continues
    pub fn step(&self, cursor: &WindowCursor, meta: &PaginationMeta) -> Option<WindowCursor> {
        if self.has_more(cursor, meta) {
            Some(self.advance(cursor, meta))
        } else {
            None
        }
    }

    /// Query parameters addressing the window and page of `cursor`
    ///
    /// Static parameters (format, apiKey, website) are configuration
    /// pass-through owned by the caller, not built here.
    pub fn query_params(&self, cursor: &WindowCursor) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert(
            "startDate".to_string(),
            cursor.window_start.format(DATE_FORMAT).to_string(),
        );
        params.insert(
            "endDate".to_string(),
            self.window_end(cursor).format(DATE_FORMAT).to_string(),
        );
        params.insert("page".to_string(), cursor.page.to_string());
        params
    }
}
