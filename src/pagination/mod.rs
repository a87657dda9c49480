//! Date-window pagination
//!
//! The reporting API paginates along two nested axes: a bounded date window
//! (at most 28 days per request, capped by the current date) and, within a
//! window, an opaque page token. Pages are exhausted before the window moves
//! forward; the traversal ends when the current window has no further page
//! and the window already reaches the moving end bound.

mod types;
mod windows;

pub use types::{PaginationMeta, WindowCursor};
pub use windows::{WindowPaginator, WINDOW_DAYS};
