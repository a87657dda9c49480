//! State management and checkpointing
//!
//! Persists each stream's resume cursor between runs. The cursor for a
//! stream is only written after a page's records have been fully emitted,
//! so a resumed run re-requests at worst one already-seen window/page.

mod manager;
mod types;

pub use manager::StateManager;
pub use types::{State, StreamState};
