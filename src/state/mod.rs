//! State management module
//!
//! This module contains the countdown model published by the engine and the
//! application state shared by the HTTP handlers.

pub mod app_state;
pub mod counter_state;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use counter_state::CounterState;
pub use snapshot::CounterSnapshot;
