//! Tick Tack - A countdown timer engine with a persistent notification
//!
//! This library provides the countdown state machine, the observer bridge that
//! keeps the notification and listeners in sync with it, and an HTTP surface
//! to drive it.

pub mod api;
pub mod config;
pub mod engine;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use engine::{CounterEngine, EngineConfig, EngineError, SubscriptionId};
pub use state::{AppState, CounterSnapshot, CounterState};
pub use utils::signals::shutdown_signal;
