//! Countdown engine
//!
//! The engine owns the remaining time and lifecycle state, drives the tick
//! task, and publishes every change to the notification and to listeners.

pub mod counter;
pub mod error;
pub mod observers;

pub use counter::{CounterEngine, EngineConfig, TickOutcome};
pub use error::EngineError;
pub use observers::{Listener, Observers, SubscriptionId};
