//! Background tasks module
//!
//! This module contains the tasks the engine spawns while a countdown runs.

pub mod auto_stop;
pub mod countdown;

// Re-export main functions
pub use auto_stop::completion_watchdog;
pub use countdown::countdown_task;
