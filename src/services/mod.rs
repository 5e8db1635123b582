//! Platform resource module
//!
//! This module contains the notification and alarm handles the engine owns
//! while a countdown exists, and the provider that creates them.

pub mod alert;
pub mod notification;
#[cfg(test)]
pub mod recording;
pub mod resources;

// Re-export main types
pub use alert::{Alert, TerminalBell};
pub use notification::{LogNotification, Notification};
pub use resources::{ConsoleResources, ResourceProvider};
