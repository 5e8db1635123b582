//! Factory for the platform resources owned by the engine

use std::time::Duration;

use super::{Alert, LogNotification, Notification, TerminalBell};

/// Creates the notification and alert handles for a countdown engine.
///
/// The engine asks for handles lazily on the first start after a stop, and
/// drops them on the next stop. Acquisition cannot fail; a platform that
/// cannot provide a resource should hand back a handle that only logs.
pub trait ResourceProvider: Send + Sync {
    fn notification(&self) -> Box<dyn Notification>;
    fn alert(&self) -> Box<dyn Alert>;
}

/// Resources backed by log lines and the terminal bell
#[derive(Debug, Clone)]
pub struct ConsoleResources {
    pub title: String,
    pub stop_hint: String,
    pub bell_period: Duration,
}

impl ConsoleResources {
    pub fn new(stop_hint: impl Into<String>) -> Self {
        Self {
            title: "Tick Tack is running".to_string(),
            stop_hint: stop_hint.into(),
            bell_period: Duration::from_secs(2),
        }
    }
}

impl ResourceProvider for ConsoleResources {
    fn notification(&self) -> Box<dyn Notification> {
        Box::new(LogNotification::new(self.title.clone(), self.stop_hint.clone()))
    }

    fn alert(&self) -> Box<dyn Alert> {
        Box::new(TerminalBell::new(self.bell_period))
    }
}
