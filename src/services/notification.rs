//! Ongoing notification showing the remaining time

use tracing::{debug, info};

/// Platform notification that stays visible while a countdown exists.
///
/// Dropping the handle releases the notification.
pub trait Notification: Send {
    /// Show the notification, or refresh its text if already shown
    fn update(&mut self, text: &str);

    /// Hide the notification while keeping the handle for later use
    fn dismiss(&mut self);
}

/// Notification rendered as log lines
#[derive(Debug)]
pub struct LogNotification {
    title: String,
    stop_hint: String,
    text: Option<String>,
}

impl LogNotification {
    pub fn new(title: impl Into<String>, stop_hint: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stop_hint: stop_hint.into(),
            text: None,
        }
    }

    /// Text currently shown, if the notification is visible
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Notification for LogNotification {
    fn update(&mut self, text: &str) {
        match self.text.as_deref() {
            None => info!(
                target: "ticktack::notification",
                "{}: {} ({})", self.title, text, self.stop_hint
            ),
            Some(current) if current == text => return,
            Some(_) => debug!(target: "ticktack::notification", "{}: {}", self.title, text),
        }
        self.text = Some(text.to_string());
    }

    fn dismiss(&mut self) {
        if self.text.take().is_some() {
            info!(target: "ticktack::notification", "{} dismissed", self.title);
        }
    }
}

impl Drop for LogNotification {
    fn drop(&mut self) {
        self.dismiss();
    }
}
