//! Resource provider that records every call, for tests

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Alert, Notification, ResourceProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEvent {
    NotificationCreated,
    NotificationUpdated(String),
    NotificationDismissed,
    NotificationReleased,
    AlertCreated,
    AlertPlayed,
    AlertSilenced,
    AlertReleased,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingResources {
    events: Arc<Mutex<Vec<ResourceEvent>>>,
    playing: Arc<Mutex<bool>>,
}

impl RecordingResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResourceEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, event: &ResourceEvent) -> usize {
        self.events.lock().iter().filter(|e| *e == event).count()
    }

    /// Last text pushed to the notification
    pub fn last_text(&self) -> Option<String> {
        self.events.lock().iter().rev().find_map(|e| match e {
            ResourceEvent::NotificationUpdated(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn alert_playing(&self) -> bool {
        *self.playing.lock()
    }

    fn record(&self, event: ResourceEvent) {
        self.events.lock().push(event);
    }
}

impl ResourceProvider for RecordingResources {
    fn notification(&self) -> Box<dyn Notification> {
        self.record(ResourceEvent::NotificationCreated);
        Box::new(RecordingNotification { recorder: self.clone() })
    }

    fn alert(&self) -> Box<dyn Alert> {
        self.record(ResourceEvent::AlertCreated);
        Box::new(RecordingAlert { recorder: self.clone() })
    }
}

struct RecordingNotification {
    recorder: RecordingResources,
}

impl Notification for RecordingNotification {
    fn update(&mut self, text: &str) {
        self.recorder.record(ResourceEvent::NotificationUpdated(text.to_string()));
    }

    fn dismiss(&mut self) {
        self.recorder.record(ResourceEvent::NotificationDismissed);
    }
}

impl Drop for RecordingNotification {
    fn drop(&mut self) {
        self.recorder.record(ResourceEvent::NotificationReleased);
    }
}

struct RecordingAlert {
    recorder: RecordingResources,
}

impl Alert for RecordingAlert {
    fn play(&mut self) {
        *self.recorder.playing.lock() = true;
        self.recorder.record(ResourceEvent::AlertPlayed);
    }

    fn silence(&mut self) {
        *self.recorder.playing.lock() = false;
        self.recorder.record(ResourceEvent::AlertSilenced);
    }

    fn is_playing(&self) -> bool {
        self.recorder.alert_playing()
    }
}

impl Drop for RecordingAlert {
    fn drop(&mut self) {
        *self.recorder.playing.lock() = false;
        self.recorder.record(ResourceEvent::AlertReleased);
    }
}
