//! Application state shared by the HTTP handlers

use std::{sync::Arc, time::Instant};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::info;

use crate::{
    engine::{CounterEngine, EngineConfig, EngineError},
    services::ResourceProvider,
    state::CounterSnapshot,
};

/// Last command received over the API
#[derive(Debug, Clone)]
pub struct LastAction {
    pub action: String,
    pub at: DateTime<Utc>,
}

/// Main application state wrapping the countdown engine
pub struct AppState {
    /// The countdown engine every handler drives
    pub engine: Arc<CounterEngine>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<LastAction>>,
}

impl AppState {
    /// Create a new AppState with an idle engine ticking on the current runtime
    pub fn new(port: u16, host: String, config: EngineConfig, resources: Arc<dyn ResourceProvider>) -> Self {
        Self {
            engine: CounterEngine::new(config, resources),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    /// Start a countdown and remember the action if it was accepted
    pub fn start(&self, hours: u64, minutes: u64, seconds: u64) -> Result<CounterSnapshot, EngineError> {
        let snapshot = self.engine.start(hours, minutes, seconds)?;
        self.record_action("start");
        Ok(snapshot)
    }

    pub fn pause(&self) -> CounterSnapshot {
        self.record_action("pause");
        self.engine.pause()
    }

    pub fn resume(&self) -> CounterSnapshot {
        self.record_action("resume");
        self.engine.resume()
    }

    pub fn reset(&self) -> CounterSnapshot {
        self.record_action("reset");
        self.engine.reset()
    }

    pub fn stop(&self) -> CounterSnapshot {
        self.record_action("stop");
        self.engine.stop()
    }

    pub fn broadcast(&self) -> CounterSnapshot {
        self.engine.broadcast()
    }

    fn record_action(&self, action: &str) {
        info!("Action received: {}", action);
        *self.last_action.lock() = Some(LastAction {
            action: action.to_string(),
            at: Utc::now(),
        });
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().as_ref() {
            Some(last) => (Some(last.action.clone()), Some(last.at)),
            None => (None, None),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
