//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::CounterSnapshot;

/// Body of POST /start
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartRequest {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub counter: CounterSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, counter: CounterSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            counter,
        }
    }

    /// Create a response reporting the engine's current state
    pub fn ok(message: String, counter: CounterSnapshot) -> Self {
        Self::new(counter.state.to_string(), message, counter)
    }

    /// Create an error response
    pub fn error(message: String, counter: CounterSnapshot) -> Self {
        Self::new("error".to_string(), message, counter)
    }
}

/// Status response with display helpers for a UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub counter: CounterSnapshot,
    /// True while a countdown is running or paused
    pub active: bool,
    pub display: String,
    pub progress: f32,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
