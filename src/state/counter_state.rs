//! Countdown lifecycle states

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a countdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterState {
    /// Nothing is counting. Also the state after a reset or stop.
    #[default]
    Idle,
    /// The tick task is decrementing the remaining time.
    Running,
    /// Counting is suspended and remaining time is kept.
    Paused,
    /// Remaining time reached zero and the alert is playing.
    Completed,
}

impl CounterState {
    /// Check if a countdown is in progress (running or paused)
    pub fn is_active(&self) -> bool {
        matches!(self, CounterState::Running | CounterState::Paused)
    }

    /// Check if nothing is counting
    pub fn is_idle(&self) -> bool {
        *self == CounterState::Idle
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CounterState::Idle => "idle",
            CounterState::Running => "running",
            CounterState::Paused => "paused",
            CounterState::Completed => "completed",
        }
    }
}

impl fmt::Display for CounterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
