//! Immutable view of the countdown published on every change

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CounterState;

/// Snapshot of the engine at one instant.
///
/// Snapshots are replaced wholesale on every tick and transition. The
/// `hours`/`minutes`/`seconds` split always sums to the remaining seconds
/// tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub state: CounterState,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// Duration the current countdown was started with, zero while idle.
    /// Kept after completion, where progress reads 0.0 because nothing remains.
    pub first_total_seconds: u64,
}

impl CounterSnapshot {
    /// Idle snapshot at 00:00:00
    pub fn idle() -> Self {
        Self::from_remaining(CounterState::Idle, 0, 0)
    }

    /// Build a snapshot by splitting the remaining seconds into h/m/s
    pub fn from_remaining(state: CounterState, remaining_seconds: u64, first_total_seconds: u64) -> Self {
        Self {
            state,
            hours: remaining_seconds / 3600,
            minutes: (remaining_seconds % 3600) / 60,
            seconds: remaining_seconds % 60,
            first_total_seconds,
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Fraction of the original duration still remaining, in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.first_total_seconds == 0 {
            return 0.0;
        }
        self.remaining_seconds() as f32 / self.first_total_seconds as f32
    }

    /// Zero-padded `HH:MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl Default for CounterSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

impl fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display(), self.state)
    }
}
