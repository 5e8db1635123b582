//! Engine error types

use thiserror::Error;

/// Errors reported synchronously by engine commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Requested countdown is shorter than the configured minimum
    #[error("Countdown of {requested}s is too short, minimum is {minimum}s")]
    InvalidDuration { requested: u64, minimum: u64 },
}
