//! Completion alarm

use std::{io::Write, time::Duration};

use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

/// Looping alarm sound played once a countdown completes.
///
/// Dropping the handle releases the sound.
pub trait Alert: Send {
    /// Start looping the alarm. Calling it while playing does nothing.
    fn play(&mut self);

    /// Stop the alarm. Calling it while silent does nothing.
    fn silence(&mut self);

    fn is_playing(&self) -> bool;
}

/// Alarm that rings the terminal bell on a fixed period
#[derive(Debug)]
pub struct TerminalBell {
    period: Duration,
    ringer: Option<JoinHandle<()>>,
}

impl TerminalBell {
    pub fn new(period: Duration) -> Self {
        Self { period, ringer: None }
    }
}

impl Alert for TerminalBell {
    fn play(&mut self) {
        if self.ringer.is_some() {
            return;
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Cannot ring the alarm outside of a runtime: {}", e);
                return;
            }
        };

        warn!("Countdown completed, ringing alarm");
        let period = self.period;
        self.ringer = Some(handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let mut stderr = std::io::stderr();
                if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
                    debug!("Failed to ring terminal bell: {}", e);
                }
            }
        }));
    }

    fn silence(&mut self) {
        if let Some(ringer) = self.ringer.take() {
            ringer.abort();
            debug!("Alarm silenced");
        }
    }

    fn is_playing(&self) -> bool {
        self.ringer.is_some()
    }
}

impl Drop for TerminalBell {
    fn drop(&mut self) {
        self.silence();
    }
}
