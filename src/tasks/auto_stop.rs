//! Watchdog that stops a completed countdown nobody dismissed

use std::{sync::Weak, time::Duration};

use tokio::time::sleep;
use tracing::debug;

use crate::engine::CounterEngine;

/// Wait for `grace`, then stop the engine if it is still sitting in the
/// completed state of the same countdown.
pub async fn completion_watchdog(engine: Weak<CounterEngine>, generation: u64, grace: Duration) {
    debug!("Auto-stop armed for {}s", grace.as_secs());
    sleep(grace).await;

    let Some(engine) = engine.upgrade() else {
        return;
    };

    if !engine.auto_stop(generation) {
        debug!("Auto-stop skipped, countdown already handled");
    }
}
