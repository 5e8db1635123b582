//! Countdown tick task

use std::{sync::Weak, time::Duration};

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::completion_watchdog;
use crate::engine::{CounterEngine, TickOutcome};

/// Background task that ticks the engine once per `period` until the
/// countdown completes, then arms the completion watchdog.
///
/// The task owns the counter only while the engine's generation matches
/// `generation`; any command that cancels the task bumps it, so a tick that
/// raced with the cancel does nothing.
pub async fn countdown_task(
    engine: Weak<CounterEngine>,
    generation: u64,
    period: Duration,
    auto_stop_after: Duration,
) {
    debug!("Tick task {} started", generation);

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(engine) = engine.upgrade() else {
            debug!("Engine dropped, tick task {} exiting", generation);
            return;
        };

        match engine.tick(generation) {
            TickOutcome::Continue(remaining) => {
                debug!("Tick: {}s remaining", remaining);
            }
            TickOutcome::Completed => break,
            TickOutcome::Stale => {
                debug!("Tick task {} superseded", generation);
                return;
            }
        }
    }

    completion_watchdog(engine, generation, auto_stop_after).await;
}
