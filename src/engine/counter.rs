//! Countdown state machine

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use super::{EngineError, Listener, Observers, SubscriptionId};
use crate::{
    services::{Alert, Notification, ResourceProvider},
    state::{CounterSnapshot, CounterState},
    tasks::countdown_task,
};

/// Timing knobs of the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Period between ticks. Slightly under a second to make up for the
    /// time spent publishing each tick.
    pub tick_period: Duration,
    /// How long a completed countdown keeps ringing before stopping itself
    pub auto_stop_after: Duration,
    /// Shortest countdown `start` accepts
    pub min_duration_seconds: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(970),
            auto_stop_after: Duration::from_secs(2 * 60),
            min_duration_seconds: 5,
        }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running with this many seconds left
    Continue(u64),
    /// Remaining time reached zero on this tick
    Completed,
    /// The tick belongs to a cancelled task and changed nothing
    Stale,
}

/// Mutable engine state, only touched under the engine lock
struct Inner {
    state: CounterState,
    remaining_seconds: u64,
    first_total_seconds: u64,
    /// Bumped on every cancel so a tick that already woke up can tell it
    /// no longer owns the counter.
    generation: u64,
    task: Option<JoinHandle<()>>,
    notification: Option<Box<dyn Notification>>,
    alert: Option<Box<dyn Alert>>,
}

impl Inner {
    fn new() -> Self {
        Self {
            state: CounterState::Idle,
            remaining_seconds: 0,
            first_total_seconds: 0,
            generation: 0,
            task: None,
            notification: None,
            alert: None,
        }
    }

    fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot::from_remaining(self.state, self.remaining_seconds, self.first_total_seconds)
    }

    fn cancel_task(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn acquire_resources(&mut self, provider: &dyn ResourceProvider) {
        if self.notification.is_none() {
            self.notification = Some(provider.notification());
        }
        if self.alert.is_none() {
            self.alert = Some(provider.alert());
        }
    }

    fn silence_alert(&mut self) {
        if let Some(alert) = self.alert.as_mut() {
            if alert.is_playing() {
                alert.silence();
            }
        }
    }
}

/// Countdown engine shared between the tick task and every caller.
///
/// Commands are synchronous and may be called from any thread, inside a
/// Tokio runtime or not; the tick task always runs on the runtime the engine
/// was created with. Listeners run while the engine lock is held, so a
/// listener must not call engine commands directly; spawn a task instead.
pub struct CounterEngine {
    config: EngineConfig,
    runtime: Handle,
    resources: Arc<dyn ResourceProvider>,
    inner: Mutex<Inner>,
    observers: Observers,
    snapshot_tx: watch::Sender<CounterSnapshot>,
    this: Weak<CounterEngine>,
}

impl CounterEngine {
    /// Create an engine ticking on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime; use `with_runtime`
    /// to pass a handle explicitly.
    pub fn new(config: EngineConfig, resources: Arc<dyn ResourceProvider>) -> Arc<Self> {
        Self::with_runtime(config, resources, Handle::current())
    }

    /// Create an engine whose tick task runs on `runtime`
    pub fn with_runtime(config: EngineConfig, resources: Arc<dyn ResourceProvider>, runtime: Handle) -> Arc<Self> {
        let (snapshot_tx, _) = watch::channel(CounterSnapshot::idle());

        Arc::new_cyclic(|this| Self {
            config,
            runtime,
            resources,
            inner: Mutex::new(Inner::new()),
            observers: Observers::new(),
            snapshot_tx,
            this: this.clone(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a countdown of `hours:minutes:seconds`.
    ///
    /// Fails without touching any state when the total is below the minimum.
    /// Starting while a countdown already exists returns the current snapshot
    /// unchanged.
    pub fn start(&self, hours: u64, minutes: u64, seconds: u64) -> Result<CounterSnapshot, EngineError> {
        let total = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);

        if total < self.config.min_duration_seconds {
            warn!("Rejected countdown of {}s, minimum is {}s", total, self.config.min_duration_seconds);
            return Err(EngineError::InvalidDuration {
                requested: total,
                minimum: self.config.min_duration_seconds,
            });
        }

        let mut inner = self.inner.lock();
        if !inner.state.is_idle() {
            debug!("Start ignored, countdown already {}", inner.state);
            return Ok(inner.snapshot());
        }

        info!("Starting countdown of {}s", total);
        inner.remaining_seconds = total;
        inner.first_total_seconds = total;
        inner.acquire_resources(self.resources.as_ref());
        self.spawn_ticker(&mut inner);

        Ok(self.publish(&mut inner))
    }

    /// Pause a running countdown. Does nothing in any other state.
    pub fn pause(&self) -> CounterSnapshot {
        let mut inner = self.inner.lock();
        if inner.state != CounterState::Running {
            debug!("Pause ignored while {}", inner.state);
            return inner.snapshot();
        }

        inner.cancel_task();
        inner.state = CounterState::Paused;
        info!("Countdown paused with {}s left", inner.remaining_seconds);
        self.publish(&mut inner)
    }

    /// Resume a paused countdown from where it stopped. Does nothing in any
    /// other state.
    pub fn resume(&self) -> CounterSnapshot {
        let mut inner = self.inner.lock();
        if inner.state != CounterState::Paused {
            debug!("Resume ignored while {}", inner.state);
            return inner.snapshot();
        }

        info!("Countdown resumed with {}s left", inner.remaining_seconds);
        self.spawn_ticker(&mut inner);
        self.publish(&mut inner)
    }

    /// Return to idle from any state, keeping the notification and alert
    /// handles for the next countdown.
    pub fn reset(&self) -> CounterSnapshot {
        let mut inner = self.inner.lock();
        info!("Resetting countdown from {}", inner.state);
        self.reset_locked(&mut inner)
    }

    /// Return to idle and release the notification and alert.
    pub fn stop(&self) -> CounterSnapshot {
        let mut inner = self.inner.lock();
        info!("Stopping countdown from {}", inner.state);
        self.stop_locked(&mut inner)
    }

    /// Publish the current snapshot again without changing anything
    pub fn broadcast(&self) -> CounterSnapshot {
        let mut inner = self.inner.lock();
        self.publish(&mut inner)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.inner.lock().snapshot()
    }

    /// Receiver that always holds the latest published snapshot
    pub fn watch(&self) -> watch::Receiver<CounterSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Register a listener called with every published snapshot
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CounterSnapshot) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Check if a tick task currently owns the counter
    pub fn is_ticking(&self) -> bool {
        let inner = self.inner.lock();
        inner.state == CounterState::Running && inner.task.is_some()
    }

    /// Advance the countdown by one second on behalf of the tick task
    /// spawned with `generation`.
    pub(crate) fn tick(&self, generation: u64) -> TickOutcome {
        let mut inner = self.inner.lock();
        if inner.generation != generation || inner.state != CounterState::Running {
            return TickOutcome::Stale;
        }

        inner.remaining_seconds = inner.remaining_seconds.saturating_sub(1);
        self.publish(&mut inner);

        if inner.remaining_seconds > 0 {
            return TickOutcome::Continue(inner.remaining_seconds);
        }

        inner.state = CounterState::Completed;
        if let Some(alert) = inner.alert.as_mut() {
            alert.play();
        }
        info!("Countdown of {}s completed", inner.first_total_seconds);
        self.publish(&mut inner);
        TickOutcome::Completed
    }

    /// Stop a completed countdown nobody reacted to. Returns false when a
    /// command already moved the engine on.
    pub(crate) fn auto_stop(&self, generation: u64) -> bool {
        let mut inner = self.inner.lock();
        if inner.generation != generation || inner.state != CounterState::Completed {
            return false;
        }

        info!(
            "No response {}s after completion, stopping",
            self.config.auto_stop_after.as_secs()
        );
        self.stop_locked(&mut inner);
        true
    }

    fn spawn_ticker(&self, inner: &mut Inner) {
        inner.cancel_task();

        let generation = inner.generation;
        let task = self.runtime.spawn(countdown_task(
            self.this.clone(),
            generation,
            self.config.tick_period,
            self.config.auto_stop_after,
        ));

        inner.task = Some(task);
        inner.state = CounterState::Running;
    }

    fn reset_locked(&self, inner: &mut Inner) -> CounterSnapshot {
        inner.cancel_task();
        inner.silence_alert();
        inner.state = CounterState::Idle;
        inner.remaining_seconds = 0;
        inner.first_total_seconds = 0;
        self.publish(inner)
    }

    fn stop_locked(&self, inner: &mut Inner) -> CounterSnapshot {
        let snapshot = self.reset_locked(inner);
        let notification = inner.notification.take();
        let alert = inner.alert.take();
        if notification.is_some() || alert.is_some() {
            debug!("Releasing notification and alert");
        }
        snapshot
    }

    /// Push the current snapshot to the notification, the listeners and the
    /// watch channel. Callers hold the engine lock, so publishes never
    /// interleave.
    fn publish(&self, inner: &mut Inner) -> CounterSnapshot {
        let snapshot = inner.snapshot();

        if let Some(notification) = inner.notification.as_mut() {
            if snapshot.state.is_idle() {
                notification.dismiss();
            } else {
                notification.update(&snapshot.display());
            }
        }

        self.observers.notify(&snapshot);
        self.snapshot_tx.send_replace(snapshot);
        snapshot
    }
}

impl Drop for CounterEngine {
    fn drop(&mut self) {
        self.inner.get_mut().cancel_task();
    }
}
