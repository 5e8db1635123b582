//! Listener registry fanned out on every published snapshot

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;

use crate::state::CounterSnapshot;

/// Callback invoked with every published snapshot
pub type Listener = Arc<dyn Fn(&CounterSnapshot) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Thread-safe registry of snapshot listeners
#[derive(Default)]
pub struct Observers {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, listener));
        id
    }

    /// Remove a listener, returning false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every listener with the same snapshot.
    ///
    /// The registry lock is released before callbacks run, so a listener may
    /// subscribe or unsubscribe from inside its callback.
    pub fn notify(&self, snapshot: &CounterSnapshot) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CounterState;

    #[test]
    fn notifies_every_subscriber() {
        let observers = Observers::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = Arc::clone(&seen);
            observers.subscribe(Arc::new(move |snapshot: &CounterSnapshot| {
                seen.lock().push((tag, snapshot.remaining_seconds()));
            }));
        }

        observers.notify(&CounterSnapshot::from_remaining(CounterState::Running, 42, 60));

        let mut seen = seen.lock().clone();
        seen.sort();
        assert_eq!(seen, vec![("a", 42), ("b", 42)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let observers = Observers::new();
        let calls = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&calls);
        let id = observers.subscribe(Arc::new(move |_: &CounterSnapshot| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        observers.notify(&CounterSnapshot::idle());
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&CounterSnapshot::idle());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(observers.is_empty());
    }

    #[test]
    fn listener_can_unsubscribe_itself() {
        let observers = Arc::new(Observers::new());
        let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

        let registry = Arc::clone(&observers);
        let own_id = Arc::clone(&slot);
        let id = observers.subscribe(Arc::new(move |_: &CounterSnapshot| {
            if let Some(id) = own_id.lock().take() {
                registry.unsubscribe(id);
            }
        }));
        *slot.lock() = Some(id);

        observers.notify(&CounterSnapshot::idle());
        assert!(observers.is_empty());
    }
}
