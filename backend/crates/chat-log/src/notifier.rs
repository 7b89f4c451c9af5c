use crate::Signal;

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

/// Per-subscriber wake-up queue.
///
/// Repeated signals of one kind coalesce while pending; distinct kinds are
/// each delivered, in the order they were first raised. The consumer drains
/// the whole log on every `NewData`, so coalescing never loses entries.
#[derive(Debug, Default)]
pub struct Notifier {
    pending: Mutex<VecDeque<Signal>>,
    wake: Notify,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `signal` available to the waiting session.
    pub fn notify(&self, signal: Signal) {
        {
            let mut pending = self.pending();
            if pending.contains(&signal) {
                return;
            }
            pending.push_back(signal);
        }
        self.wake.notify_one();
    }

    /// Suspend until a signal is pending, then take the earliest one.
    pub async fn wait(&self) -> Signal {
        loop {
            let notified = self.wake.notified();
            if let Some(signal) = self.try_take() {
                return signal;
            }
            notified.await;
        }
    }

    /// Take the earliest pending signal without waiting.
    pub fn try_take(&self) -> Option<Signal> {
        self.pending().pop_front()
    }

    pub fn pending_count(&self) -> usize {
        self.pending().len()
    }

    // A panic while holding the queue cannot leave it half-updated.
    fn pending(&self) -> MutexGuard<'_, VecDeque<Signal>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
