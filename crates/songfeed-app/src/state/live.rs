//! Observable single-writer state cell.

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

/// A value with one owner that writes it and any number of observers.
///
/// Every [`set`](Self::set) is delivered to every live observer, in order;
/// nothing is coalesced, so an observer that drains late still sees each
/// intermediate state.
pub struct LiveState<T> {
    value: Option<T>,
    observers: Vec<Sender<T>>,
}

impl<T: Clone> LiveState<T> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            value: None,
            observers: Vec::new(),
        }
    }

    /// Current value, if one has been set.
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replace the value and notify observers.
    pub fn set(&mut self, value: T) {
        self.observers
            .retain(|observer| observer.send(value.clone()).is_ok());
        self.value = Some(value);
    }

    /// Register a new observer.
    ///
    /// The observer first receives the current value (if any), then every
    /// later update.
    pub fn observe(&mut self) -> Observer<T> {
        let (tx, rx) = unbounded();
        if let Some(value) = &self.value {
            // Receiver is alive; the send cannot fail.
            let _ = tx.send(value.clone());
        }
        self.observers.push(tx);
        Observer { rx }
    }

    /// Number of observers still listening.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Clone> Default for LiveState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only handle onto a [`LiveState`].
pub struct Observer<T> {
    rx: Receiver<T>,
}

impl<T> Observer<T> {
    /// Take the next pending update without waiting.
    pub fn try_next(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Take every pending update, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next update.
    ///
    /// Returns `None` on timeout or once the owning cell is gone and every
    /// pending update has been taken.
    pub fn next_timeout(&self, timeout: Duration) -> Option<T> {
        match self.rx.recv_timeout(timeout) {
            Ok(value) => Some(value),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
