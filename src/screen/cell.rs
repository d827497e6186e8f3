//! Last-value broadcast cell for screen state.
//!
//! A [`StateCell`] always holds a current value: reads never block, new
//! subscribers immediately observe the latest published state, and every
//! subsequent publish is broadcast to all live subscriptions. The write
//! side is a separate [`StateWriter`] handed out once at construction, so
//! only the owning model can publish.

use std::sync::Arc;

use tokio::sync::watch;

/// Create a cell seeded with `initial`.
///
/// Returns the single write handle and the read handle. The read handle is
/// `Clone`; the write handle is cloneable too but stays inside the owning
/// model and its fetch task.
pub fn state_cell<T: Clone>(initial: T) -> (StateWriter<T>, StateCell<T>) {
    let (tx, rx) = watch::channel(initial);
    (StateWriter { tx: Arc::new(tx) }, StateCell { rx })
}

/// Write handle: publishes new values to all observers.
pub struct StateWriter<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for StateWriter<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone> StateWriter<T> {
    /// Replace the current value and notify subscribers.
    ///
    /// Succeeds even when no subscriber is listening; the value is retained
    /// for later readers.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// The value most recently published.
    pub fn current(&self) -> T {
        self.tx.borrow().clone()
    }
}

/// Read handle: synchronous access to the current value plus subscription.
#[derive(Clone)]
pub struct StateCell<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> StateCell<T> {
    /// The current value. Never blocks.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Subscribe to published values.
    ///
    /// The subscription replays the current value first, then yields each
    /// subsequent publish. Dropping the subscription unsubscribes.
    pub fn subscribe(&self) -> StateSubscription<T> {
        let mut rx = self.rx.clone();
        rx.mark_changed();
        StateSubscription { rx }
    }
}

/// A live subscription to a [`StateCell`].
pub struct StateSubscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> StateSubscription<T> {
    /// Await the next value.
    ///
    /// Returns `None` once the writer is gone and the last value has been
    /// observed. Intermediate values may be skipped if the writer outpaces
    /// this subscriber; the latest value is never skipped.
    pub async fn next(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
