//! Observable value container.
//!
//! A thin wrapper over a `tokio::sync::watch` channel. The owner writes;
//! any number of subscribers read the latest value and are woken on every
//! change. Unsubscribing is dropping the receiver.

use tokio::sync::watch;

/// A value that notifies subscribers on every replacement.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    /// Create a container holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Read the current value without cloning it.
    ///
    /// The read lock is held while `f` runs; keep it short.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Replace the value wholesale and notify subscribers.
    ///
    /// Succeeds even when nobody is subscribed.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modify the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Subscribe to changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
