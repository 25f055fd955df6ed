//! In-flight operation tracking.
//!
//! Each store counts the operations it is running and derives its published
//! `loading` flag from that count, so overlapping calls cannot clear a flag
//! another call still depends on. The count only changes while the store's
//! watch channel is write-locked, which keeps it in step with the flag.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;

/// State snapshots that publish a loading flag.
pub trait Loadable {
    fn loading(&self) -> bool;
    fn set_loading(&mut self, loading: bool);
}

/// Counter of operations currently running against one store.
#[derive(Debug, Default)]
pub struct InFlight {
    count: AtomicUsize,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations currently running.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Register an operation and raise the loading flag.
    ///
    /// The returned guard lowers the flag once the last running operation
    /// finishes, including when the operation's future is dropped early.
    pub fn begin<'a, S: Loadable>(&'a self, tx: &'a watch::Sender<S>) -> LoadingGuard<'a, S> {
        tx.send_if_modified(|state| {
            self.count.fetch_add(1, Ordering::SeqCst);
            if state.loading() {
                false
            } else {
                state.set_loading(true);
                true
            }
        });
        LoadingGuard { in_flight: self, tx }
    }

    /// Re-derive the flag after a state replacement.
    pub fn sync<S: Loadable>(&self, tx: &watch::Sender<S>) {
        tx.send_if_modified(|state| {
            let loading = self.count() > 0;
            if state.loading() == loading {
                false
            } else {
                state.set_loading(loading);
                true
            }
        });
    }
}

/// Keeps one operation registered with an [`InFlight`] counter.
#[must_use = "the operation is unregistered as soon as the guard is dropped"]
pub struct LoadingGuard<'a, S: Loadable> {
    in_flight: &'a InFlight,
    tx: &'a watch::Sender<S>,
}

impl<S: Loadable> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        let in_flight = self.in_flight;
        self.tx.send_if_modified(|state| {
            let remaining = in_flight.count.fetch_sub(1, Ordering::SeqCst) - 1;
            if remaining == 0 && state.loading() {
                state.set_loading(false);
                true
            } else {
                false
            }
        });
    }
}
