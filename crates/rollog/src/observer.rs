//! Observer hooks fired after sink operations.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::RwLock;

/// Hooks invoked synchronously after a sink operation completes.
///
/// Both methods default to no-ops so an observer can implement only the
/// notification it cares about.
pub trait LogObserver: Send + Sync {
    /// Called with the formatted text after a line reaches the console sink.
    fn on_line_written(&self, text: &str) {
        let _ = text;
    }

    /// Called with the rendered error block after an error write.
    fn on_exception_written(&self, text: &str) {
        let _ = text;
    }
}

/// Registry of observers with per-observer failure isolation.
///
/// A panicking observer is contained; it can never abort the write path of
/// the logger that invoked it.
#[derive(Default)]
pub struct ObserverSet {
    observers: RwLock<Vec<Arc<dyn LogObserver>>>,
}

impl ObserverSet {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer.
    pub fn register(&self, observer: Arc<dyn LogObserver>) {
        self.observers.write().push(observer);
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Returns true if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Notifies all observers of a written line.
    pub fn notify_line(&self, text: &str) {
        for observer in self.observers.read().iter() {
            let hook = AssertUnwindSafe(|| observer.on_line_written(text));
            if catch_unwind(hook).is_err() {
                tracing::warn!("log observer panicked in on_line_written");
            }
        }
    }

    /// Notifies all observers of a written error block.
    pub fn notify_exception(&self, text: &str) {
        for observer in self.observers.read().iter() {
            let hook = AssertUnwindSafe(|| observer.on_exception_written(text));
            if catch_unwind(hook).is_err() {
                tracing::warn!("log observer panicked in on_exception_written");
            }
        }
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("count", &self.len())
            .finish()
    }
}
