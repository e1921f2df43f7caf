//! Event sinks.

use std::sync::{Arc, Mutex, MutexGuard};

use tempora_core::models::TimelineEvent;
use tempora_core::traits::EventSink;

/// Collects every event it receives. Clones share the same buffer.
pub struct RecordingSink<R> {
    events: Arc<Mutex<Vec<TimelineEvent<R>>>>,
}

impl<R> RecordingSink<R> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drain and return everything received so far.
    pub fn take(&self) -> Vec<TimelineEvent<R>> {
        std::mem::take(&mut *self.lock())
    }

    // A panic in another holder cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<TimelineEvent<R>>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<R: Clone> RecordingSink<R> {
    pub fn events(&self) -> Vec<TimelineEvent<R>> {
        self.lock().clone()
    }
}

impl<R> Default for RecordingSink<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RecordingSink<R> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<R: Send> EventSink<R> for RecordingSink<R> {
    fn on_event(&self, event: TimelineEvent<R>) {
        self.lock().push(event);
    }
}
