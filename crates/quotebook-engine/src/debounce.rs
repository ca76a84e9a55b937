//! Cancellable debounce timer.
//!
//! At most one task is pending. Arming again replaces the pending task and
//! pushes its deadline out; only the last armed payload is ever delivered.
//! Time is passed in by the caller, which keeps the timer deterministic and
//! free of any runtime.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

/// Single-slot debounce timer carrying a payload.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Creates an idle timer with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `payload` to fire `delay` after `now`.
    ///
    /// Returns the payload that was superseded, if any.
    pub fn arm(&mut self, payload: T, now: Instant) -> Option<T> {
        let previous = self.pending.replace(Pending {
            deadline: now + self.delay,
            payload,
        });
        previous.map(|p| p.payload)
    }

    /// Cancels the pending task, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Returns true if a task is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending task.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Fires the pending task if its deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    /// Fires the pending task immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}
