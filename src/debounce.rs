//! Debounced persistence trigger.
//!
//! Rapid repeated settings changes (for example a held brightness key) must
//! not each hit storage. Every [`request`](SaveDebouncer::request) cancels
//! the pending deadline and arms a new one, so a burst of requests collapses
//! into a single write once the strip of changes goes quiet. The caller
//! snapshots state when the debouncer fires, so the write reflects the state
//! at fire time, not at request time.

use embassy_time::{Duration, Instant};

/// Coalesces save requests into one delayed trigger.
#[derive(Debug)]
pub struct SaveDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl SaveDebouncer {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and arm a new one `delay` from `now`.
    pub fn request(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Report whether the armed deadline has elapsed.
    ///
    /// Fires at most once per armed window.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
