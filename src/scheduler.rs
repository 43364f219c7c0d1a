//! Tick scheduling for the animation engine.
//!
//! Poll-driven: the host calls [`TickScheduler::poll`] on its own cadence
//! and the scheduler reports when a tick is due. At most one tick is
//! reported per poll, so tick execution can never overlap itself.

use embassy_time::{Duration, Instant};

/// Fixed animation tick period.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Periodic trigger for animation ticks.
///
/// [`start`](Self::start) arms the schedule with an immediately-due first
/// tick; [`stop`](Self::stop) disarms it. If polling falls behind by one or
/// more full periods, the backlog is skipped and the schedule re-anchors at
/// the current time instead of replaying missed ticks.
#[derive(Debug)]
pub struct TickScheduler {
    period: Duration,
    next: Option<Instant>,
}

impl TickScheduler {
    pub const fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// (Re)arm the schedule from `now`; the first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now);
    }

    /// Disarm the schedule.
    pub fn stop(&mut self) {
        self.next = None;
    }

    pub const fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Report whether a tick is due at `now` and advance the deadline.
    ///
    /// Returns `true` at most once per elapsed period; missed periods are
    /// coalesced into the single due tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.next = Some(next);

        true
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
