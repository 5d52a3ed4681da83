//! Monotonic time source for every timer calculation.
//!
//! Skill expiry is never scheduled; it is recomputed from `Clock::now` each
//! frame. Swapping in [`ManualClock`] makes the frame loop fully
//! deterministic in tests, since sleeping just moves virtual time forward.

use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Current monotonic timestamp.
    fn now(&self) -> Instant;

    /// Pause the caller for roughly `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            current: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.current.set(self.current.get() + duration);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.current.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
