//! Millisecond clocks for the spawn schedule

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond source
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real time since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Deterministic clock: every reading moves time forward by `step_ms`
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    step_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64, step_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
            step_ms,
        }
    }

    /// Jump forward without taking a reading
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step_ms);
        now
    }
}
