//! Platform layer
//!
//! Turns wall-clock time into fixed simulation ticks. Window, input polling
//! and rasterization belong to whatever frontend drives the session.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed frame time and return how many ticks are due
    ///
    /// At most `MAX_SUBSTEPS` ticks run per frame; time beyond that is
    /// dropped so a stalled frontend does not trigger a burst of catch-up.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_substeps {
            self.accumulator -= self.interval;
            due += 1;
        }
        if due == self.max_substeps && self.accumulator >= self.interval {
            log::warn!(
                "Dropping {:?} of simulation time after {} substeps",
                self.accumulator,
                due
            );
            self.accumulator = Duration::ZERO;
        }
        due
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }
}
