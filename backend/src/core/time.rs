//! Simulated time for the ward
//!
//! The simulation advances in discrete ticks. Each tick moves simulated
//! wall-clock time forward by a fixed interval, so every timestamp the engine
//! stamps onto a patient is derived from the tick counter rather than the
//! host's clock.

use serde::{Deserialize, Serialize};

/// One minute in milliseconds
pub const MINUTE_MS: i64 = 60_000;
/// One hour in milliseconds
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
/// One day in milliseconds
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Tick counter mapped onto epoch milliseconds
///
/// # Example
/// ```
/// use icu_risk_sim::SimClock;
///
/// let mut clock = SimClock::new(1_000_000, 10_000);
/// assert_eq!(clock.now_ms(), 1_000_000);
///
/// clock.advance();
/// assert_eq!(clock.current_tick(), 1);
/// assert_eq!(clock.now_ms(), 1_010_000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    /// Ticks elapsed since the roster was seeded
    current_tick: usize,
    /// Epoch milliseconds at tick 0
    start_ms: i64,
    /// Milliseconds of simulated time per tick
    interval_ms: i64,
}

impl SimClock {
    /// Create a clock starting at `start_ms`
    ///
    /// # Panics
    /// Panics if `interval_ms` is not positive.
    pub fn new(start_ms: i64, interval_ms: i64) -> Self {
        assert!(interval_ms > 0, "interval_ms must be positive");
        Self {
            current_tick: 0,
            start_ms,
            interval_ms,
        }
    }

    /// Advance time by one tick
    pub fn advance(&mut self) {
        self.current_tick += 1;
    }

    /// Ticks elapsed since start
    pub fn current_tick(&self) -> usize {
        self.current_tick
    }

    /// Current simulated time in epoch milliseconds
    pub fn now_ms(&self) -> i64 {
        self.start_ms + self.current_tick as i64 * self.interval_ms
    }

    /// Milliseconds per tick
    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }
}
