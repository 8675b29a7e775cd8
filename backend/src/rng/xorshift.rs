//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG with 64-bit state. Same seed → same sequence of
//! random numbers, which is what makes a seeded ward simulation replayable:
//! identical seed and config produce an identical roster and identical ticks.

use super::RandomSource;
use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use icu_risk_sim::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let score = rng.int_inclusive(10, 100);
/// assert!((10..=100).contains(&score));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is promoted to 1 (xorshift cannot leave the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Get current RNG state (for replay)
    ///
    /// # Example
    /// ```
    /// use icu_risk_sim::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// let rng2 = RngManager::new(rng.get_state());
    /// assert_eq!(rng.get_state(), rng2.get_state());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for RngManager {
    /// Random f64 in [0.0, 1.0) from the top 53 bits of the next output.
    fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}
