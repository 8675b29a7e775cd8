//! Deterministic random number generation
//!
//! Every stochastic choice in the simulator (probabilities, uniform draws,
//! catalog picks, shuffles) goes through the [`RandomSource`] trait. The
//! production source is [`RngManager`] (xorshift64*); tests can plug in any
//! other implementation to script exact outcomes.

mod xorshift;

pub use xorshift::RngManager;

/// Source of uniform randomness in `[0.0, 1.0)`.
///
/// Implementors only provide [`next_f64`](RandomSource::next_f64); every other
/// draw used by the simulator is derived from it, so a scripted source fully
/// determines generation and update outcomes.
pub trait RandomSource {
    /// Next uniform value in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial: true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform float in `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Uniform integer in `[min, max]` (both inclusive).
    ///
    /// # Panics
    /// Panics if `min > max`.
    fn int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "min must not exceed max");
        let span = (max - min + 1) as f64;
        // Guard against next_f64() implementations returning exactly 1.0
        let offset = ((self.next_f64() * span).floor() as i64).min(max - min);
        min + offset
    }

    /// +1.0 or -1.0 with equal probability.
    fn sign(&mut self) -> f64 {
        if self.chance(0.5) {
            1.0
        } else {
            -1.0
        }
    }

    /// Uniformly chosen element of a non-empty slice.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        assert!(!items.is_empty(), "cannot pick from an empty slice");
        let idx = self.int_inclusive(0, items.len() as i64 - 1) as usize;
        &items[idx]
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.int_inclusive(0, i as i64) as usize;
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
