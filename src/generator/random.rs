//! Injectable randomness for graph generation.

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the random decisions made while generating a graph.
///
/// Generation only ever asks two questions: "does an event with this
/// probability happen?" and "which id in this range?". Implement this trait to
/// script those answers.
pub trait RandomSource {
    /// Returns true with the given probability. Values outside `[0, 1]` are
    /// clamped.
    fn chance(&mut self, probability: f64) -> bool;

    /// Returns a uniformly chosen value from a non-empty range.
    fn pick(&mut self, range: RangeInclusive<usize>) -> usize;
}

/// Adapts a `rand` generator into a [`RandomSource`].
///
/// # Example
///
/// ```rust
/// use graphgen::generator::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(7);
/// let mut b = RngSource::seeded(7);
/// assert_eq!(a.pick(0..=1000), b.pick(0..=1000));
/// assert!(a.chance(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R = SmallRng> {
    rng: R,
}

impl RngSource<SmallRng> {
    /// Fixed-seed source; the same seed always yields the same graph.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the wall clock.
    pub fn time_seeded() -> Self {
        Self::seeded(wall_clock_seed())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(clamp_probability(probability))
    }

    fn pick(&mut self, range: RangeInclusive<usize>) -> usize {
        self.rng.gen_range(range)
    }
}

/// Derives a seed from the current time in nanoseconds.
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Clamps a probability into `[0, 1]`, mapping NaN to zero.
pub(crate) fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}
