//! Gap placement strategies
//!
//! Obstacles ask a `GapSampler` where their gap starts. Live sessions use a
//! seeded PCG stream; tests and replays can script exact placements.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of gap-top positions
pub trait GapSampler {
    /// Return a gap top inside `range`
    fn sample(&mut self, range: RangeInclusive<i32>) -> i32;
}

/// Uniform sampling from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<Pcg32> {
    /// Deterministic sampler for a run seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GapSampler for RngSampler<R> {
    fn sample(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.rng.random_range(range)
    }
}

/// Scripted gap tops, cycled in order
#[derive(Debug, Clone)]
pub struct FixedGaps {
    tops: Vec<i32>,
    next: usize,
}

impl FixedGaps {
    /// Cycle through `tops` in order
    ///
    /// # Panics
    ///
    /// Panics if `tops` is empty.
    pub fn new(tops: Vec<i32>) -> Self {
        assert!(!tops.is_empty(), "FixedGaps needs at least one gap top");
        Self { tops, next: 0 }
    }

    /// Every gap at the same height
    pub fn constant(top: i32) -> Self {
        Self::new(vec![top])
    }
}

impl GapSampler for FixedGaps {
    fn sample(&mut self, _range: RangeInclusive<i32>) -> i32 {
        let top = self.tops[self.next];
        self.next = (self.next + 1) % self.tops.len();
        top
    }
}

impl<S: GapSampler + ?Sized> GapSampler for &mut S {
    fn sample(&mut self, range: RangeInclusive<i32>) -> i32 {
        (**self).sample(range)
    }
}

impl<S: GapSampler + ?Sized> GapSampler for Box<S> {
    fn sample(&mut self, range: RangeInclusive<i32>) -> i32 {
        (**self).sample(range)
    }
}
