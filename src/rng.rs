//! Injectable randomness.
//!
//! Every sampling function in the crate takes a `RandomSource` instead of
//! reaching for a global generator, so tests can script or seed the draws.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::{StdRng, ThreadRng};
use rand::SeedableRng;

pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_f64() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Per-thread generator; never shared between threads.
pub struct ThreadRandom(ThreadRng);

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        StandardUniform.sample(&mut self.0)
    }
}

/// Reproducible generator for `--seed` runs and tests.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        StandardUniform.sample(&mut self.0)
    }
}
