//! Entropy abstraction for the flicker effects.
//!
//! The engine never touches a process-wide random source. Callers inject a
//! generator at construction time, so flicker frames are reproducible under a
//! fixed seed.

use rand::{Rng, RngCore};

/// Trait for abstracting uniform random draws.
pub trait RandomSource {
    /// Returns a uniformly distributed value in the inclusive range `[low, high]`.
    fn random_in_range(&mut self, low: u8, high: u8) -> u8;
}

/// Any `rand` generator works as a random source.
impl<R: RngCore> RandomSource for R {
    fn random_in_range(&mut self, low: u8, high: u8) -> u8 {
        self.gen_range(low..=high)
    }
}
