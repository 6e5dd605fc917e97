//! services/api/src/adapters/rng.rs
//!
//! Concrete implementations of the `RandomSource` port.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use adboard_core::ports::RandomSource;

/// Uniform picks from the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Uniform picks from a seeded generator. Selection becomes reproducible
/// for a fixed seed, which the tests rely on.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, bound: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..bound)
    }
}

/// Builds the serving random source for a configured seed: seeded when one
/// is present, thread-local otherwise.
pub fn source_for_seed(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let picks_a: Vec<_> = (0..16).map(|_| a.pick(5)).collect();
        let picks_b: Vec<_> = (0..16).map(|_| b.pick(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn picks_stay_within_the_bound() {
        let source = SeededRandom::new(7);
        for _ in 0..64 {
            assert!(source.pick(3) < 3);
        }
        assert_eq!(ThreadRandom.pick(1), 0);
    }
}
