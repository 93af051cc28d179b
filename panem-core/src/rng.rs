//! Seedable uniform random source

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used when none is supplied
pub const DEFAULT_SEED: u64 = 2023;

/// Source of uniform integers in `[0, n)`
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. Returns 0 when `n == 0`.
    fn uniform(&mut self, n: usize) -> usize;
}

/// ChaCha-backed random source, reproducible from its seed
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}
