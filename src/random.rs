//! Random sources used by the shuffle.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::RandomError;

/// A source of uniformly distributed integers.
///
/// Implementations must return a value in `0..=bound`. The shuffle rejects
/// anything outside that range with [`RandomError::OutOfRange`].
pub trait RandomSource {
    /// Returns an integer uniformly distributed in `0..=bound`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Unavailable`] if no value can be produced.
    fn uniform(&mut self, bound: u32) -> Result<u32, RandomError>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, bound: u32) -> Result<u32, RandomError> {
        (**self).uniform(bound)
    }
}

/// A seedable ChaCha8 random source.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a random source from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a random source seeded from the wall clock.
    #[must_use]
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self::new(seed)
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, bound: u32) -> Result<u32, RandomError> {
        Ok(self.rng.random_range(0..=bound))
    }
}
