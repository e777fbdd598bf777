//! Deterministic random number generation for deals.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws
//! - **Unbiased**: Draws use a partial Fisher-Yates shuffle, so every pool
//!   element is equally likely to land in every result position
//!
//! ## Usage
//!
//! ```
//! use courtier::deal::DealRng;
//!
//! let mut rng = DealRng::new(42);
//! let pool = [10, 20, 30, 40, 50];
//!
//! let hand = rng.draw(&pool, 3);
//! assert_eq!(hand.len(), 3);
//!
//! // Asking for more than the pool holds returns the whole pool
//! assert_eq!(rng.draw(&pool, 99).len(), 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for randomized deals.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Seeded construction makes every deal reproducible in tests.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Draw `min(k, pool.len())` elements uniformly at random, without
    /// replacement.
    ///
    /// Partial Fisher-Yates over an index scratch vector: `k` swaps rather
    /// than a full shuffle, and unlike a comparator-based shuffle the result
    /// is distributed uniformly. Asking for more than the pool holds returns
    /// the whole pool (saturation, not an error).
    #[must_use]
    pub fn draw<T: Copy>(&mut self, pool: &[T], k: usize) -> Vec<T> {
        let take = k.min(pool.len());
        let mut indices: Vec<usize> = (0..pool.len()).collect();

        for i in 0..take {
            let j = self.gen_range_usize(i..indices.len());
            indices.swap(i, j);
        }

        indices[..take].iter().map(|&i| pool[i]).collect()
    }
}
