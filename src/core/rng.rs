//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deals
//! - **Forkable**: Each deal draws from its own branch of the session seed
//!
//! ```
//! use memory_maze::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deal_rng = rng.fork();
//!
//! let mut deck = vec![1, 2, 3, 4, 5, 6];
//! deal_rng.shuffle(&mut deck);
//!
//! // Same seed, same fork count, same order
//! let mut again = GameRng::new(42).fork();
//! let mut deck2 = vec![1, 2, 3, 4, 5, 6];
//! again.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for shuffling decks and tagging deals.
///
/// Uses ChaCha8 for speed while keeping a uniform, high quality stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random u64.
    pub fn gen_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
