//! Deterministic random number generation.
//!
//! Every shuffle in a game flows from one seed. Each deck takes its own
//! context stream (`for_context`), so the adventure deck's reshuffles do not
//! depend on how often the event deck was shuffled.
//!
//! ```
//! use round_table::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut adventure = rng.for_context("adventure");
//! let mut again = GameRng::new(42).for_context("adventure");
//!
//! assert_eq!(adventure.index_below(100), again.index_below(100));
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from system entropy, for unseeded games.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same seed and context always give the same stream. `FxHasher`
    /// output is stable across builds and platforms.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A uniform index in `0..upper`. `upper` must be non-zero.
    pub fn index_below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// Put a pile into a uniformly random order.
    pub fn shuffle<T>(&mut self, pile: &mut [T]) {
        pile.shuffle(&mut self.inner);
    }
}
