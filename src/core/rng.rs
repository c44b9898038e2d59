//! Seedable randomness capability.
//!
//! The random tier (and the heuristic tier's fallback) draw from a `GameRng`
//! the caller owns and passes in. Nothing in the crate reaches for a global
//! generator, so a fixed seed replays the same games.
//!
//! ```
//! use rust_ttt::core::GameRng;
//!
//! let cells = [0usize, 4, 8];
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.choose(&cells), b.choose(&cells));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio step between fork seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic move-picking RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Seeded generator. Equal seeds give equal move choices.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Generator with an OS-provided seed.
    ///
    /// The seed is still recorded, so [`GameRng::seed`] can be logged to
    /// replay the game later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent generator for one seat of a match.
    ///
    /// The n-th fork of a seed is always the same, whatever was drawn from
    /// the parent in between.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Pick one cell (or any element) uniformly; `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
