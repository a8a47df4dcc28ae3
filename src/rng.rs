//! # RandomNumberGenerator
//!
//! A thin wrapper around the `rand` crate's `StdRng` exposing exactly the
//! draws the timetable search needs: bernoulli trials (mutation gating),
//! uniform slice choice (faculty/day/slot picks), and in-place shuffling
//! (the legacy mutation payload).
//!
//! ## Example
//!
//! ```rust
//! use evotable::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let day = rng.choose(&["Monday", "Tuesday"]).copied();
//! assert!(day.is_some());
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around `StdRng` providing the draw primitives used by the
/// population initializer, mutation operators, and evolution loop.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new generator with a specific seed.
    ///
    /// Useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `true` with probability `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in `[0, 1]` (same contract as `rand`).
    pub fn flip(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Picks a uniformly random element of `items`, or `None` if empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Picks a uniformly random index into a collection of length `len`,
    /// or `None` when `len` is zero.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// Shuffles `items` in place with a uniform random permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
