//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! solver run. Every stochastic operation (seeding, parent selection, crossover
//! cut points, mutation) takes it as an explicit `&mut` handle, so a run built
//! from a fixed seed is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use freightga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let draws = rng.fetch_uniform(0.0, 1.0, 5);
//!
//! for number in draws {
//!     assert!((0.0..1.0).contains(&number));
//! }
//! ```
//!
//! ## Parallel workers
//!
//! Workers never share a generator. Instead the owner draws one seed per unit
//! of work up front with [`RandomNumberGenerator::next_seed`] and each worker
//! builds its own generator from that seed:
//!
//! ```rust
//! use freightga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let seeds: Vec<u64> = (0..4).map(|_| rng.next_seed()).collect();
//! let workers: Vec<_> = seeds.into_iter().map(RandomNumberGenerator::from_seed).collect();
//! assert_eq!(workers.len(), 4);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    ///
    /// # Returns
    ///
    /// A `VecDeque` containing the generated random numbers.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }

    /// Draws a float uniformly from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with probability `probability`.
    ///
    /// Implemented as `unit() < probability`, so `0.0` never fires and `1.0`
    /// always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.chance(0.5)
    }

    /// Draws an index uniformly from `0..=upper`.
    pub fn inclusive_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }

    /// Draws an index uniformly from `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws a seed for a derived, independent generator.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen::<u64>()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
