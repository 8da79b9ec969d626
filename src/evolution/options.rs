//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of a solver
//! run: population size, number of generations, mutation rate, logging level
//! and the population size from which child pairs are bred in parallel.
//!
//! ## Example
//!
//! ```rust
//! use freightga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(50, LogLevel::Minimal, 80, 0.05);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 200);
//! assert_eq!(default_options.get_num_generations(), 100);
//! assert_eq!(default_options.get_mutation_rate(), 0.01);
//! ```
//!
//! ## Defaults
//!
//! | Option               | Default |
//! |----------------------|---------|
//! | `num_generations`    | 100     |
//! | `population_size`    | 200     |
//! | `mutation_rate`      | 0.01    |
//! | `log_level`          | `None`  |
//! | `parallel_threshold` | 1000    |

use crate::error::{GeneticError, Result};

pub const DEFAULT_NUM_GENERATIONS: usize = 100;
pub const DEFAULT_POPULATION_SIZE: usize = 200;
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// How much the engine reports through `tracing` while it runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// One `info` event per generation plus one `debug` event per candidate.
    Verbose,
    /// One `info` event per generation.
    Minimal,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    mutation_rate: f64,
    /// Population size from which child pairs are bred on the rayon pool
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            mutation_rate,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Creates a new `EvolutionOptions` instance with all parameters specified.
    pub fn new_with_threshold(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        mutation_rate: f64,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            mutation_rate,
            parallel_threshold,
        }
    }

    /// Checks the ranges the engine relies on.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the population size is zero or the mutation
    /// rate lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::InvalidParameter(
                "Population size cannot be zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::InvalidParameter(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Returns the population size from which breeding runs in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use freightga::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(50)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .mutation_rate(0.05)
    ///     .parallel_threshold(500)
    ///     .build();
    ///
    /// assert_eq!(options.get_population_size(), 50);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_NUM_GENERATIONS,
            log_level: LogLevel::None,
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take the defaults listed in the module documentation.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(DEFAULT_NUM_GENERATIONS),
            log_level: self.log_level.unwrap_or_default(),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
