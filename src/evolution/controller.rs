use tracing::{debug, instrument};

use super::{
    challenge::CapacityChallenge,
    engine::{EvolutionEngine, GenerationStats},
    options::EvolutionOptions,
};
use crate::{
    candidate::Candidate,
    catalog::Catalog,
    error::Result,
    manifest::LoadManifest,
    rng::RandomNumberGenerator,
};

/// Outcome of a complete solver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunResult {
    best: Candidate,
    best_feasible: Option<Candidate>,
    trace: Vec<GenerationStats>,
}

impl RunResult {
    pub(crate) fn new(
        best: Candidate,
        best_feasible: Option<Candidate>,
        trace: Vec<GenerationStats>,
    ) -> Self {
        Self {
            best,
            best_feasible,
            trace,
        }
    }

    /// The fittest candidate seen in any generation.
    pub fn best(&self) -> &Candidate {
        &self.best
    }

    /// The fittest candidate seen that fits the capacity.
    ///
    /// Differs from [`RunResult::best`] only when no feasible load is worth
    /// more than the infeasible penalty, e.g. with zero capacity.
    pub fn best_feasible(&self) -> Option<&Candidate> {
        self.best_feasible.as_ref()
    }

    /// One entry per generation, generation 0 first.
    pub fn trace(&self) -> &[GenerationStats] {
        &self.trace
    }

    /// Best fitness of each generation, in generation order.
    pub fn best_fitness_trace(&self) -> Vec<f64> {
        self.trace.iter().map(|stats| stats.best_fitness).collect()
    }

    /// Best-ever fitness after each generation; non-decreasing.
    pub fn best_ever_trace(&self) -> Vec<f64> {
        self.trace
            .iter()
            .map(|stats| stats.best_ever_fitness)
            .collect()
    }

    /// Lists the lots of the best feasible load. Empty when no feasible load
    /// was found.
    pub fn manifest(&self, catalog: &Catalog) -> Result<LoadManifest> {
        match &self.best_feasible {
            Some(candidate) => LoadManifest::from_candidate(candidate, catalog),
            None => Ok(LoadManifest::empty()),
        }
    }
}

/// Runs the genetic algorithm over `catalog` for `options.get_num_generations()`
/// generations and returns the best load found.
///
/// Generation 0 is the seeded population and is always the first trace entry,
/// so the trace holds `num_generations + 1` entries.
///
/// # Errors
///
/// `InvalidParameter` when the capacity is negative or non-finite, the
/// population size is zero, or the mutation rate lies outside `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use freightga::{
///     catalog::{Catalog, Item},
///     evolution::{run, EvolutionOptions},
///     rng::RandomNumberGenerator,
/// };
///
/// let catalog = Catalog::new(vec![
///     Item::new("a", 1.0, 10.0, 1),
///     Item::new("b", 2.0, 15.0, 1),
///     Item::new("c", 3.0, 40.0, 1),
/// ])?;
/// let options = EvolutionOptions::builder()
///     .population_size(50)
///     .num_generations(50)
///     .mutation_rate(0.05)
///     .build();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let result = run(&catalog, 4.0, &options, &mut rng)?;
/// let manifest = result.manifest(&catalog)?;
/// assert!(manifest.total_space <= 4.0);
/// assert_eq!(result.trace().len(), 51);
/// # Ok::<(), freightga::error::GeneticError>(())
/// ```
#[instrument(
    level = "debug",
    skip_all,
    fields(
        items = catalog.len(),
        capacity = capacity,
        population_size = options.get_population_size(),
        generations = options.get_num_generations(),
        mutation_rate = options.get_mutation_rate(),
    )
)]
pub fn run(
    catalog: &Catalog,
    capacity: f64,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<RunResult> {
    options.validate()?;
    let challenge = CapacityChallenge::new(catalog, capacity)?;

    let mut engine = EvolutionEngine::new(challenge, options.clone());
    engine.seed(rng)?;
    for _ in 0..options.get_num_generations() {
        engine.step(rng)?;
    }
    engine.finish()?;

    let result = engine.into_result()?;
    debug!(
        best_fitness = result.best().fitness(),
        best_generation = result.best().generation(),
        "run complete"
    );
    Ok(result)
}
