use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    challenge::Challenge,
    controller::RunResult,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    candidate::Candidate,
    error::{GeneticError, OptionExt, Result},
    population::Population,
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

/// Lifecycle of an [`EvolutionEngine`].
///
/// `Uninitialized -> Seeded` on [`EvolutionEngine::seed`],
/// `Seeded | Running -> Running` on [`EvolutionEngine::step`] and
/// `Seeded | Running -> Done` on [`EvolutionEngine::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Seeded,
    Running,
    Done,
}

/// Summary of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    /// Fitness of this generation's best candidate.
    pub best_fitness: f64,
    /// Fitness of the best candidate seen so far; never decreases.
    pub best_ever_fitness: f64,
    pub mean_fitness: f64,
    /// Number of candidates that fit the capacity.
    pub feasible: usize,
}

/// Drives the generational loop: roulette selection, single-point crossover,
/// mutation and best-ever tracking.
#[derive(Debug)]
pub struct EvolutionEngine<C, S = RouletteWheelSelection>
where
    C: Challenge,
    S: SelectionStrategy,
{
    challenge: C,
    selection: S,
    options: EvolutionOptions,
    state: EngineState,
    population: Population,
    best: Option<Candidate>,
    best_feasible: Option<Candidate>,
    trace: Vec<GenerationStats>,
}

impl<C> EvolutionEngine<C>
where
    C: Challenge,
{
    /// Creates an engine that selects parents by roulette wheel.
    pub fn new(challenge: C, options: EvolutionOptions) -> Self {
        Self::with_selection(challenge, RouletteWheelSelection::new(), options)
    }
}

impl<C, S> EvolutionEngine<C, S>
where
    C: Challenge,
    S: SelectionStrategy,
{
    pub fn with_selection(challenge: C, selection: S, options: EvolutionOptions) -> Self {
        Self {
            challenge,
            selection,
            options,
            state: EngineState::Uninitialized,
            population: Population::default(),
            best: None,
            best_feasible: None,
            trace: Vec::new(),
        }
    }

    /// Seeds generation 0 and records it as the first trace entry.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for invalid options, `InvalidState` if the engine
    /// was already seeded.
    pub fn seed(&mut self, rng: &mut RandomNumberGenerator) -> Result<GenerationStats> {
        if self.state != EngineState::Uninitialized {
            return Err(GeneticError::InvalidState(format!(
                "Cannot seed an engine in state {:?}",
                self.state
            )));
        }
        self.options.validate()?;

        self.population =
            Population::seed(&self.challenge, self.options.get_population_size(), rng)?;
        self.state = EngineState::Seeded;
        self.record()
    }

    /// Runs one generation: breed a full population from the current one,
    /// replace it, rank it and update the best-ever candidate.
    ///
    /// # Errors
    ///
    /// `InvalidState` before seeding, after [`EvolutionEngine::finish`], or
    /// when the population is empty.
    pub fn step(&mut self, rng: &mut RandomNumberGenerator) -> Result<GenerationStats> {
        match self.state {
            EngineState::Seeded | EngineState::Running => {}
            state => {
                return Err(GeneticError::InvalidState(format!(
                    "Cannot step an engine in state {:?}",
                    state
                )))
            }
        }
        if self.population.is_empty() {
            return Err(GeneticError::InvalidState(
                "Cannot evolve an empty population".to_string(),
            ));
        }

        let children = self.breed(rng)?;
        self.population = Population::from_candidates(children, self.population.generation() + 1);
        self.state = EngineState::Running;
        self.record()
    }

    /// Marks the run as complete.
    pub fn finish(&mut self) -> Result<()> {
        match self.state {
            EngineState::Seeded | EngineState::Running => {
                self.state = EngineState::Done;
                Ok(())
            }
            state => Err(GeneticError::InvalidState(format!(
                "Cannot finish an engine in state {:?}",
                state
            ))),
        }
    }

    /// Consumes a finished engine into its result.
    pub fn into_result(self) -> Result<RunResult> {
        if self.state != EngineState::Done {
            return Err(GeneticError::InvalidState(format!(
                "Cannot collect the result of an engine in state {:?}",
                self.state
            )));
        }
        let best = self.best.ok_or_else_genetic(|| {
            GeneticError::InvalidState("No candidate was recorded".to_string())
        })?;
        Ok(RunResult::new(best, self.best_feasible, self.trace))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The current population, ranked once a generation is recorded.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn best_feasible(&self) -> Option<&Candidate> {
        self.best_feasible.as_ref()
    }

    pub fn trace(&self) -> &[GenerationStats] {
        &self.trace
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    /// Breeds the next generation two children at a time.
    ///
    /// One seed per child pair is drawn from `rng` before any pair is bred,
    /// so the sequential and the parallel path produce identical children.
    fn breed(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<Candidate>> {
        let size = self.options.get_population_size();
        let sum_fitness = self.population.total_fitness();
        let seeds: Vec<u64> = (0..size.div_ceil(2)).map(|_| rng.next_seed()).collect();

        let pairs: Vec<(Candidate, Candidate)> = if size >= self.options.get_parallel_threshold() {
            seeds
                .into_par_iter()
                .map(|seed| self.breed_pair(sum_fitness, seed))
                .collect::<Result<_>>()?
        } else {
            seeds
                .into_iter()
                .map(|seed| self.breed_pair(sum_fitness, seed))
                .collect::<Result<_>>()?
        };

        let mut children: Vec<Candidate> = pairs.into_iter().flat_map(|(a, b)| [a, b]).collect();
        // Odd sizes overshoot by one.
        children.truncate(size);
        Ok(children)
    }

    fn breed_pair(&self, sum_fitness: f64, seed: u64) -> Result<(Candidate, Candidate)> {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let rate = self.options.get_mutation_rate();
        let parents = self.population.candidates();

        let first = self.selection.select(&self.population, sum_fitness, &mut rng)?;
        let second = self.selection.select(&self.population, sum_fitness, &mut rng)?;
        let (a, b) = parents[first].crossover(&parents[second], &self.challenge, &mut rng)?;

        Ok((
            a.mutate(rate, &self.challenge, &mut rng)?,
            b.mutate(rate, &self.challenge, &mut rng)?,
        ))
    }

    /// Ranks the current population, applies elitism and appends a trace entry.
    fn record(&mut self) -> Result<GenerationStats> {
        self.population.rank();
        let generation_best = self.population.best()?;

        // Strictly better only: the earliest of equally fit candidates wins.
        if self
            .best
            .as_ref()
            .map_or(true, |best| generation_best.fitness() > best.fitness())
        {
            self.best = Some(generation_best.clone());
        }
        if let Some(feasible) = self.population.best_feasible() {
            if self
                .best_feasible
                .as_ref()
                .map_or(true, |best| feasible.fitness() > best.fitness())
            {
                self.best_feasible = Some(feasible.clone());
            }
        }

        let best_ever_fitness = self
            .best
            .as_ref()
            .map(Candidate::fitness)
            .ok_or_else_genetic(|| GeneticError::InvalidState("No best candidate".to_string()))?;
        let stats = GenerationStats {
            generation: self.population.generation(),
            best_fitness: generation_best.fitness(),
            best_ever_fitness,
            mean_fitness: self.population.mean_fitness(),
            feasible: self.population.feasible_count(),
        };

        match self.options.get_log_level() {
            LogLevel::Minimal => info!(
                generation = stats.generation,
                best_fitness = stats.best_fitness,
                best_ever_fitness = stats.best_ever_fitness,
                mean_fitness = stats.mean_fitness,
                feasible = stats.feasible,
                "generation complete"
            ),
            LogLevel::Verbose => {
                info!(
                    generation = stats.generation,
                    best_fitness = stats.best_fitness,
                    best_ever_fitness = stats.best_ever_fitness,
                    mean_fitness = stats.mean_fitness,
                    feasible = stats.feasible,
                    "generation complete"
                );
                self.population.iter().for_each(|candidate| {
                    debug!(generation = stats.generation, %candidate, "candidate");
                });
            }
            LogLevel::None => {}
        }

        self.trace.push(stats);
        Ok(stats)
    }
}
