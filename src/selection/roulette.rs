use crate::candidate::Candidate;
use crate::error::{GeneticError, OptionExt, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Fitness-proportional ("roulette wheel") parent selection.
///
/// A threshold `r` is drawn uniformly from `[0, sum_fitness)` and the
/// population is walked in its current order: starting before the first
/// candidate with an empty accumulator, the walk adds the next candidate's
/// fitness and steps forward for as long as the accumulator is still below
/// `r`. The candidate it stops on is the first one whose cumulative fitness
/// reaches `r`.
///
/// Edge behaviour, pinned by the tests below:
/// - `r == 0` never enters the walk and selects index 0.
/// - `r` equal to a cumulative sum selects the candidate that completes it.
/// - `r` above the final sum (float drift) selects the last candidate.
/// - a zero total fitness falls back to a uniform pick.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Walks `fitness` for the threshold `drawn`. Returns `None` only when
    /// `fitness` is empty.
    pub fn spin<I>(fitness: I, drawn: f64) -> Option<usize>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut fitness = fitness.into_iter().peekable();
        fitness.peek()?;

        let mut parent: Option<usize> = None;
        let mut accumulated = 0.0;
        for (index, value) in fitness.enumerate() {
            if accumulated >= drawn {
                break;
            }
            accumulated += value;
            parent = Some(index);
        }

        Some(parent.unwrap_or(0))
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        population: &Population,
        sum_fitness: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(GeneticError::InvalidState(
                "Roulette wheel selection requires a non-empty population".to_string(),
            ));
        }

        // Only reachable when every candidate is a feasible empty load.
        if sum_fitness <= 0.0 || !sum_fitness.is_finite() {
            return Ok(rng.index(population.len()));
        }

        let drawn = rng.unit() * sum_fitness;
        Self::spin(population.iter().map(Candidate::fitness), drawn).ok_or_else_genetic(|| {
            GeneticError::InvalidState("Roulette wheel walked an empty population".to_string())
        })
    }
}
