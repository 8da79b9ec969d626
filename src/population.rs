//! # Population
//!
//! The generation-indexed set of candidates the engine works on, with the
//! ranking and summary statistics it needs between generations.

use crate::{
    candidate::Candidate,
    error::{GeneticError, OptionExt, Result},
    evolution::challenge::Challenge,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    candidates: Vec<Candidate>,
    generation: usize,
}

impl Population {
    /// Seeds `size` random candidates for generation 0.
    ///
    /// # Arguments
    ///
    /// * `challenge` - Supplies the gene count and scores each candidate.
    /// * `size` - Number of candidates to create.
    /// * `rng` - Source of the gene coin flips.
    ///
    /// # Returns
    ///
    /// An unranked population of `size` evaluated candidates.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `size` is zero.
    pub fn seed<C>(challenge: &C, size: usize, rng: &mut RandomNumberGenerator) -> Result<Self>
    where
        C: Challenge + ?Sized,
    {
        if size == 0 {
            return Err(GeneticError::InvalidParameter(
                "Population size cannot be zero".to_string(),
            ));
        }

        let candidates = (0..size)
            .map(|_| Candidate::new_random(challenge, 0, rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            candidates,
            generation: 0,
        })
    }

    pub fn from_candidates(candidates: Vec<Candidate>, generation: usize) -> Self {
        Self {
            candidates,
            generation,
        }
    }

    /// Sorts by descending fitness. The sort is stable: equal fitness keeps
    /// the previous relative order.
    pub fn rank(&mut self) {
        self.candidates
            .sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
    }

    /// Sum of all fitness values; the roulette wheel denominator.
    pub fn total_fitness(&self) -> f64 {
        self.candidates.iter().map(Candidate::fitness).sum()
    }

    pub fn mean_fitness(&self) -> f64 {
        if self.candidates.is_empty() {
            return 0.0;
        }
        self.total_fitness() / self.candidates.len() as f64
    }

    /// The candidate that sits at position 0 once the population is ranked:
    /// the highest fitness, earliest on ties.
    ///
    /// # Returns
    ///
    /// The best candidate, or `InvalidState` if the population is empty.
    pub fn best(&self) -> Result<&Candidate> {
        self.candidates
            .iter()
            .reduce(|best, candidate| {
                if candidate.fitness() > best.fitness() {
                    candidate
                } else {
                    best
                }
            })
            .ok_or_else_genetic(|| {
                GeneticError::InvalidState("Cannot pick the best of an empty population".to_string())
            })
    }

    /// Highest-fitness candidate that fits the capacity, if any.
    pub fn best_feasible(&self) -> Option<&Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| candidate.is_feasible())
            .reduce(|best, candidate| {
                if candidate.fitness() > best.fitness() {
                    candidate
                } else {
                    best
                }
            })
    }

    pub fn feasible_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|candidate| candidate.is_feasible())
            .count()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
