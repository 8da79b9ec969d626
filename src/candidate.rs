//! # Candidate
//!
//! A `Candidate` is one trial load: a selection mask over the catalog plus the
//! totals and fitness derived from it. The mask is private and every
//! operation that produces or changes one re-evaluates before returning, so a
//! candidate is never observed with stale fitness.
//!
//! Candidates have value semantics. [`Candidate::crossover`] leaves both
//! parents untouched and allocates two new children; [`Candidate::mutate`]
//! consumes a freshly bred child and hands back its finalized form.
//!
//! ## Example
//!
//! ```rust
//! use freightga::{
//!     candidate::Candidate,
//!     catalog::{Catalog, Item},
//!     evolution::CapacityChallenge,
//!     rng::RandomNumberGenerator,
//! };
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", 1.0, 10.0, 1),
//!     Item::new("b", 2.0, 15.0, 1),
//! ])?;
//! let challenge = CapacityChallenge::new(&catalog, 2.0)?;
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let left = Candidate::from_selection(vec![true, false], &challenge, 0)?;
//! let right = Candidate::from_selection(vec![false, true], &challenge, 0)?;
//! let (a, b) = left.crossover(&right, &challenge, &mut rng)?;
//! let a = a.mutate(0.01, &challenge, &mut rng)?;
//!
//! assert_eq!(a.generation(), 1);
//! assert_eq!(b.len(), 2);
//! # Ok::<(), freightga::error::GeneticError>(())
//! ```

use std::fmt;

use crate::{
    error::{ensure_compatible, GeneticError, Result},
    evolution::challenge::{Challenge, Evaluation},
    rng::RandomNumberGenerator,
};

/// One trial selection over the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    selection: Vec<bool>,
    total_value: f64,
    total_space: f64,
    fitness: f64,
    feasible: bool,
    generation: usize,
}

impl Candidate {
    /// Builds a candidate where every gene is an independent fair coin flip.
    ///
    /// # Arguments
    ///
    /// * `challenge` - Supplies the gene count and scores the new selection.
    /// * `generation` - The generation tag of the new candidate.
    /// * `rng` - Source of the coin flips.
    ///
    /// # Returns
    ///
    /// An evaluated candidate, or a `GeneticError` if the challenge rejects
    /// the selection.
    pub fn new_random<C>(
        challenge: &C,
        generation: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self>
    where
        C: Challenge + ?Sized,
    {
        let selection = (0..challenge.genes()).map(|_| rng.coin_flip()).collect();
        Self::from_selection(selection, challenge, generation)
    }

    /// Builds a candidate from an explicit selection mask.
    pub fn from_selection<C>(selection: Vec<bool>, challenge: &C, generation: usize) -> Result<Self>
    where
        C: Challenge + ?Sized,
    {
        let evaluation = challenge.evaluate(&selection)?;
        Ok(Self {
            selection,
            total_value: evaluation.total_value,
            total_space: evaluation.total_space,
            fitness: evaluation.fitness,
            feasible: evaluation.feasible,
            generation,
        })
    }

    /// Recomputes totals and fitness from the current selection.
    pub fn evaluate<C>(&mut self, challenge: &C) -> Result<()>
    where
        C: Challenge + ?Sized,
    {
        let evaluation = challenge.evaluate(&self.selection)?;
        self.apply(evaluation);
        Ok(())
    }

    fn apply(&mut self, evaluation: Evaluation) {
        self.total_value = evaluation.total_value;
        self.total_space = evaluation.total_space;
        self.fitness = evaluation.fitness;
        self.feasible = evaluation.feasible;
    }

    /// Single-point crossover with a cut drawn uniformly from `0..=len`.
    ///
    /// The end points are legal cuts; they reproduce the parents unchanged.
    ///
    /// # Arguments
    ///
    /// * `other` - The second parent.
    /// * `challenge` - Scores both children.
    /// * `rng` - Source of the cut point.
    ///
    /// # Returns
    ///
    /// Two evaluated children. Between them they hold exactly the genes of
    /// both parents at every position.
    ///
    /// # Errors
    ///
    /// `IncompatibleCandidate` if the parents differ in length.
    pub fn crossover<C>(
        &self,
        other: &Self,
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Self, Self)>
    where
        C: Challenge + ?Sized,
    {
        ensure_compatible(self.len(), other.len())?;
        let cut = rng.inclusive_index(self.len());
        self.crossover_at(other, cut, challenge)
    }

    /// Single-point crossover at a fixed cut.
    ///
    /// The first child takes `self[..cut]` and `other[cut..]`, the second
    /// takes `other[..cut]` and `self[cut..]`. Children belong to the
    /// generation after the younger parent.
    pub fn crossover_at<C>(&self, other: &Self, cut: usize, challenge: &C) -> Result<(Self, Self)>
    where
        C: Challenge + ?Sized,
    {
        ensure_compatible(self.len(), other.len())?;
        if cut > self.len() {
            return Err(GeneticError::InvalidParameter(format!(
                "Crossover cut {} exceeds chromosome length {}",
                cut,
                self.len()
            )));
        }

        let generation = self.generation.max(other.generation) + 1;
        let splice = |head: &[bool], tail: &[bool]| -> Vec<bool> {
            head[..cut].iter().chain(&tail[cut..]).copied().collect()
        };

        let first = Self::from_selection(
            splice(&self.selection, &other.selection),
            challenge,
            generation,
        )?;
        let second = Self::from_selection(
            splice(&other.selection, &self.selection),
            challenge,
            generation,
        )?;
        Ok((first, second))
    }

    /// Flips each gene independently with probability `mutation_rate` and
    /// returns the re-evaluated candidate.
    ///
    /// # Arguments
    ///
    /// * `mutation_rate` - Per-gene flip probability, within `[0, 1]`.
    /// * `challenge` - Re-scores the mutated selection.
    /// * `rng` - Source of the per-gene draws.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `mutation_rate` lies outside `[0, 1]`.
    pub fn mutate<C>(
        mut self,
        mutation_rate: f64,
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self>
    where
        C: Challenge + ?Sized,
    {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(GeneticError::InvalidParameter(format!(
                "Mutation rate must be within [0, 1], got {}",
                mutation_rate
            )));
        }

        for gene in self.selection.iter_mut() {
            if rng.chance(mutation_rate) {
                *gene = !*gene;
            }
        }
        self.evaluate(challenge)?;
        Ok(self)
    }

    pub fn selection(&self) -> &[bool] {
        &self.selection
    }

    /// Positions of the selected lots, in catalog order.
    pub fn selected_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection
            .iter()
            .enumerate()
            .filter_map(|(position, &taken)| taken.then_some(position))
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn total_space(&self) -> f64 {
        self.total_space
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Whether the load fits within the capacity it was evaluated against.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    pub fn generation(&self) -> usize {
        self.generation
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chromosome: String = self
            .selection
            .iter()
            .map(|&taken| if taken { '1' } else { '0' })
            .collect();
        write!(
            f,
            "Gen: {} | Value: {} | Space Used: {} | Chromosome: {}",
            self.generation, self.total_value, self.total_space, chromosome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{Catalog, Item},
        evolution::challenge::{CapacityChallenge, INFEASIBLE_FITNESS},
    };

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("a", 1.0, 10.0, 1),
            Item::new("b", 2.0, 15.0, 1),
            Item::new("c", 3.0, 40.0, 1),
            Item::new("d", 1.0, 5.0, 2),
            Item::new("e", 0.5, 1.0, 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_random_is_evaluated() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 5.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..50 {
            let candidate = Candidate::new_random(&challenge, 0, &mut rng).unwrap();
            let expected = challenge.evaluate(candidate.selection()).unwrap();

            assert_eq!(candidate.len(), catalog.len());
            assert_eq!(candidate.generation(), 0);
            assert_eq!(candidate.total_value(), expected.total_value);
            assert_eq!(candidate.total_space(), expected.total_space);
            assert_eq!(candidate.fitness(), expected.fitness);
        }
    }

    #[test]
    fn test_new_random_flips_both_ways() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 5.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(7);

        let genes: Vec<bool> = (0..40)
            .flat_map(|_| {
                Candidate::new_random(&challenge, 0, &mut rng)
                    .unwrap()
                    .selection()
                    .to_vec()
            })
            .collect();

        let taken = genes.iter().filter(|&&g| g).count();
        assert!(taken > 60 && taken < 140, "taken = {}", taken);
    }

    #[test]
    fn test_fitness_follows_feasibility() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 4.0).unwrap();

        let fits = Candidate::from_selection(vec![true, false, true, false, false], &challenge, 0)
            .unwrap();
        assert_eq!(fits.total_space(), 4.0);
        assert_eq!(fits.fitness(), 50.0);
        assert!(fits.is_feasible());

        let overloaded =
            Candidate::from_selection(vec![true, true, true, false, false], &challenge, 0)
                .unwrap();
        assert_eq!(overloaded.total_value(), 65.0);
        assert_eq!(overloaded.fitness(), INFEASIBLE_FITNESS);
        assert!(!overloaded.is_feasible());
    }

    #[test]
    fn test_crossover_at_splices_parents() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 100.0).unwrap();
        let left = Candidate::from_selection(vec![true; 5], &challenge, 2).unwrap();
        let right = Candidate::from_selection(vec![false; 5], &challenge, 4).unwrap();

        let (a, b) = left.crossover_at(&right, 2, &challenge).unwrap();
        assert_eq!(a.selection(), &[true, true, false, false, false]);
        assert_eq!(b.selection(), &[false, false, true, true, true]);
        assert_eq!(a.generation(), 5);
        assert_eq!(b.generation(), 5);
        assert_eq!(a.total_value(), 25.0);
        assert_eq!(b.total_value(), 40.0 + 10.0 + 4.0);

        // Parents are untouched.
        assert_eq!(left.selection(), &[true; 5]);
        assert_eq!(right.selection(), &[false; 5]);
    }

    #[test]
    fn test_crossover_at_end_points_copy_parents() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 100.0).unwrap();
        let left = Candidate::from_selection(vec![true, false, true, false, true], &challenge, 0)
            .unwrap();
        let right = Candidate::from_selection(vec![false, true, true, true, false], &challenge, 0)
            .unwrap();

        let (a, b) = left.crossover_at(&right, 0, &challenge).unwrap();
        assert_eq!(a.selection(), right.selection());
        assert_eq!(b.selection(), left.selection());

        let (a, b) = left.crossover_at(&right, 5, &challenge).unwrap();
        assert_eq!(a.selection(), left.selection());
        assert_eq!(b.selection(), right.selection());

        assert!(matches!(
            left.crossover_at(&right, 6, &challenge),
            Err(GeneticError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_crossover_conserves_genes() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 5.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1234);

        for _ in 0..100 {
            let left = Candidate::new_random(&challenge, 0, &mut rng).unwrap();
            let right = Candidate::new_random(&challenge, 0, &mut rng).unwrap();
            let (a, b) = left.crossover(&right, &challenge, &mut rng).unwrap();

            for position in 0..catalog.len() {
                let mut parents = [left.selection()[position], right.selection()[position]];
                let mut children = [a.selection()[position], b.selection()[position]];
                parents.sort();
                children.sort();
                assert_eq!(parents, children);
            }
        }
    }

    #[test]
    fn test_crossover_rejects_other_catalog() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 5.0).unwrap();
        let small = Catalog::new(vec![Item::new("x", 1.0, 1.0, 1)]).unwrap();
        let small_challenge = CapacityChallenge::new(&small, 5.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let left = Candidate::new_random(&challenge, 0, &mut rng).unwrap();
        let right = Candidate::new_random(&small_challenge, 0, &mut rng).unwrap();

        assert_eq!(
            left.crossover(&right, &challenge, &mut rng),
            Err(GeneticError::IncompatibleCandidate {
                expected: 5,
                found: 1
            })
        );
    }

    #[test]
    fn test_from_selection_rejects_wrong_length() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 5.0).unwrap();

        assert!(matches!(
            Candidate::from_selection(vec![true, false], &challenge, 0),
            Err(GeneticError::IncompatibleCandidate { .. })
        ));
    }

    #[test]
    fn test_mutate_extremes() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 100.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(9);
        let original =
            Candidate::from_selection(vec![true, false, true, false, true], &challenge, 3)
                .unwrap();

        let unchanged = original.clone().mutate(0.0, &challenge, &mut rng).unwrap();
        assert_eq!(unchanged, original);

        let flipped = original.clone().mutate(1.0, &challenge, &mut rng).unwrap();
        assert_eq!(flipped.selection(), &[false, true, false, true, false]);
        assert_eq!(flipped.total_value(), 15.0 + 10.0);
        assert_eq!(flipped.generation(), 3);
    }

    #[test]
    fn test_mutate_rejects_invalid_rate() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 5.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(9);
        let candidate = Candidate::new_random(&challenge, 0, &mut rng).unwrap();

        for rate in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                candidate.clone().mutate(rate, &challenge, &mut rng),
                Err(GeneticError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_selected_positions_and_display() {
        let catalog = catalog();
        let challenge = CapacityChallenge::new(&catalog, 100.0).unwrap();
        let candidate =
            Candidate::from_selection(vec![true, false, false, true, false], &challenge, 1)
                .unwrap();

        assert_eq!(candidate.selected_positions().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(
            candidate.to_string(),
            "Gen: 1 | Value: 20 | Space Used: 3 | Chromosome: 10010"
        );
    }
}
