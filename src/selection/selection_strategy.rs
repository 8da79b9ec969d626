use std::fmt::Debug;

use crate::error::Result;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A strategy picks the index of one parent from a ranked population. The
/// engine computes the population's total fitness once per generation and
/// passes it to every call.
///
/// # Examples
///
/// ```
/// use freightga::{
///     catalog::{Catalog, Item},
///     evolution::CapacityChallenge,
///     population::Population,
///     rng::RandomNumberGenerator,
///     selection::{RouletteWheelSelection, SelectionStrategy},
/// };
///
/// let catalog = Catalog::new(vec![Item::new("a", 1.0, 3.0, 1), Item::new("b", 1.0, 5.0, 1)])?;
/// let challenge = CapacityChallenge::new(&catalog, 2.0)?;
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let mut population = Population::seed(&challenge, 10, &mut rng)?;
/// population.rank();
///
/// let selection = RouletteWheelSelection::new();
/// let parent = selection.select(&population, population.total_fitness(), &mut rng)?;
/// assert!(parent < population.len());
/// # Ok::<(), freightga::error::GeneticError>(())
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects the index of one parent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the population is empty.
    fn select(
        &self,
        population: &Population,
        sum_fitness: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize>;
}
