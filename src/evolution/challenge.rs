//! # Challenge
//!
//! A `Challenge` scores a selection mask. The solver ships one policy,
//! [`CapacityChallenge`], which sums whole lots from a catalog and applies a
//! hard penalty to loads that exceed the capacity.

use crate::{
    catalog::Catalog,
    error::{ensure_compatible, GeneticError, Result},
};

/// Fitness assigned to every load that exceeds the capacity.
///
/// It is positive so that roulette wheel selection stays well defined even
/// when a whole population is infeasible.
pub const INFEASIBLE_FITNESS: f64 = 1.0;

/// The derived quantities of one selection mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub total_value: f64,
    pub total_space: f64,
    pub fitness: f64,
    pub feasible: bool,
}

pub trait Challenge: Send + Sync {
    /// Number of genes a selection must have.
    fn genes(&self) -> usize;

    /// Scores a selection. Fails with `IncompatibleCandidate` when the
    /// selection length differs from [`Challenge::genes`].
    fn evaluate(&self, selection: &[bool]) -> Result<Evaluation>;
}

/// Whole-lot knapsack scoring with a hard capacity penalty.
///
/// Feasibility compares the summed `f64` lot spaces against the capacity
/// with no tolerance. Lots of `0.1` and `0.2` sum to slightly more than
/// `0.3`, so against a capacity of exactly `0.3` they count as overloaded.
/// Callers with decimal spaces should express them in integral units
/// (litres rather than cubic metres) or leave a small margin on the capacity.
#[derive(Debug, Clone, Copy)]
pub struct CapacityChallenge<'a> {
    catalog: &'a Catalog,
    capacity: f64,
}

impl<'a> CapacityChallenge<'a> {
    /// Creates a challenge over `catalog`. The capacity must be finite and
    /// non-negative.
    pub fn new(catalog: &'a Catalog, capacity: f64) -> Result<Self> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(GeneticError::InvalidParameter(format!(
                "Capacity must be a finite non-negative number, got {}",
                capacity
            )));
        }
        Ok(Self { catalog, capacity })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

impl Challenge for CapacityChallenge<'_> {
    fn genes(&self) -> usize {
        self.catalog.len()
    }

    fn evaluate(&self, selection: &[bool]) -> Result<Evaluation> {
        ensure_compatible(self.catalog.len(), selection.len())?;

        let (total_value, total_space) = selection
            .iter()
            .zip(self.catalog.iter())
            .filter(|(&taken, _)| taken)
            .fold((0.0, 0.0), |(value, space), (_, item)| {
                (value + item.lot_value(), space + item.lot_space())
            });

        // Exactly full is still a valid load.
        let feasible = total_space <= self.capacity;
        let fitness = if feasible {
            total_value
        } else {
            INFEASIBLE_FITNESS
        };

        Ok(Evaluation {
            total_value,
            total_space,
            fitness,
            feasible,
        })
    }
}
