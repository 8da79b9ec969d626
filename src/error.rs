//! # Error Types
//!
//! This module defines the error type shared by every part of the cargo
//! loading solver. All errors are precondition failures raised at the point
//! of misuse; the solver performs no I/O, so nothing here is transient.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use freightga::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::InvalidParameter(format!(
//!             "Mutation rate must be within [0, 1], got {}",
//!             rate
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use freightga::error::{GeneticError, OptionExt};
//!
//! fn first_fitness(fitness: &[f64]) -> freightga::error::Result<f64> {
//!     fitness.first().copied().ok_or_else_genetic(||
//!         GeneticError::InvalidState("Population is empty".to_string())
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while loading a catalog or running the solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// The item catalog is malformed (empty, zero quantities, negative or
    /// non-finite space/value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A solver parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A candidate was combined with a candidate or catalog of a different length.
    #[error("Incompatible candidate: expected {expected} genes, found {found}")]
    IncompatibleCandidate { expected: usize, found: usize },

    /// The engine was operated on out of order or on an empty population.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Checks that a gene count matches the expected catalog length.
pub fn ensure_compatible(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(GeneticError::IncompatibleCandidate { expected, found });
    }
    Ok(())
}
