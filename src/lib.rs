#![doc = include_str!("../README.md")]

pub mod candidate;
pub mod catalog;
pub mod error;
pub mod evolution;
pub mod manifest;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use catalog::{Catalog, Item};
pub use error::{GeneticError, OptionExt, Result};
pub use manifest::{LoadManifest, LoadedItem};
