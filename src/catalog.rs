//! # Item Catalog
//!
//! An ordered, validated list of item kinds that can be loaded. The position
//! of an item in the catalog is the position of its gene in every
//! [`Candidate`](crate::candidate::Candidate), so a catalog is never mutated
//! once built.
//!
//! ## Example
//!
//! ```rust
//! use freightga::catalog::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Notebook", 0.0038, 2700.0, 2),
//!     Item::new("Smart TV", 0.41, 4700.0, 1),
//! ])?;
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog[0].lot_value(), 5400.0);
//! # Ok::<(), freightga::error::GeneticError>(())
//! ```

use std::ops::Index;

use crate::error::{GeneticError, Result};

/// One kind of item that can be loaded.
///
/// A candidate either takes all `quantity` units of the kind or none of them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub unit_space: f64,
    pub unit_value: f64,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, unit_space: f64, unit_value: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_space,
            unit_value,
            quantity,
        }
    }

    /// Space taken by the whole lot.
    pub fn lot_space(&self) -> f64 {
        self.unit_space * self.quantity as f64
    }

    /// Value of the whole lot.
    pub fn lot_value(&self) -> f64 {
        self.unit_value * self.quantity as f64
    }

    fn validate(&self, position: usize) -> Result<()> {
        if self.quantity == 0 {
            return Err(GeneticError::Validation(format!(
                "Item {} ({}) must have a positive quantity",
                position, self.name
            )));
        }
        if !self.unit_space.is_finite() || self.unit_space < 0.0 {
            return Err(GeneticError::Validation(format!(
                "Item {} ({}) has invalid unit space {}",
                position, self.name, self.unit_space
            )));
        }
        if !self.unit_value.is_finite() || self.unit_value < 0.0 {
            return Err(GeneticError::Validation(format!(
                "Item {} ({}) has invalid unit value {}",
                position, self.name, self.unit_value
            )));
        }
        if !self.lot_space().is_finite() || !self.lot_value().is_finite() {
            return Err(GeneticError::Validation(format!(
                "Item {} ({}) has a lot total that overflows",
                position, self.name
            )));
        }
        Ok(())
    }
}

/// A validated, ordered, non-empty list of items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Item>", into = "Vec<Item>")
)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists, zero quantities and negative
    /// or non-finite spaces and values.
    ///
    /// Lot totals and the sums over all lots must stay finite, so any
    /// selection evaluates to a finite value and space.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(GeneticError::Validation(
                "Catalog must contain at least one item".to_string(),
            ));
        }
        items
            .iter()
            .enumerate()
            .try_for_each(|(position, item)| item.validate(position))?;

        let (total_space, total_value) = items.iter().fold((0.0, 0.0), |(space, value), item| {
            (space + item.lot_space(), value + item.lot_value())
        });
        if !total_space.is_finite() || !total_value.is_finite() {
            return Err(GeneticError::Validation(
                "Catalog totals overflow".to_string(),
            ));
        }

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, position: usize) -> &Item {
        &self.items[position]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = GeneticError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Catalog::new(items)
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}
