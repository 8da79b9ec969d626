//! # Load Manifest
//!
//! The caller-facing view of a load: every selected lot with its totals, and
//! the totals of the whole load.

use crate::{
    candidate::Candidate,
    catalog::{Catalog, Item},
    error::{ensure_compatible, Result},
};

/// One selected lot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadedItem {
    pub name: String,
    pub unit_space: f64,
    pub unit_value: f64,
    pub quantity: u32,
    pub total_space: f64,
    pub total_value: f64,
}

impl From<&Item> for LoadedItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            unit_space: item.unit_space,
            unit_value: item.unit_value,
            quantity: item.quantity,
            total_space: item.lot_space(),
            total_value: item.lot_value(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadManifest {
    pub selected: Vec<LoadedItem>,
    pub total_space: f64,
    pub total_value: f64,
}

impl LoadManifest {
    /// The "take nothing" load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lists the lots `candidate` selects from `catalog`, in catalog order.
    pub fn from_candidate(candidate: &Candidate, catalog: &Catalog) -> Result<Self> {
        ensure_compatible(catalog.len(), candidate.len())?;

        let selected: Vec<LoadedItem> = candidate
            .selected_positions()
            .map(|position| LoadedItem::from(&catalog[position]))
            .collect();
        let total_space = selected.iter().map(|item| item.total_space).sum();
        let total_value = selected.iter().map(|item| item.total_value).sum();

        Ok(Self {
            selected,
            total_space,
            total_value,
        })
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
