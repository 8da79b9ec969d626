use crate::{
    catalog::{Catalog, Item},
    error::{GeneticError, OptionExt, Result},
    manifest::LoadManifest,
    rng::RandomNumberGenerator,
};

use super::{challenge::CapacityChallenge, controller, EvolutionOptions, RunResult};

/// A validated cargo loading problem together with its solver options.
///
/// # Example
///
/// ```rust
/// use freightga::{
///     catalog::Item,
///     evolution::{builder::OptimizerBuilder, EvolutionOptions},
///     rng::RandomNumberGenerator,
/// };
///
/// let optimizer = OptimizerBuilder::new()
///     .with_items(vec![
///         Item::new("Smart TV", 0.41, 4700.0, 1),
///         Item::new("Fridge", 0.8, 1300.0, 1),
///         Item::new("Notebook", 0.0038, 2700.0, 3),
///     ])
///     .with_capacity(1.0)
///     .with_options(EvolutionOptions::builder().population_size(20).num_generations(20).build())
///     .build()?;
///
/// let manifest = optimizer.optimize(&mut RandomNumberGenerator::from_seed(3))?;
/// assert!(manifest.total_space <= 1.0);
/// # Ok::<(), freightga::error::GeneticError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CargoOptimizer {
    catalog: Catalog,
    capacity: f64,
    options: EvolutionOptions,
}

impl CargoOptimizer {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Runs the solver and returns the full result, including the trace.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<RunResult> {
        controller::run(&self.catalog, self.capacity, &self.options, rng)
    }

    /// Runs the solver and lists the best feasible load.
    pub fn optimize(&self, rng: &mut RandomNumberGenerator) -> Result<LoadManifest> {
        self.run(rng)?.manifest(&self.catalog)
    }
}

/// Builder for [`CargoOptimizer`]. Items and capacity are required; options
/// default to [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct OptimizerBuilder {
    items: Option<Vec<Item>>,
    capacity: Option<f64>,
    options: Option<EvolutionOptions>,
}

impl OptimizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.items = Some(catalog.into());
        self
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<CargoOptimizer> {
        let items = self
            .items
            .ok_or_else_genetic(|| GeneticError::Validation("Items not specified".to_string()))?;
        let capacity = self
            .capacity
            .ok_or_else_genetic(|| GeneticError::InvalidParameter("Capacity not specified".to_string()))?;
        let options = self.options.unwrap_or_default();

        let catalog = Catalog::new(items)?;
        CapacityChallenge::new(&catalog, capacity)?;
        options.validate()?;

        Ok(CargoOptimizer {
            catalog,
            capacity,
            options,
        })
    }
}
