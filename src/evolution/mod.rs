pub mod builder;
pub mod challenge;
pub mod controller;
pub mod engine;
pub mod options;

pub use builder::{CargoOptimizer, OptimizerBuilder};
pub use challenge::{CapacityChallenge, Challenge, Evaluation, INFEASIBLE_FITNESS};
pub use controller::{run, RunResult};
pub use engine::{EngineState, EvolutionEngine, GenerationStats};
pub use options::{EvolutionOptions, LogLevel};
