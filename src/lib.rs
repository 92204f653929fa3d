//! Particle swarm search for the placement of a target node that maximizes
//! coverage per unit of deployment cost among a set of fixed nodes.

pub mod config;
pub mod fitness;
pub mod optimizer;
pub mod particle;
pub mod search_result;
pub mod update_rule;

pub use config::{ConfigError, SwarmConfig};
pub use fitness::{Fitness, PlacementFitness};
pub use optimizer::{optimize, Optimizer, OptimizerState};
pub use search_result::SearchResult;
pub use update_rule::UpdateRule;
