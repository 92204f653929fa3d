extern crate nalgebra as na;

use na::DVector;

pub const DEFAULT_COVERAGE_RADIUS: f64 = 10.0;

pub trait Fitness {
    fn dim(&self) -> usize;
    fn fitness(&self, position: &DVector<f64>) -> f64;
}

/// Coverage-per-cost score for placing a target node among fixed nodes.
#[derive(Clone, Debug)]
pub struct PlacementFitness {
    dim: usize,
    radius: f64,
    fixed_nodes: Vec<DVector<f64>>,
}

impl PlacementFitness {
    pub fn new(dim: usize, radius: f64, fixed_nodes: &[Vec<f64>]) -> PlacementFitness {
        PlacementFitness {
            dim,
            radius,
            fixed_nodes: fixed_nodes
                .iter()
                .map(|node| DVector::from_column_slice(node))
                .collect(),
        }
    }

    pub fn fixed_nodes(&self) -> &[DVector<f64>] {
        &self.fixed_nodes
    }
}

impl Fitness for PlacementFitness {
    fn dim(&self) -> usize {
        self.dim
    }

    // cost == 0 gives +inf when covered and NaN otherwise; both are passed through
    fn fitness(&self, position: &DVector<f64>) -> f64 {
        coverage(position, self.radius) / cost(position, &self.fixed_nodes)
    }
}

/// 1.0 inside the closed ball of `radius` around the origin, 0.0 outside.
pub fn coverage(position: &DVector<f64>, radius: f64) -> f64 {
    if position.norm() <= radius {
        1.0
    } else {
        0.0
    }
}

/// Sum of Euclidean distances from `position` to every fixed node.
pub fn cost(position: &DVector<f64>, fixed_nodes: &[DVector<f64>]) -> f64 {
    let mut total: f64 = 0.0;
    for node in fixed_nodes {
        total += (position - node).norm();
    }
    total
}
