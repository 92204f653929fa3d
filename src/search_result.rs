extern crate nalgebra as na;

use na::DVector;

/// Best position seen so far and the iteration it was found in.
///
/// `iter` is `-1` when the value came from the initialization scan or
/// nothing has been offered yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub value: DVector<f64>,
    pub fitness: f64,
    pub iter: i32,
}

impl SearchResult {
    pub fn new(value: &DVector<f64>, fitness: f64, iter: i32) -> Self {
        SearchResult {
            value: value.clone(),
            fitness,
            iter,
        }
    }

    /// Sentinel best: zero vector with the lowest representable fitness.
    pub fn sentinel(dim: usize) -> Self {
        SearchResult::new(&DVector::zeros(dim), f64::MIN, -1)
    }

    /// Replaces the stored best when `fitness` is strictly greater.
    ///
    /// Ties keep the earlier position. NaN never replaces.
    pub fn offer(&mut self, position: &DVector<f64>, fitness: f64, iter: i32) -> bool {
        if fitness > self.fitness {
            self.value.copy_from(position);
            self.fitness = fitness;
            self.iter = iter;
            true
        } else {
            false
        }
    }
}
