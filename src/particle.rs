extern crate nalgebra as na;

use na::DVector;

pub struct Particle {
    pub position: DVector<f64>,
    pub velocity: DVector<f64>,
    pub best_position: DVector<f64>,
    pub best_fitness: f64,
}

impl Particle {
    pub fn new(position: &DVector<f64>) -> Self {
        Particle {
            position: position.clone(),
            velocity: DVector::zeros(position.len()),
            best_position: position.clone(),
            best_fitness: f64::MIN,
        }
    }

    /// Records `fitness` as the personal best if it strictly improves on it.
    pub fn remember(&mut self, fitness: f64) -> bool {
        if fitness > self.best_fitness {
            self.best_position = self.position.clone();
            self.best_fitness = fitness;
            true
        } else {
            false
        }
    }
}
