extern crate nalgebra as na;

use na::DVector;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::particle::Particle;

/// Coefficients of the position update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub inertia: f64,
    pub cognitive: f64,
    pub social: f64,
}

/// How a particle moves each iteration.
///
/// `Faithful` keeps no velocity: inertia scales the position itself and
/// the cognitive pull is taken towards the current position, so it is
/// always zero. `Canonical` carries velocity and a personal best.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateRule {
    #[default]
    Faithful,
    Canonical,
}

impl UpdateRule {
    /// Moves `particle` towards `global_best`.
    ///
    /// r1 and r2 are drawn once and shared by every axis.
    pub fn apply<R: Rng>(
        &self,
        particle: &mut Particle,
        global_best: &DVector<f64>,
        weights: &Weights,
        rng: &mut R,
    ) {
        let r1: f64 = rng.gen();
        let r2: f64 = rng.gen();

        match self {
            UpdateRule::Faithful => {
                for i in 0..particle.position.len() {
                    let x: f64 = particle.position[i];
                    let inertia: f64 = weights.inertia * x;
                    let cognitive: f64 = weights.cognitive * r1 * (x - x);
                    let social: f64 = weights.social * r2 * (global_best[i] - x);
                    particle.position[i] = inertia + cognitive + social;
                }
            }
            UpdateRule::Canonical => {
                for i in 0..particle.position.len() {
                    let x: f64 = particle.position[i];
                    let inertia: f64 = weights.inertia * particle.velocity[i];
                    let cognitive: f64 = weights.cognitive * r1 * (particle.best_position[i] - x);
                    let social: f64 = weights.social * r2 * (global_best[i] - x);
                    particle.velocity[i] = inertia + cognitive + social;
                    particle.position[i] = x + particle.velocity[i];
                }
            }
        }
    }

    pub fn tracks_personal_best(&self) -> bool {
        matches!(self, UpdateRule::Canonical)
    }
}

impl std::str::FromStr for UpdateRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "faithful" => Ok(UpdateRule::Faithful),
            "canonical" => Ok(UpdateRule::Canonical),
            other => Err(format!("unknown update rule `{other}`")),
        }
    }
}
