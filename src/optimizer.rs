extern crate nalgebra as na;

use na::DVector;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, SwarmConfig};
use crate::fitness::{Fitness, PlacementFitness};
use crate::particle::Particle;
use crate::search_result::SearchResult;
use crate::update_rule::{UpdateRule, Weights};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerState {
    Uninitialized,
    Initialized,
    Iterating(usize),
    Done,
}

/// Sequential particle swarm search maximizing `F`.
///
/// The global best is shared by every particle of an iteration: a particle
/// that improves it is seen by the particles updated after it.
pub struct Optimizer<F: Fitness, R: Rng> {
    objective: F,
    rng: R,
    num_particles: usize,
    max_iterations: usize,
    weights: Weights,
    rule: UpdateRule,
    swarm: Vec<Particle>,
    global_best: SearchResult,
    history: Vec<f64>,
    state: OptimizerState,
}

impl<R: Rng> Optimizer<PlacementFitness, R> {
    /// Builds the coverage-per-cost search described by `config`.
    pub fn new(config: &SwarmConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let objective = PlacementFitness::new(
            config.num_dimensions,
            config.coverage_radius,
            &config.fixed_nodes,
        );
        Ok(Optimizer::with_objective(objective, config, rng))
    }
}

impl<F: Fitness, R: Rng> Optimizer<F, R> {
    pub fn with_objective(objective: F, config: &SwarmConfig, rng: R) -> Self {
        let dim = objective.dim();
        Optimizer {
            objective,
            rng,
            num_particles: config.num_particles,
            max_iterations: config.max_iterations,
            weights: config.weights(),
            rule: config.update_rule,
            swarm: Vec::new(),
            global_best: SearchResult::sentinel(dim),
            history: Vec::new(),
            state: OptimizerState::Uninitialized,
        }
    }

    pub fn state(&self) -> OptimizerState {
        self.state
    }

    pub fn global_best(&self) -> &SearchResult {
        &self.global_best
    }

    pub fn best_position(&self) -> &DVector<f64> {
        &self.global_best.value
    }

    /// Best fitness after initialization and after every finished iteration.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn particles(&self) -> &[Particle] {
        &self.swarm
    }

    /// Scatters the swarm uniformly over [0, 1) per axis and scans it once.
    ///
    /// Only the first call has any effect.
    pub fn initialize(&mut self) {
        if self.state != OptimizerState::Uninitialized {
            return;
        }

        let dim = self.objective.dim();
        let rng = &mut self.rng;
        self.swarm = (0..self.num_particles)
            .map(|_| {
                let initial_position: DVector<f64> =
                    DVector::from_iterator(dim, (0..dim).map(|_| rng.gen::<f64>()));
                Particle::new(&initial_position)
            })
            .collect();

        self.scan(-1);
        self.history.push(self.global_best.fitness);
        self.state = if self.max_iterations == 0 {
            OptimizerState::Done
        } else {
            OptimizerState::Initialized
        };

        debug!(
            particles = self.swarm.len(),
            fitness = self.global_best.fitness,
            "swarm initialized"
        );
    }

    /// Runs one iteration. Returns false once the run is done.
    pub fn step(&mut self) -> bool {
        let t = match self.state {
            OptimizerState::Uninitialized => {
                self.initialize();
                return self.state != OptimizerState::Done;
            }
            OptimizerState::Initialized => 0,
            OptimizerState::Iterating(t) => t,
            OptimizerState::Done => return false,
        };
        self.state = OptimizerState::Iterating(t);
        let iter: i32 = iteration_index(t);

        self.scan(iter);

        // move
        for particle in &mut self.swarm {
            self.rule.apply(
                particle,
                &self.global_best.value,
                &self.weights,
                &mut self.rng,
            );

            let new_fitness: f64 = self.objective.fitness(&particle.position);
            if self.rule.tracks_personal_best() && particle.remember(new_fitness) {
                trace!(iter, fitness = new_fitness, "personal best improved");
            }
            if self.global_best.offer(&particle.position, new_fitness, iter) {
                debug!(iter = t, fitness = new_fitness, "global best improved");
            }
        }

        self.history.push(self.global_best.fitness);
        trace!(iter = t, fitness = self.global_best.fitness, "iteration finished");

        if t + 1 >= self.max_iterations {
            self.state = OptimizerState::Done;
            false
        } else {
            self.state = OptimizerState::Iterating(t + 1);
            true
        }
    }

    /// Runs the search to completion and returns the global best.
    pub fn optimize(&mut self) -> SearchResult {
        info!(
            particles = self.num_particles,
            iterations = self.max_iterations,
            rule = ?self.rule,
            "starting swarm search"
        );

        self.initialize();
        while self.step() {}

        info!(
            fitness = self.global_best.fitness,
            iter = self.global_best.iter,
            "swarm search finished"
        );
        self.global_best.clone()
    }

    // full rescan of the current positions
    fn scan(&mut self, iter: i32) {
        for particle in &mut self.swarm {
            let fitness: f64 = self.objective.fitness(&particle.position);
            if self.rule.tracks_personal_best() && particle.remember(fitness) {
                trace!(iter, fitness, "personal best improved");
            }
            if self.global_best.offer(&particle.position, fitness, iter) {
                debug!(iter, fitness, "global best improved");
            }
        }
    }
}

// saturates instead of wrapping for runs longer than i32::MAX iterations
fn iteration_index(t: usize) -> i32 {
    i32::try_from(t).unwrap_or(i32::MAX)
}

/// Runs a complete placement search for `config` with the given random source.
pub fn optimize<R: Rng>(config: &SwarmConfig, rng: R) -> Result<SearchResult, ConfigError> {
    let mut optimizer = Optimizer::new(config, rng)?;
    Ok(optimizer.optimize())
}
