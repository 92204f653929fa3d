//! Run configuration for the placement search.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fitness::DEFAULT_COVERAGE_RADIUS;
use crate::update_rule::{UpdateRule, Weights};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dimensionality must be at least 1")]
    ZeroDimensions,
    #[error("fixed node {index} has {found} coordinates, expected {expected}")]
    NodeDimension {
        index: usize,
        found: usize,
        expected: usize,
    },
    #[error("fixed node {index} has a non-finite coordinate")]
    NonFiniteNode { index: usize },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything an optimizer run needs apart from the random source.
///
/// Weight ranges are not checked. Only inputs the search
/// cannot be carried out on are rejected by [`SwarmConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub num_particles: usize,
    pub num_dimensions: usize,
    pub max_iterations: usize,
    pub inertia_weight: f64,
    pub cognitive_weight: f64,
    pub social_weight: f64,
    pub coverage_radius: f64,
    pub update_rule: UpdateRule,
    pub fixed_nodes: Vec<Vec<f64>>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        SwarmConfig {
            num_particles: 50,
            num_dimensions: 2,
            max_iterations: 100,
            inertia_weight: 0.8,
            cognitive_weight: 2.0,
            social_weight: 2.0,
            coverage_radius: DEFAULT_COVERAGE_RADIUS,
            update_rule: UpdateRule::Faithful,
            fixed_nodes: vec![vec![2.0, 4.0], vec![5.0, 7.0], vec![8.0, 3.0]],
        }
    }
}

impl SwarmConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<SwarmConfig, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_particles(mut self, n: usize) -> Self {
        self.num_particles = n;
        self
    }

    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.num_dimensions = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_weights(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia_weight = inertia;
        self.cognitive_weight = cognitive;
        self.social_weight = social;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.coverage_radius = radius;
        self
    }

    pub fn with_rule(mut self, rule: UpdateRule) -> Self {
        self.update_rule = rule;
        self
    }

    pub fn with_fixed_nodes(mut self, nodes: Vec<Vec<f64>>) -> Self {
        self.fixed_nodes = nodes;
        self
    }

    pub fn weights(&self) -> Weights {
        Weights {
            inertia: self.inertia_weight,
            cognitive: self.cognitive_weight,
            social: self.social_weight,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_dimensions == 0 {
            return Err(ConfigError::ZeroDimensions);
        }

        for (name, value) in [
            ("inertia_weight", self.inertia_weight),
            ("cognitive_weight", self.cognitive_weight),
            ("social_weight", self.social_weight),
            ("coverage_radius", self.coverage_radius),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        for (index, node) in self.fixed_nodes.iter().enumerate() {
            if node.len() != self.num_dimensions {
                return Err(ConfigError::NodeDimension {
                    index,
                    found: node.len(),
                    expected: self.num_dimensions,
                });
            }
            if node.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::NonFiniteNode { index });
            }
        }

        Ok(())
    }
}
