//! Tuning parameters shared between the substrate and the agents.

use crate::error::{AntPathError, Result};
use serde::{Deserialize, Serialize};

/// Pheromone tuning.
///
/// `max_pheromone` is a ceiling that paint never reaches: an increment
/// that would not keep the cell strictly below it is dropped entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneParams {
    /// Ceiling of the pheromone layer (default: 1000.0).
    #[serde(default = "default_max_pheromone")]
    pub max_pheromone: f64,
    /// Floor the layer starts at and volatilizes towards (default: 0.0).
    #[serde(default)]
    pub min_pheromone: f64,
    /// Divisor of the random draw in the weighted decisions (default: 1.0).
    #[serde(default = "default_weight")]
    pub phero_weight: f64,
    /// Divisor of the pheromone score in the weighted decisions (default: 1.0).
    #[serde(default = "default_weight")]
    pub random_weight: f64,
    /// Paint left behind on every searching step (default: 1.0).
    #[serde(default = "default_step_intensity")]
    pub step_intensity: f64,
    /// Paint left behind on every returning step (default: 10.0).
    #[serde(default = "default_path_intensity")]
    pub path_intensity: f64,
}

fn default_max_pheromone() -> f64 { 1000.0 }
fn default_weight() -> f64 { 1.0 }
fn default_step_intensity() -> f64 { 1.0 }
fn default_path_intensity() -> f64 { 10.0 }

impl Default for PheromoneParams {
    fn default() -> Self {
        Self {
            max_pheromone: default_max_pheromone(),
            min_pheromone: 0.0,
            phero_weight: default_weight(),
            random_weight: default_weight(),
            step_intensity: default_step_intensity(),
            path_intensity: default_path_intensity(),
        }
    }
}

impl PheromoneParams {
    /// Reject parameter sets the decision formulas cannot work with.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("max_pheromone", self.max_pheromone),
            ("min_pheromone", self.min_pheromone),
            ("phero_weight", self.phero_weight),
            ("random_weight", self.random_weight),
            ("step_intensity", self.step_intensity),
            ("path_intensity", self.path_intensity),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(AntPathError::invalid_config(field, value, "must be finite"));
            }
        }
        if self.min_pheromone < 0.0 {
            return Err(AntPathError::invalid_config(
                "min_pheromone",
                self.min_pheromone,
                "must not be negative",
            ));
        }
        if self.max_pheromone <= self.min_pheromone {
            return Err(AntPathError::invalid_config(
                "max_pheromone",
                self.max_pheromone,
                format!("must exceed min_pheromone ({})", self.min_pheromone),
            ));
        }
        for (field, value) in [("phero_weight", self.phero_weight), ("random_weight", self.random_weight)] {
            if value <= 0.0 {
                return Err(AntPathError::invalid_config(field, value, "must be positive"));
            }
        }
        for (field, value) in [("step_intensity", self.step_intensity), ("path_intensity", self.path_intensity)] {
            if value < 0.0 {
                return Err(AntPathError::invalid_config(field, value, "must not be negative"));
            }
        }
        Ok(())
    }
}

/// Which neighbours count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Von Neumann neighbourhood.
    Four,
    /// Moore neighbourhood.
    #[default]
    Eight,
}

impl Connectivity {
    /// Neighbour offsets in the order the substrate enumerates them.
    ///
    /// Row-major; decisions that break ties by index rely on this order.
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        const FOUR: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
        const EIGHT: [(isize, isize); 8] = [
            (-1, -1), (-1, 0), (-1, 1),
            (0, -1), (0, 1),
            (1, -1), (1, 0), (1, 1),
        ];
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}
