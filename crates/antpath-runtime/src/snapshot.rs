//! Snapshot persistence: save/load the pheromone layer.
//!
//! Serializes the pheromone grid together with its site and home cells to
//! pretty JSON, so checkpoints can be inspected or a run resumed.

use antpath_core::error::{GridError, Result};
use antpath_core::types::{Cell, Tick};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable snapshot of the pheromone layer at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneSnapshot {
    pub tick: Tick,
    pub rows: usize,
    pub cols: usize,
    /// Pheromone levels, row-major.
    pub values: Vec<f64>,
    #[serde(default)]
    pub sites: Vec<Cell>,
    #[serde(default)]
    pub homes: Vec<Cell>,
    #[serde(default)]
    pub paths_found: u64,
}

impl PheromoneSnapshot {
    /// Pheromone at a cell, if it lies inside the snapshot.
    pub fn value(&self, cell: Cell) -> Option<f64> {
        if cell.row < self.rows && cell.col < self.cols {
            self.values.get(cell.row * self.cols + cell.col).copied()
        } else {
            None
        }
    }

    /// The `n` most marked cells, strongest first. Ties keep row-major order.
    pub fn strongest(&self, n: usize) -> Vec<(Cell, f64)> {
        let mut ranked: Vec<(Cell, f64)> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (Cell::new(i / self.cols.max(1), i % self.cols.max(1)), *v))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// (min, max, mean) over the layer.
    pub fn summary(&self) -> (f64, f64, f64) {
        if self.values.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = self.values.iter().sum::<f64>() / self.values.len() as f64;
        (min, max, mean)
    }

    /// Fail unless `values` matches `rows * cols`.
    pub fn check_shape(&self) -> Result<()> {
        let expected = self.rows * self.cols;
        if self.values.len() != expected {
            return Err(GridError::DimensionMismatch {
                layer: "snapshot values",
                expected,
                found: self.values.len(),
            }
            .into());
        }
        Ok(())
    }
}

/// Save a snapshot to a JSON file, creating parent directories as needed.
pub fn save_snapshot(snapshot: &PheromoneSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, json)?;
    Ok(())
}

/// Load a snapshot from JSON. The layer shape is checked.
pub fn load_snapshot(path: &Path) -> Result<PheromoneSnapshot> {
    let json = std::fs::read_to_string(path)?;
    let snapshot: PheromoneSnapshot = serde_json::from_str(&json)?;
    snapshot.check_shape()?;
    Ok(snapshot)
}
