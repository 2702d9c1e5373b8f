//! Substrate: the shared grid all ants operate within.
//!
//! The substrate holds the cost surface, the pheromone layer, the special
//! (site) cells, the seeded random stream and the path counter. Ants read
//! from and write to the substrate, but never directly to each other.
//! It is passed explicitly into every agent call; there is no ambient world.

use crate::error::{AntPathError, Result};
use crate::params::PheromoneParams;
use crate::types::*;
use rand::RngCore;

/// The grid view every agent senses and modifies.
pub trait Substrate {
    // --- Geometry ---

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Whether a cell lies inside the grid.
    fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Fail with `GridError::OutOfBounds` unless the cell is inside the grid.
    fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(AntPathError::out_of_bounds(cell, self.rows(), self.cols()))
        }
    }

    /// A fully populated position for an in-bounds cell.
    fn position(&self, cell: Cell) -> Result<Position>;

    /// All in-bounds neighbours of a cell, scratch fields populated.
    ///
    /// Order is stable for a given cell and connectivity; index-based
    /// tie-breaks depend on it.
    fn neighbour_positions(&self, cell: Cell) -> Result<Vec<Position>>;

    // --- Layers ---

    /// Current pheromone level.
    fn pheromone(&self, cell: Cell) -> Result<f64>;

    /// Overwrite the pheromone level.
    fn set_pheromone(&mut self, cell: Cell, value: f64) -> Result<()>;

    /// Whether a cell is a site. Special cells are never painted.
    fn is_special(&self, cell: Cell) -> bool;

    /// Pheromone tuning.
    fn params(&self) -> &PheromoneParams;

    // --- Shared state ---

    /// The run's random stream. All agent randomness draws from here so a
    /// seed fixes the whole run.
    fn rng(&mut self) -> &mut dyn RngCore;

    /// Count one more path found. Returns the new total.
    fn record_path(&mut self) -> u64;

    /// Paths found so far.
    fn paths_found(&self) -> u64;

    /// Current simulation tick.
    fn current_tick(&self) -> Tick;
}
