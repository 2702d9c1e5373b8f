//! Colony builder with up-front validation.
//!
//! Collects the grid shape, cost surface, places and tuning, checks them
//! all before anything runs, and assembles a [`Colony`] on a seeded
//! [`GridSubstrate`].
//!
//! # Example
//!
//! ```rust
//! use antpath_core::types::Cell;
//! use antpath_runtime::colony_builder::ColonyBuilder;
//!
//! let mut colony = ColonyBuilder::new()
//!     .with_grid(5, 5)
//!     .with_homes(vec![Cell::new(0, 0)])
//!     .with_sites(vec![Cell::new(4, 4)])
//!     .build()?;
//!
//! colony.run(20)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::colony::{Colony, ColonyConfig};
use crate::grid::{cell_count, GridSubstrate, DEFAULT_DIAGONAL_PENALTY, MAX_CELLS};
use crate::snapshot::PheromoneSnapshot;
use antpath_core::error::AntPathError;
use antpath_core::params::{Connectivity, PheromoneParams};
use antpath_core::types::Cell;
use thiserror::Error;

/// Error type for colony builder operations.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The grid has fewer than two cells.
    #[error("grid {rows}x{cols} is too small, ants need at least two cells")]
    EmptyGrid { rows: usize, cols: usize },
    /// The grid has more cells than a substrate will allocate.
    #[error("grid {rows}x{cols} exceeds {max} cells", max = MAX_CELLS)]
    TooLarge { rows: usize, cols: usize },
    /// The cost surface does not match the grid.
    #[error("cost surface has {found} values, grid needs {expected}")]
    CostShape { expected: usize, found: usize },
    /// A home or site lies outside the grid.
    #[error("{role} {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { role: &'static str, cell: Cell, rows: usize, cols: usize },
    /// A cell is both a home and a site.
    #[error("cell {0} cannot be both a home and a site")]
    HomeOnSite(Cell),
    /// A resume snapshot does not fit the grid.
    #[error("snapshot is {found_rows}x{found_cols}, grid is {rows}x{cols}")]
    SnapshotShape { rows: usize, cols: usize, found_rows: usize, found_cols: usize },
    /// A resume snapshot was taken with different sites.
    #[error("snapshot sites {found:?} differ from the configured sites {expected:?}")]
    SnapshotSites { expected: Vec<Cell>, found: Vec<Cell> },
    /// Parameter validation failed.
    #[error(transparent)]
    Invalid(#[from] AntPathError),
}

/// Builder for creating colonies.
pub struct ColonyBuilder {
    rows: usize,
    cols: usize,
    costs: Option<Vec<f64>>,
    connectivity: Connectivity,
    diagonal_penalty: f64,
    params: PheromoneParams,
    homes: Vec<Cell>,
    sites: Vec<Cell>,
    resume: Option<PheromoneSnapshot>,
    colony_config: ColonyConfig,
}

impl Default for ColonyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColonyBuilder {
    /// Create a new colony builder with default settings (10x10 flat grid).
    pub fn new() -> Self {
        Self {
            rows: 10,
            cols: 10,
            costs: None,
            connectivity: Connectivity::default(),
            diagonal_penalty: DEFAULT_DIAGONAL_PENALTY,
            params: PheromoneParams::default(),
            homes: Vec::new(),
            sites: Vec::new(),
            resume: None,
            colony_config: ColonyConfig::default(),
        }
    }

    /// Set the grid shape.
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the cost surface, row-major.
    pub fn with_costs(mut self, costs: Vec<f64>) -> Self {
        self.costs = Some(costs);
        self
    }

    /// Set the neighbourhood.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the extra cost of diagonal steps.
    pub fn with_diagonal_penalty(mut self, penalty: f64) -> Self {
        self.diagonal_penalty = penalty;
        self
    }

    /// Set the pheromone tuning.
    pub fn with_pheromone(mut self, params: PheromoneParams) -> Self {
        self.params = params;
        self
    }

    /// Set the home cells (nests). Order is spawn order.
    pub fn with_homes(mut self, homes: Vec<Cell>) -> Self {
        self.homes = homes;
        self
    }

    /// Set the site cells (goals).
    pub fn with_sites(mut self, sites: Vec<Cell>) -> Self {
        self.sites = sites;
        self
    }

    /// Continue a saved run: its pheromone layer, tick and path count.
    ///
    /// The snapshot must match the grid shape and the configured sites.
    pub fn resume_from(mut self, snapshot: PheromoneSnapshot) -> Self {
        self.resume = Some(snapshot);
        self
    }

    /// Set the colony configuration for simulation parameters.
    pub fn with_config(mut self, config: ColonyConfig) -> Self {
        self.colony_config = config;
        self
    }

    /// Validate everything and assemble the colony.
    pub fn build(self) -> Result<Colony, BuilderError> {
        let (rows, cols) = (self.rows, self.cols);
        let Some(len) = cell_count(rows, cols) else {
            return Err(BuilderError::TooLarge { rows, cols });
        };
        if len < 2 {
            return Err(BuilderError::EmptyGrid { rows, cols });
        }
        self.params.validate()?;
        self.colony_config.validate()?;
        if !self.diagonal_penalty.is_finite() || self.diagonal_penalty < 0.0 {
            return Err(AntPathError::invalid_config(
                "diagonal_penalty",
                self.diagonal_penalty,
                "must be finite and not negative",
            )
            .into());
        }

        let in_bounds = |role: &'static str, cell: Cell| {
            if cell.row < rows && cell.col < cols {
                Ok(())
            } else {
                Err(BuilderError::OutOfBounds { role, cell, rows, cols })
            }
        };
        for &site in &self.sites {
            in_bounds("site", site)?;
        }
        for &home in &self.homes {
            in_bounds("home", home)?;
            if self.sites.contains(&home) {
                return Err(BuilderError::HomeOnSite(home));
            }
        }

        let mut grid = GridSubstrate::new(rows, cols, self.params, self.colony_config.seed)?
            .with_connectivity(self.connectivity, self.diagonal_penalty);
        if let Some(costs) = self.costs {
            if costs.len() != len {
                return Err(BuilderError::CostShape { expected: len, found: costs.len() });
            }
            grid.set_costs(costs)?;
        }
        for &site in &self.sites {
            grid.mark_site(site)?;
        }
        if let Some(snapshot) = self.resume {
            if (snapshot.rows, snapshot.cols) != (rows, cols) {
                return Err(BuilderError::SnapshotShape {
                    rows,
                    cols,
                    found_rows: snapshot.rows,
                    found_cols: snapshot.cols,
                });
            }
            let mut expected = self.sites.clone();
            let mut found = snapshot.sites.clone();
            for cells in [&mut expected, &mut found] {
                cells.sort();
                cells.dedup();
            }
            if expected != found {
                return Err(BuilderError::SnapshotSites { expected, found });
            }
            grid.load_pheromone(snapshot.values)?;
            grid.restore_counters(snapshot.tick, snapshot.paths_found);
        }

        let mut colony = Colony::from_config(grid, self.colony_config);
        for home in self.homes {
            colony.add_home(home)?;
        }
        Ok(colony)
    }
}
