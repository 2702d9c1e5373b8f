//! Concrete implementation of the Substrate trait.
//!
//! In-memory grid with:
//! - Cost surface and pheromone layer stored row-major in flat `Vec<f64>`s
//! - Site cells kept both as a mask (lookups) and as a list (stable order)
//! - A seeded ChaCha stream shared by every ant, so a seed fixes the run

use antpath_core::error::{AntPathError, GridError, Result};
use antpath_core::params::{Connectivity, PheromoneParams};
use antpath_core::substrate::Substrate;
use antpath_core::types::*;
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Default extra cost of a diagonal step (√2 − 1).
pub const DEFAULT_DIAGONAL_PENALTY: f64 = std::f64::consts::SQRT_2 - 1.0;

/// Largest grid (in cells) a substrate will allocate.
pub const MAX_CELLS: usize = 1 << 26;

/// Number of cells in a `rows x cols` grid, if it is within [`MAX_CELLS`].
pub fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols).filter(|&len| len <= MAX_CELLS)
}

/// In-memory grid substrate.
///
/// The cost surface is static for the lifetime of a run; the pheromone
/// layer is mutated in place by the ants and by volatilization.
pub struct GridSubstrate {
    rows: usize,
    cols: usize,
    costs: Vec<f64>,
    pheromone: Vec<f64>,
    special: Vec<bool>,
    sites: Vec<Cell>,
    params: PheromoneParams,
    connectivity: Connectivity,
    diagonal_penalty: f64,
    rng: ChaCha12Rng,
    paths_found: u64,
    tick: Tick,
}

impl GridSubstrate {
    /// A flat (zero-cost) grid with the pheromone layer at its floor.
    pub fn new(rows: usize, cols: usize, params: PheromoneParams, seed: u64) -> Result<Self> {
        params.validate()?;
        let Some(len) = cell_count(rows, cols) else {
            return Err(AntPathError::invalid_config(
                "grid",
                format!("{rows}x{cols}"),
                format!("exceeds {MAX_CELLS} cells"),
            ));
        };
        if len < 2 {
            return Err(AntPathError::invalid_config(
                "grid",
                format!("{rows}x{cols}"),
                "needs at least two cells",
            ));
        }
        Ok(Self {
            rows,
            cols,
            costs: vec![0.0; len],
            pheromone: vec![params.min_pheromone; len],
            special: vec![false; len],
            sites: Vec::new(),
            params,
            connectivity: Connectivity::default(),
            diagonal_penalty: DEFAULT_DIAGONAL_PENALTY,
            rng: ChaCha12Rng::seed_from_u64(seed),
            paths_found: 0,
            tick: 0,
        })
    }

    /// Set the neighbourhood and the extra cost of diagonal steps.
    pub fn with_connectivity(mut self, connectivity: Connectivity, diagonal_penalty: f64) -> Self {
        self.connectivity = connectivity;
        self.diagonal_penalty = diagonal_penalty;
        self
    }

    /// Replace the cost surface (row-major, `rows * cols` values).
    pub fn set_costs(&mut self, costs: Vec<f64>) -> Result<()> {
        if costs.len() != self.costs.len() {
            return Err(GridError::DimensionMismatch {
                layer: "cost surface",
                expected: self.costs.len(),
                found: costs.len(),
            }
            .into());
        }
        if let Some(bad) = costs.iter().find(|c| !c.is_finite() || **c < 0.0) {
            return Err(AntPathError::invalid_config("costs", bad, "must be finite and not negative"));
        }
        self.costs = costs;
        Ok(())
    }

    /// Mark a cell as a site. Marking twice is a no-op.
    pub fn mark_site(&mut self, cell: Cell) -> Result<()> {
        let idx = self.index(cell)?;
        if !self.special[idx] {
            self.special[idx] = true;
            self.sites.push(cell);
        }
        Ok(())
    }

    /// Overwrite the whole pheromone layer, e.g. to resume from a snapshot.
    ///
    /// Every value must lie within `[min_pheromone, max_pheromone]`.
    pub fn load_pheromone(&mut self, values: Vec<f64>) -> Result<()> {
        if values.len() != self.pheromone.len() {
            return Err(GridError::DimensionMismatch {
                layer: "pheromone layer",
                expected: self.pheromone.len(),
                found: values.len(),
            }
            .into());
        }
        let (floor, ceiling) = (self.params.min_pheromone, self.params.max_pheromone);
        if let Some(bad) = values.iter().find(|v| !(floor..=ceiling).contains(*v)) {
            return Err(AntPathError::invalid_config(
                "pheromone",
                bad,
                format!("must lie within [{floor}, {ceiling}]"),
            ));
        }
        self.pheromone = values;
        Ok(())
    }

    /// Continue the clock and path counter of an earlier run.
    pub fn restore_counters(&mut self, tick: Tick, paths_found: u64) {
        self.tick = tick;
        self.paths_found = paths_found;
    }

    /// Decay the pheromone layer towards its floor.
    ///
    /// Every non-special cell becomes `min + (v - min) * 0.5^(1/half_life)`.
    /// A half-life of zero disables decay.
    pub fn volatilize(&mut self, half_life: u64) {
        if half_life == 0 {
            return;
        }
        let factor = 0.5f64.powf(1.0 / half_life as f64);
        let floor = self.params.min_pheromone;
        for (value, special) in self.pheromone.iter_mut().zip(&self.special) {
            if !*special {
                *value = floor + (*value - floor) * factor;
            }
        }
    }

    /// Advance the simulation clock by one tick.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }

    /// The pheromone layer, row-major.
    pub fn pheromone_layer(&self) -> &[f64] {
        &self.pheromone
    }

    /// Site cells in the order they were marked.
    pub fn sites(&self) -> &[Cell] {
        &self.sites
    }

    /// Highest pheromone level currently on the grid.
    pub fn max_pheromone_seen(&self) -> f64 {
        self.pheromone.iter().copied().fold(self.params.min_pheromone, f64::max)
    }

    fn index(&self, cell: Cell) -> Result<usize> {
        self.check_bounds(cell)?;
        Ok(cell.row * self.cols + cell.col)
    }
}

impl Substrate for GridSubstrate {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn position(&self, cell: Cell) -> Result<Position> {
        let idx = self.index(cell)?;
        Ok(Position {
            row: cell.row,
            col: cell.col,
            direction_penalty: 0.0,
            cost: self.costs[idx],
            score: self.pheromone[idx],
            special: self.special[idx],
        })
    }

    fn neighbour_positions(&self, cell: Cell) -> Result<Vec<Position>> {
        self.check_bounds(cell)?;
        let offsets = self.connectivity.offsets();
        let mut out = Vec::with_capacity(offsets.len());
        for &(dr, dc) in offsets {
            let (Some(row), Some(col)) = (
                cell.row.checked_add_signed(dr),
                cell.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            let next = Cell::new(row, col);
            if !self.contains(next) {
                continue;
            }
            let mut pos = self.position(next)?;
            if dr != 0 && dc != 0 {
                pos.direction_penalty = self.diagonal_penalty;
            }
            out.push(pos);
        }
        Ok(out)
    }

    fn pheromone(&self, cell: Cell) -> Result<f64> {
        Ok(self.pheromone[self.index(cell)?])
    }

    fn set_pheromone(&mut self, cell: Cell, value: f64) -> Result<()> {
        let idx = self.index(cell)?;
        self.pheromone[idx] = value;
        Ok(())
    }

    fn is_special(&self, cell: Cell) -> bool {
        self.contains(cell) && self.special[cell.row * self.cols + cell.col]
    }

    fn params(&self) -> &PheromoneParams {
        &self.params
    }

    fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }

    fn record_path(&mut self) -> u64 {
        self.paths_found += 1;
        self.paths_found
    }

    fn paths_found(&self) -> u64 {
        self.paths_found
    }

    fn current_tick(&self) -> Tick {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize) -> GridSubstrate {
        GridSubstrate::new(rows, cols, PheromoneParams::default(), 7).unwrap()
    }

    #[test]
    fn corner_has_three_moore_neighbours_in_row_major_order() {
        let g = grid(3, 3);
        let cells: Vec<Cell> = g
            .neighbour_positions(Cell::new(0, 0))
            .unwrap()
            .iter()
            .map(|p| p.cell())
            .collect();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn diagonal_steps_carry_the_direction_penalty() {
        let g = grid(3, 3).with_connectivity(Connectivity::Eight, 0.5);
        for p in g.neighbour_positions(Cell::new(1, 1)).unwrap() {
            let diagonal = p.row != 1 && p.col != 1;
            let expected = if diagonal { 0.5 } else { 0.0 };
            assert_eq!(p.direction_penalty, expected, "penalty at {}", p.cell());
        }
    }

    #[test]
    fn von_neumann_neighbourhood_skips_diagonals() {
        let g = grid(3, 3).with_connectivity(Connectivity::Four, 0.5);
        let n = g.neighbour_positions(Cell::new(1, 1)).unwrap();
        assert_eq!(n.len(), 4);
        assert!(n.iter().all(|p| p.direction_penalty == 0.0));
    }

    #[test]
    fn out_of_bounds_cells_are_errors() {
        let g = grid(2, 2);
        assert!(g.position(Cell::new(2, 0)).is_err());
        assert!(g.neighbour_positions(Cell::new(0, 5)).is_err());
        assert!(!g.is_special(Cell::new(9, 9)));
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        assert!(GridSubstrate::new(1, 1, PheromoneParams::default(), 0).is_err());
        assert!(GridSubstrate::new(0, 10, PheromoneParams::default(), 0).is_err());
    }

    #[test]
    fn oversized_grid_is_rejected_before_allocating() {
        assert!(GridSubstrate::new(usize::MAX, 2, PheromoneParams::default(), 0).is_err());
        assert!(GridSubstrate::new(1 << 20, 1 << 20, PheromoneParams::default(), 0).is_err());
        assert_eq!(cell_count(3, 4), Some(12));
    }

    #[test]
    fn loaded_layer_must_stay_within_floor_and_ceiling() {
        let params = PheromoneParams { min_pheromone: 1.0, max_pheromone: 10.0, ..PheromoneParams::default() };
        let mut g = GridSubstrate::new(1, 2, params, 0).unwrap();
        for bad in [f64::NAN, -1.0, 0.5, 10.5, f64::INFINITY] {
            assert!(g.load_pheromone(vec![2.0, bad]).is_err(), "{bad} should be refused");
        }
        assert_eq!(g.pheromone_layer(), &[1.0, 1.0], "a refused layer leaves the grid alone");

        g.load_pheromone(vec![1.0, 10.0]).unwrap();
        assert_eq!(g.pheromone_layer(), &[1.0, 10.0]);
    }

    #[test]
    fn restored_counters_continue_the_run() {
        let mut g = grid(2, 2);
        g.restore_counters(40, 8);
        g.advance_tick();
        assert_eq!(g.current_tick(), 41);
        assert_eq!(g.record_path(), 9);
    }

    #[test]
    fn cost_surface_must_match_shape() {
        let mut g = grid(2, 3);
        assert!(g.set_costs(vec![1.0; 5]).is_err());
        assert!(g.set_costs(vec![1.0, 2.0, -1.0, 0.0, 0.0, 0.0]).is_err());
        g.set_costs(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(g.position(Cell::new(1, 2)).unwrap().cost, 5.0);
    }

    #[test]
    fn volatilization_halves_after_half_life_and_spares_sites() {
        let mut g = grid(2, 2);
        g.mark_site(Cell::new(1, 1)).unwrap();
        g.set_pheromone(Cell::new(0, 0), 64.0).unwrap();
        g.set_pheromone(Cell::new(1, 1), 64.0).unwrap();
        for _ in 0..4 {
            g.volatilize(4);
        }
        let decayed = g.pheromone(Cell::new(0, 0)).unwrap();
        assert!((decayed - 32.0).abs() < 1e-9, "expected 32, got {decayed}");
        assert_eq!(g.pheromone(Cell::new(1, 1)).unwrap(), 64.0);
    }

    #[test]
    fn volatilization_never_drops_below_floor() {
        let params = PheromoneParams { min_pheromone: 5.0, ..PheromoneParams::default() };
        let mut g = GridSubstrate::new(2, 2, params, 0).unwrap();
        g.set_pheromone(Cell::new(0, 1), 6.0).unwrap();
        for _ in 0..200 {
            g.volatilize(1);
        }
        assert!(g.pheromone_layer().iter().all(|v| *v >= 5.0));
    }

    #[test]
    fn marking_a_site_twice_keeps_one_entry() {
        let mut g = grid(3, 3);
        g.mark_site(Cell::new(2, 2)).unwrap();
        g.mark_site(Cell::new(2, 2)).unwrap();
        assert_eq!(g.sites(), &[Cell::new(2, 2)]);
        assert!(g.position(Cell::new(2, 2)).unwrap().special);
    }
}
