//! Shared types used across all antpath crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an ant in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    /// Deterministic ID. The colony derives IDs from the spawn counter so
    /// that seeded runs are reproducible down to agent identity.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(0x616e_7470_6174_6800, seed))
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ant-{}", &self.0.simple().to_string()[24..])
    }
}

/// A grid index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A cell as seen from a neighbouring cell.
///
/// The substrate fills in the scratch fields when it enumerates
/// neighbours. Loop handling compares positions by cell only
/// (see [`Position::same_cell`]); the scratch values are a snapshot taken
/// at enumeration time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
    /// Extra cost of the step direction (0 for orthogonal steps).
    pub direction_penalty: f64,
    /// Cost surface value of the cell.
    pub cost: f64,
    /// Pheromone level of the cell when it was enumerated.
    pub score: f64,
    /// Site (goal) marker. Special cells are never painted.
    pub special: bool,
}

impl Position {
    /// A bare position with zeroed scratch fields.
    pub fn at(cell: Cell) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
            direction_penalty: 0.0,
            cost: 0.0,
            score: 0.0,
            special: false,
        }
    }

    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    /// Whether both positions name the same grid cell.
    pub fn same_cell(&self, other: &Position) -> bool {
        self.row == other.row && self.col == other.col
    }

    pub fn is_cell(&self, cell: Cell) -> bool {
        self.row == cell.row && self.col == cell.col
    }

    /// Total delay this step adds to the walker's penalty.
    pub fn step_penalty(&self) -> f64 {
        self.direction_penalty + self.cost
    }
}

impl From<Cell> for Position {
    fn from(cell: Cell) -> Self {
        Self::at(cell)
    }
}

/// Observable phase of an ant's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AntState {
    /// Walking the grid looking for a site.
    Searching,
    /// Paying off terrain or direction penalty before the next move.
    Waiting,
    /// Found a site, walking its trail back towards home.
    Returning,
    /// Terminal.
    Retired,
}

/// Why an ant left the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Retirement {
    /// Time-to-live ran out.
    Expired,
    /// Walked the found path back to its home.
    ReachedHome,
}

/// Outcome of a single `walk()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkOutcome {
    /// The ant stepped onto a new cell.
    Moved { to: Cell, returning: bool },
    /// The ant is paying penalty; `remaining` is what is left after this tick.
    Waiting { remaining: f64 },
    /// The ant is done and must be removed from the live set.
    Retired(Retirement),
}

impl WalkOutcome {
    pub fn is_retired(&self) -> bool {
        matches!(self, WalkOutcome::Retired(_))
    }
}

/// The current tick of the simulation.
pub type Tick = u64;
