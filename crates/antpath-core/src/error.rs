//! Error types for antpath operations.
//!
//! Provides structured error handling instead of panics. Every variant
//! here is fatal for a run: configuration mistakes, out-of-bounds cells
//! and attempts to paint over a site are logic errors, not conditions to
//! retry around.

use crate::types::{AgentId, Cell};
use thiserror::Error;

/// Result type for antpath operations.
pub type Result<T> = std::result::Result<T, AntPathError>;

/// Errors that can occur during antpath operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AntPathError {
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Grid-related errors.
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
    /// Agent-related errors.
    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for AntPathError {
    fn from(e: std::io::Error) -> Self {
        AntPathError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AntPathError {
    fn from(e: serde_json::Error) -> Self {
        AntPathError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A strategy name outside the closed set.
    #[error("unknown {kind} strategy: {name:?} (expected one of {expected})")]
    UnknownStrategy {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },
    /// Invalid value.
    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Grid-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Cell lies outside the grid.
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    /// A layer does not match the grid shape.
    #[error("{layer} has {found} values, grid needs {expected}")]
    DimensionMismatch {
        layer: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Agent-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    /// Attempt to paint pheromone over a special (site) cell.
    #[error("{agent} must not paint over special cell {cell}")]
    NotAllowed { cell: Cell, agent: AgentId },
    /// An ant reached its move phase without a decided next step.
    #[error("{0} has no decided next step")]
    Undecided(AgentId),
}

// Convenience constructors
impl AntPathError {
    pub fn out_of_bounds(cell: Cell, rows: usize, cols: usize) -> Self {
        AntPathError::Grid(GridError::OutOfBounds { cell, rows, cols })
    }

    pub fn not_allowed(cell: Cell, agent: AgentId) -> Self {
        AntPathError::Agent(AgentError::NotAllowed { cell, agent })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        AntPathError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        })
    }
}
