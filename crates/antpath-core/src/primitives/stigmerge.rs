//! STIGMERGE: Stigmergy
//!
//! Ants coordinate without talking to each other. Each one leaves
//! pheromone on the cells it walks; the accumulated layer changes what the
//! next ants smell, and so where they go.
//!
//! **The trail under construction is simultaneously the product, the
//! plan, and the communication medium.**

use crate::error::{AntPathError, Result};
use crate::substrate::Substrate;
use crate::types::*;

/// Coordinate through the pheromone layer.
pub trait Stigmerge {
    /// Identity reported when a paint is refused.
    fn painter(&self) -> AgentId;

    /// Add `value` to the pheromone at `cell`.
    ///
    /// Sites are never painted: the call fails with
    /// `AgentError::NotAllowed` and leaves the layer untouched. The
    /// increment is applied only when `max_pheromone - value > current`;
    /// otherwise nothing at all is added (no partial amount, no clamp).
    ///
    /// Returns whether the layer changed.
    fn paint(&self, cell: Cell, value: f64, substrate: &mut dyn Substrate) -> Result<bool> {
        substrate.check_bounds(cell)?;
        if substrate.is_special(cell) {
            return Err(AntPathError::not_allowed(cell, self.painter()));
        }
        let current = substrate.pheromone(cell)?;
        if substrate.params().max_pheromone - value > current {
            substrate.set_pheromone(cell, current + value)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
