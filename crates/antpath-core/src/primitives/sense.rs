//! SENSE: the local neighbourhood.
//!
//! An ant never sees the whole grid. Each decision starts from the cells
//! around it, as enumerated by the substrate, with their cost, pheromone
//! and site flag filled in at that moment.

use crate::error::Result;
use crate::substrate::Substrate;
use crate::types::*;

/// Detect the candidate cells around the agent.
pub trait Sense {
    /// The cell from which this agent senses.
    fn sense_position(&self) -> Position;

    /// The cell the agent must not step straight back onto, if any.
    fn came_from(&self) -> Option<Position>;

    /// Read the neighbourhood, minus the cell the agent just came from.
    ///
    /// When that leaves nothing (a dead end), the full neighbourhood is
    /// returned so the agent can always move.
    fn sense(&self, substrate: &dyn Substrate) -> Result<Vec<Position>> {
        let neighbours = substrate.neighbour_positions(self.sense_position().cell())?;
        let Some(back) = self.came_from() else {
            return Ok(neighbours);
        };
        let mut candidates = neighbours.clone();
        if let Some(idx) = candidates.iter().position(|p| p.same_cell(&back)) {
            candidates.remove(idx);
        }
        if candidates.is_empty() {
            Ok(neighbours)
        } else {
            Ok(candidates)
        }
    }
}
