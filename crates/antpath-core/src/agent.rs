//! Agent: the walker on the grid.
//!
//! Every agent is an ant: an isolated unit that senses its neighbourhood,
//! decides on a step and marks the substrate. The base Agent trait
//! requires the three behaviour primitives:
//! - SENSE: enumerate candidate cells
//! - STIGMERGE: paint the pheromone layer
//! - APOPTOSE: age and retire

use crate::error::Result;
use crate::primitives::{Apoptose, Sense, Stigmerge};
use crate::substrate::Substrate;
use crate::types::*;

/// The fundamental unit of the colony.
///
/// The colony calls [`Agent::walk`] once per tick, in spawn order, and
/// removes the agent as soon as it reports [`WalkOutcome::Retired`].
pub trait Agent: Sense + Stigmerge + Apoptose {
    /// The agent's unique identity.
    fn id(&self) -> AgentId;

    /// The cell the agent was born on.
    fn home(&self) -> Cell;

    /// The agent's current cell.
    fn position(&self) -> Position;

    /// Current lifecycle phase.
    fn state(&self) -> AntState;

    /// The agent's type name (for display and logging).
    fn agent_type(&self) -> &str;

    /// Execute one tick of the agent's lifecycle.
    ///
    /// Each tick, the agent:
    /// 1. Ages (and may expire)
    /// 2. Decides on its next cell if it has none
    /// 3. Either waits off penalty or moves and paints
    fn walk(&mut self, substrate: &mut dyn Substrate) -> Result<WalkOutcome>;

    /// How many ticks this agent has walked.
    fn age(&self) -> Tick;
}
