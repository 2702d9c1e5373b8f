//! Ant Agent: the pathfinding walker.
//!
//! An ant leaves its home, walks the grid one cell per tick while marking
//! the cells it steps on, and keeps the cells it walked as a stack. When a
//! site shows up among its neighbours it turns around and walks the stack
//! back towards home, marking that trail more strongly. Terrain and
//! direction costs turn into ticks spent waiting.
//!
//! Biological analog: a forager laying a weak exploration trail on the
//! way out and a strong recruitment trail on the way back.

use crate::loops::random_escape;
use antpath_core::agent::Agent;
use antpath_core::error::{AgentError, Result};
use antpath_core::primitives::{Apoptose, Sense, Stigmerge};
use antpath_core::strategy::{DecisionStrategy, LoopStrategy};
use antpath_core::substrate::Substrate;
use antpath_core::types::*;
use tracing::{debug, trace};

/// A grid-walking ant.
#[derive(Debug, Clone)]
pub struct Ant {
    pub(crate) id: AgentId,
    pub(crate) home: Position,
    pub(crate) position: Position,
    /// Cells walked while searching, most recent on top.
    pub(crate) laststeps: Vec<Position>,
    /// Cells cut out of the trail for good (avoid-or-forget only).
    pub(crate) visitedsteps: Vec<Position>,
    /// One-step lookahead; `None` means undecided.
    pub(crate) nextstep: Option<Position>,
    /// The site this ant found, once it has.
    pub(crate) goal: Option<Cell>,
    /// Ticks to wait before the next move.
    pub(crate) penalty: f64,
    /// Found a site and walking back.
    pub(crate) done: bool,

    // Lifecycle
    ttl: u64,
    age_ticks: Tick,
    retirement: Option<Retirement>,

    // Behaviour, fixed at birth
    pub(crate) decision: DecisionStrategy,
    pub(crate) valid_position: LoopStrategy,
}

impl Ant {
    /// Create an ant at `home` with `ttl` ticks to live and default
    /// strategies. The ID is derived from `seed` (the colony's spawn counter).
    pub fn with_seed(home: Position, ttl: u64, seed: u64) -> Self {
        Self {
            id: AgentId::from_seed(seed),
            home,
            position: home,
            laststeps: Vec::new(),
            visitedsteps: Vec::new(),
            nextstep: None,
            goal: None,
            penalty: 0.0,
            done: false,
            ttl,
            age_ticks: 0,
            retirement: None,
            decision: DecisionStrategy::default(),
            valid_position: LoopStrategy::default(),
        }
    }

    /// Bind the decision and loop strategies.
    pub fn with_strategies(mut self, decision: DecisionStrategy, valid_position: LoopStrategy) -> Self {
        self.decision = decision;
        self.valid_position = valid_position;
        self
    }

    /// The walked trail, oldest first.
    pub fn laststeps(&self) -> &[Position] {
        &self.laststeps
    }

    /// Cells this ant will never step onto again by choice.
    pub fn visitedsteps(&self) -> &[Position] {
        &self.visitedsteps
    }

    /// The decided next step, if any.
    pub fn nextstep(&self) -> Option<Position> {
        self.nextstep
    }

    /// The site found, once the ant is returning.
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Whether the ant has found a site and is heading home.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Replace the trail (for testing/inspection).
    pub fn set_laststeps(&mut self, steps: Vec<Position>) {
        self.laststeps = steps;
    }

    /// Replace the denylist (for testing).
    pub fn set_visitedsteps(&mut self, steps: Vec<Position>) {
        self.visitedsteps = steps;
    }

    /// Teleport the ant (for testing).
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Decide on the next cell.
    ///
    /// The loop strategy runs first and may force a step (site found,
    /// dead end). Otherwise the decision strategy picks among what the
    /// loop strategy left. If nothing is left, a random cell of the sensed
    /// neighbourhood is taken, avoiding home when possible.
    pub fn choose(&mut self, substrate: &mut dyn Substrate) -> Result<()> {
        let mut candidates = self.sense(&*substrate)?;
        let sensed = candidates.clone();

        if self.has_positions(&mut candidates, substrate) {
            return Ok(());
        }

        let picked = if candidates.is_empty() {
            random_escape(&sensed, self.home.cell(), substrate.rng())
        } else {
            self.pick_a_position(&candidates, substrate)
        };
        self.nextstep = Some(picked.ok_or(AgentError::Undecided(self.id))?);
        Ok(())
    }

    /// Searching move: push the cell being left, step, mark lightly.
    fn step_forward(&mut self, next: Position, substrate: &mut dyn Substrate) -> Result<WalkOutcome> {
        self.laststeps.push(self.position);
        self.position = next;
        self.nextstep = None;
        self.paint(next.cell(), substrate.params().step_intensity, substrate)?;
        trace!(ant = %self.id, to = %next.cell(), "step");
        Ok(WalkOutcome::Moved { to: next.cell(), returning: false })
    }

    /// Returning move: step back along the trail, mark strongly.
    fn step_home(&mut self, next: Position, substrate: &mut dyn Substrate) -> Result<WalkOutcome> {
        self.position = next;
        if next.is_cell(self.home.cell()) {
            self.snuffit(Retirement::ReachedHome);
            debug!(ant = %self.id, age = self.age_ticks, "home reached");
            return Ok(WalkOutcome::Retired(Retirement::ReachedHome));
        }

        self.paint(next.cell(), substrate.params().path_intensity, substrate)?;
        trace!(ant = %self.id, to = %next.cell(), "return step");

        if self.laststeps.len() > 1 {
            self.nextstep = self.laststeps.pop();
            Ok(WalkOutcome::Moved { to: next.cell(), returning: true })
        } else {
            self.snuffit(Retirement::ReachedHome);
            debug!(ant = %self.id, age = self.age_ticks, "trail walked back");
            Ok(WalkOutcome::Retired(Retirement::ReachedHome))
        }
    }
}

// --- Trait Implementations ---

impl Sense for Ant {
    fn sense_position(&self) -> Position {
        self.position
    }

    fn came_from(&self) -> Option<Position> {
        self.laststeps.last().copied()
    }
}

impl Stigmerge for Ant {
    fn painter(&self) -> AgentId {
        self.id
    }
}

impl Apoptose for Ant {
    fn ttl(&self) -> u64 {
        self.ttl
    }

    fn expend_tick(&mut self) -> bool {
        self.age_ticks += 1;
        self.ttl = self.ttl.saturating_sub(1);
        if self.ttl == 0 {
            self.retirement.get_or_insert(Retirement::Expired);
            true
        } else {
            false
        }
    }

    fn snuffit(&mut self, cause: Retirement) {
        self.ttl = 0;
        self.retirement = Some(cause);
    }

    fn retirement(&self) -> Option<Retirement> {
        self.retirement
    }
}

impl Agent for Ant {
    fn id(&self) -> AgentId {
        self.id
    }

    fn home(&self) -> Cell {
        self.home.cell()
    }

    fn position(&self) -> Position {
        self.position
    }

    fn state(&self) -> AntState {
        if self.retirement.is_some() {
            AntState::Retired
        } else if self.penalty > 0.0 {
            AntState::Waiting
        } else if self.done {
            AntState::Returning
        } else {
            AntState::Searching
        }
    }

    fn agent_type(&self) -> &str {
        "ant"
    }

    fn walk(&mut self, substrate: &mut dyn Substrate) -> Result<WalkOutcome> {
        if let Some(cause) = self.retirement {
            return Ok(WalkOutcome::Retired(cause));
        }

        if self.expend_tick() {
            debug!(ant = %self.id, age = self.age_ticks, done = self.done, "time-to-live exhausted");
            return Ok(WalkOutcome::Retired(Retirement::Expired));
        }

        if self.nextstep.is_none() {
            self.choose(substrate)?;
        }

        if self.penalty > 0.0 {
            self.penalty = (self.penalty - 1.0).max(0.0);
            return Ok(WalkOutcome::Waiting { remaining: self.penalty });
        }

        let next = self.nextstep.take().ok_or(AgentError::Undecided(self.id))?;
        self.penalty += next.step_penalty();

        if self.done {
            self.step_home(next, substrate)
        } else {
            self.step_forward(next, substrate)
        }
    }

    fn age(&self) -> Tick {
        self.age_ticks
    }
}
