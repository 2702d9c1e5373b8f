//! Colony: ant lifecycle management.
//!
//! The colony is the nest. It bears ants at their homes, runs the
//! tick-based simulation loop, and owns the grid every ant walks on.
//!
//! Each tick:
//! 1. Every home bears new ants, up to the population cap
//! 2. Every live ant walks once, in birth order
//! 3. Retired ants are removed
//! 4. The pheromone layer volatilizes
//! 5. The tick counter advances; checkpoints are signalled

use crate::grid::GridSubstrate;
use crate::snapshot::PheromoneSnapshot;
use antpath_agents::ant::Ant;
use antpath_core::agent::Agent;
use antpath_core::error::{AntPathError, Result};
use antpath_core::primitives::Apoptose;
use antpath_core::strategy::{DecisionStrategy, LoopStrategy};
use antpath_core::substrate::Substrate;
use antpath_core::types::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Event emitted by the colony during simulation.
#[derive(Debug, Clone, Serialize)]
pub enum ColonyEvent {
    /// An ant was born at a home.
    Born { id: AgentId, home: Cell },
    /// An ant stepped onto a new cell.
    Moved { id: AgentId, to: Cell, returning: bool },
    /// An ant spent the tick paying penalty.
    Waiting { id: AgentId, remaining: f64 },
    /// An ant reached a site and turned around.
    PathFound { id: AgentId, site: Cell, paths_found: u64 },
    /// An ant left the colony.
    Retired { id: AgentId, cause: Retirement, age: Tick },
    /// The tick is a checkpoint; the pheromone layer should be exported.
    Checkpoint { tick: Tick },
    /// A tick completed.
    TickComplete { tick: Tick, alive: usize, retired_this_tick: usize },
}

/// Statistics about the colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonyStats {
    pub tick: Tick,
    pub ants_alive: usize,
    pub total_spawned: usize,
    pub retired_expired: usize,
    pub retired_returned: usize,
    pub paths_found: u64,
    pub max_pheromone_seen: f64,
}

/// A serializable view of one live ant.
#[derive(Debug, Clone, Serialize)]
pub struct AntSnapshot {
    pub id: AgentId,
    pub home: Cell,
    pub position: Cell,
    pub state: AntState,
    pub age: Tick,
    pub trail_len: usize,
}

/// Configuration for colony simulation parameters.
///
/// Use with `Colony::from_config()` or `ColonyBuilder::with_config()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// Decision strategy for every ant born (default: standard).
    #[serde(default)]
    pub decision: DecisionStrategy,
    /// Loop strategy for every ant born (default: avoidloop).
    #[serde(default)]
    pub valid_position: LoopStrategy,
    /// Time-to-live of a newborn ant, in ticks (default: 200).
    #[serde(default = "default_ant_lifetime")]
    pub ant_lifetime: u64,
    /// Live population cap for auto-spawning (default: 50).
    #[serde(default = "default_max_ants")]
    pub max_ants: usize,
    /// Ants each home bears per tick; 0 disables auto-spawning (default: 1).
    #[serde(default = "default_spawn_per_round")]
    pub spawn_per_round: usize,
    /// Pheromone half-life in ticks; 0 disables volatilization (default: 0).
    #[serde(default)]
    pub half_life: u64,
    /// Emit a checkpoint every N ticks; 0 disables checkpoints (default: 0).
    #[serde(default)]
    pub checkpoint_interval: u64,
    /// Seed of the run's random stream (default: 42).
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_ant_lifetime() -> u64 { 200 }
fn default_max_ants() -> usize { 50 }
fn default_spawn_per_round() -> usize { 1 }
fn default_seed() -> u64 { 42 }

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            decision: DecisionStrategy::default(),
            valid_position: LoopStrategy::default(),
            ant_lifetime: default_ant_lifetime(),
            max_ants: default_max_ants(),
            spawn_per_round: default_spawn_per_round(),
            half_life: 0,
            checkpoint_interval: 0,
            seed: default_seed(),
        }
    }
}

impl ColonyConfig {
    /// Reject configurations no ant could live under.
    pub fn validate(&self) -> Result<()> {
        if self.ant_lifetime == 0 {
            return Err(AntPathError::invalid_config("ant_lifetime", 0, "must be at least 1 tick"));
        }
        Ok(())
    }
}

/// The colony: manages ant lifecycle and simulation.
pub struct Colony {
    substrate: GridSubstrate,
    ants: Vec<Ant>,
    homes: Vec<Cell>,
    total_spawned: usize,
    retired_expired: usize,
    retired_returned: usize,
    config: ColonyConfig,
}

impl Colony {
    /// Create a colony on `substrate` with default configuration.
    pub fn new(substrate: GridSubstrate) -> Self {
        Self::from_config(substrate, ColonyConfig::default())
    }

    /// Create a colony on `substrate` with the specified configuration.
    ///
    /// The substrate's random stream is used as is; `config.seed` only
    /// applies when the grid is built through `ColonyBuilder`.
    pub fn from_config(substrate: GridSubstrate, config: ColonyConfig) -> Self {
        Self {
            substrate,
            ants: Vec::new(),
            homes: Vec::new(),
            total_spawned: 0,
            retired_expired: 0,
            retired_returned: 0,
            config,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Register a home cell for auto-spawning.
    pub fn add_home(&mut self, cell: Cell) -> Result<()> {
        self.check_home(cell)?;
        if !self.homes.contains(&cell) {
            self.homes.push(cell);
        }
        Ok(())
    }

    /// Bear one ant at `cell` with the configured lifetime and strategies.
    ///
    /// The ant joins the end of the walk order.
    pub fn bear(&mut self, cell: Cell) -> Result<AgentId> {
        self.config.validate()?;
        self.check_home(cell)?;
        let home = self.substrate.position(cell)?;
        let ant = Ant::with_seed(home, self.config.ant_lifetime, self.total_spawned as u64)
            .with_strategies(self.config.decision, self.config.valid_position);
        let id = ant.id();
        self.total_spawned += 1;
        self.ants.push(ant);
        debug!(ant = %id, home = %cell, "ant born");
        Ok(id)
    }

    fn check_home(&self, cell: Cell) -> Result<()> {
        self.substrate.check_bounds(cell)?;
        if self.substrate.is_special(cell) {
            return Err(AntPathError::invalid_config("home", cell, "a site cannot be a home"));
        }
        Ok(())
    }

    /// Run a single tick.
    ///
    /// Any error aborts the tick immediately; the colony is left as it
    /// was at the failing ant.
    pub fn tick(&mut self) -> Result<Vec<ColonyEvent>> {
        let mut events = Vec::new();

        // Phase 1: Homes bear new ants
        if self.config.spawn_per_round > 0 {
            for i in 0..self.homes.len() {
                let home = self.homes[i];
                for _ in 0..self.config.spawn_per_round {
                    if self.ants.len() >= self.config.max_ants {
                        break;
                    }
                    let id = self.bear(home)?;
                    events.push(ColonyEvent::Born { id, home });
                }
            }
        }

        // Phase 2: Every ant walks, in birth order
        let mut retired_this_tick = 0;
        for ant in self.ants.iter_mut() {
            let was_done = ant.is_done();
            let outcome = ant.walk(&mut self.substrate)?;

            if !was_done {
                if let Some(site) = ant.goal() {
                    events.push(ColonyEvent::PathFound {
                        id: ant.id(),
                        site,
                        paths_found: self.substrate.paths_found(),
                    });
                }
            }

            match outcome {
                WalkOutcome::Moved { to, returning } => {
                    events.push(ColonyEvent::Moved { id: ant.id(), to, returning });
                }
                WalkOutcome::Waiting { remaining } => {
                    events.push(ColonyEvent::Waiting { id: ant.id(), remaining });
                }
                WalkOutcome::Retired(cause) => {
                    retired_this_tick += 1;
                    match cause {
                        Retirement::Expired => self.retired_expired += 1,
                        Retirement::ReachedHome => self.retired_returned += 1,
                    }
                    trace!(ant = %ant.id(), ?cause, "ant retired");
                    events.push(ColonyEvent::Retired { id: ant.id(), cause, age: ant.age() });
                }
            }
        }

        // Phase 3: Remove the retired
        self.ants.retain(|a| !a.is_retired());

        // Phase 4: Pheromone decay
        self.substrate.volatilize(self.config.half_life);

        // Phase 5: Advance tick
        self.substrate.advance_tick();
        let tick = self.substrate.current_tick();

        let interval = self.config.checkpoint_interval;
        if interval > 0 && tick % interval == 0 {
            info!(
                tick,
                alive = self.ants.len(),
                paths = self.substrate.paths_found(),
                "checkpoint"
            );
            events.push(ColonyEvent::Checkpoint { tick });
        }

        events.push(ColonyEvent::TickComplete {
            tick,
            alive: self.ants.len(),
            retired_this_tick,
        });

        Ok(events)
    }

    /// Run the simulation for N ticks. The first error stops the run.
    pub fn run(&mut self, ticks: u64) -> Result<Vec<Vec<ColonyEvent>>> {
        let mut all_events = Vec::new();
        for _ in 0..ticks {
            all_events.push(self.tick()?);
        }
        let stats = self.stats();
        info!(
            tick = stats.tick,
            paths = stats.paths_found,
            spawned = stats.total_spawned,
            "run complete"
        );
        Ok(all_events)
    }

    /// Get colony statistics.
    pub fn stats(&self) -> ColonyStats {
        ColonyStats {
            tick: self.substrate.current_tick(),
            ants_alive: self.ants.len(),
            total_spawned: self.total_spawned,
            retired_expired: self.retired_expired,
            retired_returned: self.retired_returned,
            paths_found: self.substrate.paths_found(),
            max_pheromone_seen: self.substrate.max_pheromone_seen(),
        }
    }

    /// Get a reference to the substrate.
    pub fn substrate(&self) -> &GridSubstrate {
        &self.substrate
    }

    /// Get a mutable reference to the substrate.
    pub fn substrate_mut(&mut self) -> &mut GridSubstrate {
        &mut self.substrate
    }

    /// Number of ants currently alive.
    pub fn alive_count(&self) -> usize {
        self.ants.len()
    }

    /// Live ants in walk order.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Per-ant view of the live population.
    pub fn ant_snapshots(&self) -> Vec<AntSnapshot> {
        self.ants
            .iter()
            .map(|a| AntSnapshot {
                id: a.id(),
                home: Agent::home(a),
                position: a.position().cell(),
                state: a.state(),
                age: a.age(),
                trail_len: a.laststeps().len(),
            })
            .collect()
    }

    /// Take a serializable snapshot of the pheromone layer.
    pub fn snapshot(&self) -> PheromoneSnapshot {
        PheromoneSnapshot {
            tick: self.substrate.current_tick(),
            rows: self.substrate.rows(),
            cols: self.substrate.cols(),
            values: self.substrate.pheromone_layer().to_vec(),
            sites: self.substrate.sites().to_vec(),
            homes: self.homes.clone(),
            paths_found: self.substrate.paths_found(),
        }
    }
}
