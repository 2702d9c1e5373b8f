//! # antpath
//!
//! Ant-colony-optimization pathfinding on cost grids.
//!
//! Ants leave a home cell, wander the grid marking the cells they step on,
//! and when they bump into a site they walk their trail back home, marking
//! it more strongly. Over many ants the pheromone layer concentrates on
//! cheap routes between homes and sites.
//!
//! ## Quick Start
//!
//! ```rust
//! use antpath::prelude::*;
//!
//! // A 12x12 grid with one nest and one food source
//! let mut colony = ColonyBuilder::new()
//!     .with_grid(12, 12)
//!     .with_homes(vec![Cell::new(0, 0)])
//!     .with_sites(vec![Cell::new(11, 11)])
//!     .with_config(ColonyConfig {
//!         ant_lifetime: 150,
//!         half_life: 50,
//!         seed: 7,
//!         ..ColonyConfig::default()
//!     })
//!     .build()?;
//!
//! // Run the simulation
//! colony.run(300)?;
//!
//! let stats = colony.stats();
//! println!("{} paths found by {} ants", stats.paths_found, stats.total_spawned);
//!
//! for (cell, level) in colony.snapshot().strongest(5) {
//!     println!("{cell}: {level:.1}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! antpath is organized into several crates:
//!
//! - [`antpath_core`] - Shared types, strategies, errors, the `Agent` and `Substrate` traits
//! - [`antpath_agents`] - The `Ant` and its decision and loop strategies
//! - [`antpath_runtime`] - Grid substrate, colony scheduler, builder, snapshots
//!
//! ## Key Concepts
//!
//! ### Behaviour Primitives
//!
//! | Primitive | Biological Analog | What It Does |
//! |-----------|-------------------|--------------|
//! | SENSE | Antennae | Read the neighbouring cells |
//! | STIGMERGE | Trail pheromone | Mark cells, read marks left by others |
//! | APOPTOSE | Forager lifespan | Spend a tick budget, retire |
//!
//! ### Strategies
//!
//! - **Decision**: `standard` (pheromone plus noise, highest wins), `test`
//!   (same value, lowest wins), `random`
//! - **Loop handling**: `specials`, `avoidloop`, `forgetloop`,
//!   `avoidorforgetloop`

// Re-export all subcrates
pub use antpath_core as core;
pub use antpath_runtime as runtime;
pub use antpath_agents as agents;

/// Prelude module for convenient imports.
///
/// ```rust
/// use antpath::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use antpath_core::types::{
        AgentId, Cell, Position,
        AntState, Retirement, WalkOutcome,
        Tick,
    };
    pub use antpath_core::params::{Connectivity, PheromoneParams};
    pub use antpath_core::strategy::{DecisionStrategy, LoopStrategy};

    // Core traits
    pub use antpath_core::agent::Agent;
    pub use antpath_core::primitives::{Apoptose, Sense, Stigmerge};
    pub use antpath_core::substrate::Substrate;

    // Error types
    pub use antpath_core::error::{AntPathError, Result};

    // Agents
    pub use antpath_agents::ant::Ant;

    // Runtime
    pub use antpath_runtime::colony::{AntSnapshot, Colony, ColonyConfig, ColonyEvent, ColonyStats};
    pub use antpath_runtime::colony_builder::{BuilderError, ColonyBuilder};
    pub use antpath_runtime::grid::GridSubstrate;
    pub use antpath_runtime::snapshot::{load_snapshot, save_snapshot, PheromoneSnapshot};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
