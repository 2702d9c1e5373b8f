//! # antpath Core
//!
//! Core traits and types for ant-colony pathfinding on cost grids.
//!
//! This crate defines the behaviour primitives every grid agent is built
//! from, along with shared types used across the entire workspace:
//!
//! - **SENSE**: Enumerate the neighbouring cells an agent may step onto
//! - **STIGMERGE**: Coordinate through the pheromone layer (paint)
//! - **APOPTOSE**: Age, expire, and retire (time-to-live)
//!
//! The [`substrate::Substrate`] trait is the only window an agent has on
//! the world: the cost surface, the pheromone layer, the special cells,
//! the seeded random stream and the path counter.
//!
//! ## Quick Start
//!
//! ```rust
//! use antpath_core::prelude::*;
//!
//! // A cell on the grid
//! let cell = Cell::new(2, 3);
//!
//! // Deterministic agent IDs (spawn order)
//! let id = AgentId::from_seed(42);
//! assert_eq!(id, AgentId::from_seed(42));
//!
//! // Strategy names fail fast
//! assert!("avoidloop".parse::<LoopStrategy>().is_ok());
//! assert!("sideways".parse::<LoopStrategy>().is_err());
//! # let _ = cell;
//! ```

pub mod primitives;
pub mod types;
pub mod params;
pub mod strategy;
pub mod agent;
pub mod substrate;
pub mod error;
pub mod prelude;
