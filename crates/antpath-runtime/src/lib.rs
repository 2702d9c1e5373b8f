//! # antpath Runtime
//!
//! Colony management, scheduling, and the concrete grid.
//!
//! The runtime is the "nest": it bears ants at their homes, runs the
//! tick-based simulation, and maintains the substrate (the grid with its
//! cost surface and pheromone layer).

pub mod grid;
pub mod colony;
pub mod colony_builder;
pub mod snapshot;
pub mod prelude;
