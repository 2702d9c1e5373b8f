//! # antpath Agents
//!
//! The ant, and the strategies it is built from.
//!
//! An [`Ant`](ant::Ant) implements SENSE + STIGMERGE + APOPTOSE and walks a
//! [`Substrate`](antpath_core::substrate::Substrate) one tick at a time:
//!
//! - **loop handling** ([`LoopStrategy`](antpath_core::strategy::LoopStrategy)): which sensed cells are allowed, and whether a site was found
//! - **decision** ([`DecisionStrategy`](antpath_core::strategy::DecisionStrategy)): which allowed cell to step onto

pub mod ant;
pub mod decision;
pub mod loops;
pub mod prelude;
