//! The behaviour primitives.
//!
//! Each primitive is a Rust trait representing one thing every ant does.
//! Agents implement these traits to gain the behaviour.

pub mod apoptose;
pub mod sense;
pub mod stigmerge;

// Re-export all traits at the primitives level
pub use apoptose::Apoptose;
pub use sense::Sense;
pub use stigmerge::Stigmerge;
