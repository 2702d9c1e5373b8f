//! antpath Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use antpath_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    AgentId, Cell, Position,
    AntState, Retirement, WalkOutcome,
    Tick,
};

pub use crate::params::{Connectivity, PheromoneParams};
pub use crate::strategy::{DecisionStrategy, LoopStrategy};

// Re-export the behaviour primitives
pub use crate::primitives::{Apoptose, Sense, Stigmerge};

// Re-export the Agent trait
pub use crate::agent::Agent;

// Re-export the Substrate trait
pub use crate::substrate::Substrate;

// Re-export error types
pub use crate::error::{AgentError, AntPathError, ConfigError, GridError, Result};
