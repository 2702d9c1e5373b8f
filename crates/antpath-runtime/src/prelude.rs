//! antpath Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use antpath_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{AntSnapshot, Colony, ColonyConfig, ColonyEvent, ColonyStats};

// Re-export colony builder
pub use crate::colony_builder::{BuilderError, ColonyBuilder};

// Re-export the grid
pub use crate::grid::{GridSubstrate, DEFAULT_DIAGONAL_PENALTY};

// Re-export snapshots
pub use crate::snapshot::{load_snapshot, save_snapshot, PheromoneSnapshot};

// Re-export from agents
pub use antpath_agents::prelude::*;
