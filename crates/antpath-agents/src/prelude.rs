//! antpath Agents Prelude: convenient imports for common usage.
//!
//! ```rust
//! use antpath_agents::prelude::*;
//! ```

// Re-export agent types
pub use crate::ant::Ant;

// Re-export from core
pub use antpath_core::prelude::*;
