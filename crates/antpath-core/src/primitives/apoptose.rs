//! APOPTOSE: Programmed retirement
//!
//! An ant carries a fixed budget of ticks. Every tick it walks spends one;
//! when the budget is gone the ant leaves the colony. An ant that has
//! brought its path home retires on its own, early.

use crate::types::Retirement;

/// Age, expire, and gracefully retire.
pub trait Apoptose {
    /// Remaining time-to-live in ticks.
    fn ttl(&self) -> u64;

    /// Spend one tick of the budget. Returns `true` once the budget is
    /// exhausted.
    fn expend_tick(&mut self) -> bool;

    /// Retire immediately.
    fn snuffit(&mut self, cause: Retirement);

    /// Why the agent retired, if it has.
    fn retirement(&self) -> Option<Retirement>;

    /// Whether the agent has left the colony.
    fn is_retired(&self) -> bool {
        self.retirement().is_some()
    }
}
