//! Loop handling: which of the sensed cells an ant may consider.
//!
//! Every strategy also scans the surviving candidates for a site. Finding
//! one turns the ant around: the path counter goes up and the next step
//! becomes the top of the trail stack.

use crate::ant::Ant;
use antpath_core::strategy::LoopStrategy;
use antpath_core::substrate::Substrate;
use antpath_core::types::{Cell, Position};
use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::{debug, trace};

impl Ant {
    /// Filter `candidates` in place according to the ant's loop strategy.
    ///
    /// Returns `true` when the strategy has already decided the next step
    /// (a site was found, or every candidate was filtered out and a random
    /// escape was taken). Otherwise `candidates` holds what is left for
    /// the decision strategy; it may be empty.
    pub fn has_positions(&mut self, candidates: &mut Vec<Position>, substrate: &mut dyn Substrate) -> bool {
        match self.valid_position {
            LoopStrategy::Specials => self.search_specials(candidates, substrate),
            LoopStrategy::AvoidLoop => self.avoid_loop(candidates, substrate),
            LoopStrategy::ForgetLoop => self.forget_loop(candidates, substrate),
            LoopStrategy::AvoidOrForgetLoop => self.avoid_or_forget_loop(candidates, substrate),
        }
    }

    /// Goal scan: the first site that is not home ends the search.
    fn search_specials(&mut self, candidates: &[Position], substrate: &mut dyn Substrate) -> bool {
        let home = self.home.cell();
        match candidates.iter().find(|p| p.special && !p.is_cell(home)) {
            Some(site) => {
                self.found_site(site.cell(), substrate);
                true
            }
            None => false,
        }
    }

    fn found_site(&mut self, site: Cell, substrate: &mut dyn Substrate) {
        let total = substrate.record_path();
        self.done = true;
        self.goal = Some(site);
        self.nextstep = Some(self.laststeps.pop().unwrap_or(self.home));
        debug!(
            ant = %self.id,
            site = %site,
            trail = self.laststeps.len() + 1,
            paths = total,
            "site found, heading home"
        );
    }

    /// Never step onto a cell already on the trail.
    fn avoid_loop(&mut self, candidates: &mut Vec<Position>, substrate: &mut dyn Substrate) -> bool {
        let sensed = candidates.clone();
        let trail = &self.laststeps;
        candidates.retain(|p| !trail.iter().any(|s| s.same_cell(p)));

        if candidates.is_empty() {
            trace!(ant = %self.id, "boxed in by own trail");
            self.nextstep = random_escape(&sensed, self.home.cell(), substrate.rng());
            return self.nextstep.is_some();
        }
        self.search_specials(candidates, substrate)
    }

    /// Cut loops out of the trail as soon as the ant closes one.
    fn forget_loop(&mut self, candidates: &mut Vec<Position>, substrate: &mut dyn Substrate) -> bool {
        self.forget_shortcut(candidates);
        let home = self.home.cell();
        candidates.retain(|p| !(p.special && p.is_cell(home)));
        self.search_specials(candidates, substrate)
    }

    /// Cut loops like `forget_loop`, and avoid the cut cells for good.
    fn avoid_or_forget_loop(&mut self, candidates: &mut Vec<Position>, substrate: &mut dyn Substrate) -> bool {
        let sensed = candidates.clone();
        for step in self.forget_shortcut(candidates) {
            if !self.visitedsteps.iter().any(|v| v.same_cell(&step)) {
                self.visitedsteps.push(step);
            }
        }

        let visited = &self.visitedsteps;
        candidates.retain(|p| !visited.iter().any(|v| v.same_cell(p)));

        if candidates.is_empty() {
            trace!(ant = %self.id, "boxed in by forgotten cells");
            self.nextstep = random_escape(&sensed, self.home.cell(), substrate.rng());
            return self.nextstep.is_some();
        }
        self.search_specials(candidates, substrate)
    }

    /// Look for the oldest trail cell (top excluded) that is adjacent
    /// again. If there is one, drop it and everything after it from the
    /// trail, drop it from `candidates`, and carry its direction penalty
    /// over to the new top of the trail.
    ///
    /// Returns the steps that were cut, oldest first.
    fn forget_shortcut(&mut self, candidates: &mut Vec<Position>) -> Vec<Position> {
        let scan = self.laststeps.len().saturating_sub(1);
        for i in 0..scan {
            let step = self.laststeps[i];
            let Some(idx) = candidates.iter().position(|p| p.same_cell(&step)) else {
                continue;
            };
            candidates.remove(idx);
            let cut = self.laststeps.split_off(i);
            if let Some(top) = self.laststeps.last_mut() {
                top.direction_penalty = step.direction_penalty;
            }
            trace!(ant = %self.id, at = %step.cell(), cut = cut.len(), "loop forgotten");
            return cut;
        }
        Vec::new()
    }
}

/// Pick uniformly among `options`, steering clear of `home` unless it is
/// the only way out.
pub(crate) fn random_escape(options: &[Position], home: Cell, rng: &mut dyn RngCore) -> Option<Position> {
    let away: Vec<Position> = options.iter().filter(|p| !p.is_cell(home)).copied().collect();
    if away.is_empty() {
        options.choose(rng).copied()
    } else {
        away.choose(rng).copied()
    }
}
