//! Decision strategies: picking one cell out of the allowed candidates.
//!
//! The weighted strategies blend what the ant smells with a random draw:
//!
//! ```text
//! value = score / random_weight + U(0, max_pheromone) / phero_weight
//! ```
//!
//! One draw per candidate, in candidate order, from the substrate's
//! random stream.

use crate::ant::Ant;
use antpath_core::params::PheromoneParams;
use antpath_core::strategy::DecisionStrategy;
use antpath_core::substrate::Substrate;
use antpath_core::types::Position;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

impl Ant {
    /// Pick the next step among `candidates` and store it as `nextstep`.
    ///
    /// Returns `None` (and leaves `nextstep` alone) only when `candidates`
    /// is empty.
    pub fn pick_a_position(&mut self, candidates: &[Position], substrate: &mut dyn Substrate) -> Option<Position> {
        let picked = match self.decision {
            DecisionStrategy::Standard => strongest(candidates, substrate),
            DecisionStrategy::Random => candidates.choose(substrate.rng()).copied(),
            DecisionStrategy::Test => lowest(candidates, substrate),
        }?;
        self.nextstep = Some(picked);
        Some(picked)
    }
}

fn weighted(candidates: &[Position], substrate: &mut dyn Substrate) -> Vec<f64> {
    let params: PheromoneParams = substrate.params().clone();
    candidates
        .iter()
        .map(|p| {
            let draw = substrate.rng().gen_range(0.0..=params.max_pheromone);
            p.score / params.random_weight + draw / params.phero_weight
        })
        .collect()
}

/// Highest value wins; on a tie the earlier candidate stays.
fn strongest(candidates: &[Position], substrate: &mut dyn Substrate) -> Option<Position> {
    let values = weighted(candidates, substrate);
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.into_iter().enumerate() {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| candidates[i])
}

/// Lowest value wins; ties go to the lower index.
fn lowest(candidates: &[Position], substrate: &mut dyn Substrate) -> Option<Position> {
    let mut ranked: Vec<(f64, usize)> = weighted(candidates, substrate)
        .into_iter()
        .enumerate()
        .map(|(i, value)| (value, i))
        .collect();
    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal).then(a.1.cmp(&b.1)));
    ranked.first().map(|&(_, i)| candidates[i])
}
