//! Loop handling: shortcuts, avoidance, escapes, and the site scan.

use antpath_agents::ant::Ant;
use antpath_core::params::PheromoneParams;
use antpath_core::prelude::*;
use antpath_runtime::grid::GridSubstrate;

fn grid(rows: usize, cols: usize) -> GridSubstrate {
    GridSubstrate::new(rows, cols, PheromoneParams::default(), 17).unwrap()
}

fn at(row: usize, col: usize) -> Position {
    Position::at(Cell::new(row, col))
}

fn cells(positions: &[Position]) -> Vec<Cell> {
    positions.iter().map(|p| p.cell()).collect()
}

fn ant_with_trail(strategy: LoopStrategy, trail: Vec<Position>, now: Position) -> Ant {
    let mut ant = Ant::with_seed(at(0, 0), 50, 1).with_strategies(DecisionStrategy::Standard, strategy);
    ant.set_laststeps(trail);
    ant.set_position(now);
    ant
}

#[test]
fn forget_loop_cuts_back_to_the_reappearing_step() {
    let mut g = grid(4, 4);
    let shortcut = Position { direction_penalty: 0.25, ..at(0, 1) };
    let mut ant = ant_with_trail(LoopStrategy::ForgetLoop, vec![at(0, 0), shortcut, at(1, 1)], at(1, 2));

    let mut candidates = ant.sense(&g).unwrap();
    assert!(!candidates.iter().any(|p| p.is_cell(Cell::new(1, 1))), "no immediate backtrack");

    let decided = ant.has_positions(&mut candidates, &mut g);

    assert!(!decided, "no site nearby, nothing forced");
    assert_eq!(cells(ant.laststeps()), vec![Cell::new(0, 0)]);
    assert!(!candidates.iter().any(|p| p.is_cell(Cell::new(0, 1))), "shortcut cell leaves the candidates");
    assert_eq!(ant.laststeps()[0].direction_penalty, 0.25, "direction penalty carried to the new top");
    assert!(ant.visitedsteps().is_empty());
}

#[test]
fn forget_loop_applies_at_most_one_shortcut() {
    let mut g = grid(4, 4);
    // Both (0,1) and (0,2) are on the trail and adjacent to (1,2); only the
    // oldest one is used.
    let mut ant = ant_with_trail(
        LoopStrategy::ForgetLoop,
        vec![at(0, 0), at(0, 1), at(0, 2), at(0, 3), at(1, 3)],
        at(1, 2),
    );
    let mut candidates = ant.sense(&g).unwrap();
    ant.has_positions(&mut candidates, &mut g);

    assert_eq!(cells(ant.laststeps()), vec![Cell::new(0, 0)]);
    assert!(candidates.iter().any(|p| p.is_cell(Cell::new(0, 2))), "second loop cell stays a candidate");
}

#[test]
fn forget_loop_never_treats_home_as_a_site() {
    let mut g = grid(3, 3);
    g.mark_site(Cell::new(0, 0)).unwrap();
    let home = g.position(Cell::new(0, 0)).unwrap();
    let mut ant = Ant::with_seed(home, 50, 1).with_strategies(DecisionStrategy::Standard, LoopStrategy::ForgetLoop);
    ant.set_position(at(0, 1));

    let mut candidates = ant.sense(&g).unwrap();
    let decided = ant.has_positions(&mut candidates, &mut g);

    assert!(!decided);
    assert!(!ant.is_done());
    assert_eq!(g.paths_found(), 0);
    assert!(!candidates.iter().any(|p| p.is_cell(Cell::new(0, 0))), "special home is dropped");
    assert_eq!(candidates.len(), 4);
}

#[test]
fn avoid_or_forget_remembers_the_cut_cells() {
    let mut g = grid(4, 4);
    let mut ant = ant_with_trail(LoopStrategy::AvoidOrForgetLoop, vec![at(0, 0), at(0, 1), at(1, 1)], at(1, 2));

    let mut candidates = ant.sense(&g).unwrap();
    let decided = ant.has_positions(&mut candidates, &mut g);

    assert!(!decided);
    assert_eq!(cells(ant.laststeps()), vec![Cell::new(0, 0)]);
    assert_eq!(cells(ant.visitedsteps()), vec![Cell::new(0, 1), Cell::new(1, 1)]);
    for banned in [Cell::new(0, 1), Cell::new(1, 1)] {
        assert!(!candidates.iter().any(|p| p.is_cell(banned)), "{banned} must be filtered");
    }
}

#[test]
fn avoid_or_forget_filters_old_visited_cells() {
    let mut g = grid(4, 4);
    let mut ant = ant_with_trail(LoopStrategy::AvoidOrForgetLoop, vec![at(0, 0)], at(1, 1));
    ant.set_visitedsteps(vec![at(2, 2), at(1, 2)]);

    let mut candidates = ant.sense(&g).unwrap();
    ant.has_positions(&mut candidates, &mut g);

    assert!(!candidates.iter().any(|p| p.is_cell(Cell::new(2, 2)) || p.is_cell(Cell::new(1, 2))));
}

#[test]
fn avoid_loop_escapes_away_from_home_when_boxed_in() {
    for seed in 0..10 {
        let mut g = GridSubstrate::new(2, 2, PheromoneParams::default(), seed).unwrap();
        let mut ant = ant_with_trail(LoopStrategy::AvoidLoop, vec![at(0, 0), at(0, 1), at(1, 0)], at(1, 1));

        let mut candidates = ant.sense(&g).unwrap();
        assert_eq!(cells(&candidates), vec![Cell::new(0, 0), Cell::new(0, 1)]);

        let decided = ant.has_positions(&mut candidates, &mut g);
        assert!(decided, "an emptied candidate list forces an escape");
        let next = ant.nextstep().unwrap();
        assert!(next.is_cell(Cell::new(0, 1)), "seed {seed}: escape went home instead of (0, 1)");
    }
}

#[test]
fn avoid_loop_escapes_home_when_nothing_else_is_left() {
    let mut g = grid(1, 2);
    let mut ant = ant_with_trail(LoopStrategy::AvoidLoop, vec![at(0, 0)], at(0, 1));

    // Dead end: the only neighbour is the cell just left.
    let mut candidates = ant.sense(&g).unwrap();
    assert_eq!(cells(&candidates), vec![Cell::new(0, 0)]);

    assert!(ant.has_positions(&mut candidates, &mut g));
    assert!(ant.nextstep().unwrap().is_cell(Cell::new(0, 0)));
}

#[test]
fn site_scan_turns_the_ant_around() {
    let mut g = grid(3, 3);
    g.mark_site(Cell::new(1, 1)).unwrap();
    let mut ant = Ant::with_seed(at(0, 0), 50, 1).with_strategies(DecisionStrategy::Random, LoopStrategy::Specials);
    ant.set_laststeps(vec![at(0, 0)]);
    ant.set_position(at(0, 1));

    let mut candidates = ant.sense(&g).unwrap();
    assert!(ant.has_positions(&mut candidates, &mut g));

    assert!(ant.is_done());
    assert_eq!(ant.goal(), Some(Cell::new(1, 1)));
    assert_eq!(g.paths_found(), 1);
    assert!(ant.nextstep().unwrap().is_cell(Cell::new(0, 0)), "next step is the popped trail top");
    assert!(ant.laststeps().is_empty());
}

#[test]
fn site_scan_with_empty_trail_heads_straight_home() {
    let mut g = grid(3, 3);
    g.mark_site(Cell::new(1, 1)).unwrap();
    let home = g.position(Cell::new(0, 0)).unwrap();
    let mut ant = Ant::with_seed(home, 50, 1).with_strategies(DecisionStrategy::Standard, LoopStrategy::AvoidLoop);

    ant.choose(&mut g).unwrap();
    assert!(ant.is_done());
    assert!(ant.nextstep().unwrap().is_cell(Cell::new(0, 0)));
}
