//! Colony integration tests: full simulations on small grids.

use antpath_core::prelude::*;
use antpath_runtime::colony::{Colony, ColonyConfig, ColonyEvent};
use antpath_runtime::colony_builder::{BuilderError, ColonyBuilder};
use antpath_runtime::snapshot::{load_snapshot, save_snapshot, PheromoneSnapshot};

fn foraging_colony(seed: u64, params: PheromoneParams) -> Colony {
    ColonyBuilder::new()
        .with_grid(6, 6)
        .with_pheromone(params)
        .with_homes(vec![Cell::new(0, 0)])
        .with_sites(vec![Cell::new(5, 5)])
        .with_config(ColonyConfig {
            ant_lifetime: 100,
            max_ants: 20,
            spawn_per_round: 1,
            seed,
            ..ColonyConfig::default()
        })
        .build()
        .unwrap()
}

#[test]
fn single_ant_finds_the_site_at_most_once() {
    for seed in 0..20 {
        let mut colony = ColonyBuilder::new()
            .with_grid(5, 5)
            .with_sites(vec![Cell::new(2, 3)])
            .with_config(ColonyConfig {
                decision: DecisionStrategy::Random,
                valid_position: LoopStrategy::AvoidLoop,
                ant_lifetime: 20,
                spawn_per_round: 0,
                seed,
                ..ColonyConfig::default()
            })
            .build()
            .unwrap();
        colony.bear(Cell::new(0, 0)).unwrap();

        colony.run(20).unwrap();
        let stats = colony.stats();

        assert!(stats.paths_found <= 1, "seed {seed}: one ant, one site, got {} paths", stats.paths_found);
        assert_eq!(stats.ants_alive, 0, "seed {seed}: ant must be gone after its lifetime");
        assert_eq!(stats.retired_expired + stats.retired_returned, 1);
        if stats.retired_returned == 1 {
            assert_eq!(stats.paths_found, 1, "seed {seed}: returned without a path");
        }
    }
}

#[test]
fn ants_stay_in_bounds_and_never_mark_sites() {
    let mut colony = foraging_colony(7, PheromoneParams::default());
    for events in colony.run(150).unwrap() {
        for event in events {
            if let ColonyEvent::Moved { to, .. } = event {
                assert!(to.row < 6 && to.col < 6, "moved off the grid to {to}");
            }
        }
    }
    let site = colony.substrate().pheromone(Cell::new(5, 5)).unwrap();
    assert_eq!(site, 0.0, "site cell was painted");
}

#[test]
fn pheromone_stays_below_the_ceiling() {
    let params = PheromoneParams { max_pheromone: 25.0, ..PheromoneParams::default() };
    let mut colony = foraging_colony(3, params);
    colony.run(300).unwrap();
    let layer = colony.substrate().pheromone_layer();
    assert!(layer.iter().all(|v| *v < 25.0), "ceiling breached: {:?}", layer);
}

#[test]
fn paths_found_never_decreases() {
    let mut colony = foraging_colony(11, PheromoneParams::default());
    let mut last = 0;
    for _ in 0..300 {
        colony.tick().unwrap();
        let now = colony.stats().paths_found;
        assert!(now >= last, "path counter went from {last} to {now}");
        last = now;
    }
    assert!(last > 0, "a colony of 20 ants over 300 ticks should find the site");
}

#[test]
fn path_found_events_match_the_counter() {
    let mut colony = foraging_colony(5, PheromoneParams::default());
    let found = colony
        .run(200)
        .unwrap()
        .into_iter()
        .flatten()
        .filter(|e| matches!(e, ColonyEvent::PathFound { .. }))
        .count() as u64;
    assert_eq!(found, colony.stats().paths_found);
}

#[test]
fn same_seed_same_run() {
    let mut a = foraging_colony(42, PheromoneParams::default());
    let mut b = foraging_colony(42, PheromoneParams::default());
    a.run(120).unwrap();
    b.run(120).unwrap();

    assert_eq!(a.snapshot(), b.snapshot());
    let (sa, sb) = (a.stats(), b.stats());
    assert_eq!(sa.total_spawned, sb.total_spawned);
    assert_eq!(sa.retired_returned, sb.retired_returned);
    let ids_a: Vec<AgentId> = a.ants().iter().map(|ant| ant.id()).collect();
    let ids_b: Vec<AgentId> = b.ants().iter().map(|ant| ant.id()).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn volatilization_fades_an_abandoned_trail() {
    let mut colony = ColonyBuilder::new()
        .with_grid(4, 4)
        .with_config(ColonyConfig { spawn_per_round: 0, half_life: 10, ..ColonyConfig::default() })
        .build()
        .unwrap();
    colony.substrate_mut().set_pheromone(Cell::new(2, 2), 80.0).unwrap();

    colony.run(10).unwrap();
    let v = colony.substrate().pheromone(Cell::new(2, 2)).unwrap();
    assert!((v - 40.0).abs() < 1e-9, "one half-life should halve the trail, got {v}");
}

#[test]
fn snapshot_round_trip_resumes_the_layer() {
    let mut colony = foraging_colony(9, PheromoneParams::default());
    colony.run(80).unwrap();
    let snapshot = colony.snapshot();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checkpoint-80.json");
    save_snapshot(&snapshot, &path).unwrap();
    let loaded = load_snapshot(&path).unwrap();
    assert_eq!(loaded, snapshot);

    let resumed = ColonyBuilder::new()
        .with_grid(6, 6)
        .with_sites(loaded.sites.clone())
        .with_homes(loaded.homes.clone())
        .resume_from(loaded)
        .build()
        .unwrap();
    assert_eq!(resumed.substrate().pheromone_layer(), colony.substrate().pheromone_layer());
}

#[test]
fn resumed_colony_continues_the_clock_and_path_count() {
    let config = ColonyConfig {
        ant_lifetime: 100,
        max_ants: 20,
        checkpoint_interval: 10,
        seed: 4,
        ..ColonyConfig::default()
    };
    let build = |resume: Option<PheromoneSnapshot>| {
        let mut builder = ColonyBuilder::new()
            .with_grid(6, 6)
            .with_homes(vec![Cell::new(0, 0)])
            .with_sites(vec![Cell::new(5, 5)])
            .with_config(config.clone());
        if let Some(snapshot) = resume {
            builder = builder.resume_from(snapshot);
        }
        builder.build().unwrap()
    };

    let mut colony = build(None);
    colony.run(40).unwrap();
    let saved = colony.snapshot();

    let mut resumed = build(Some(saved.clone()));
    let stats = resumed.stats();
    assert_eq!(stats.tick, saved.tick, "resumed colony keeps its clock");
    assert_eq!(stats.paths_found, saved.paths_found, "resumed colony keeps its path count");

    let checkpoints: Vec<Tick> = resumed
        .run(20)
        .unwrap()
        .into_iter()
        .flatten()
        .filter_map(|e| match e {
            ColonyEvent::Checkpoint { tick } => Some(tick),
            _ => None,
        })
        .collect();
    assert_eq!(checkpoints, vec![50, 60], "checkpoints carry on past the saved tick");
    assert!(resumed.stats().paths_found >= saved.paths_found);
}

#[test]
fn resume_refuses_a_snapshot_from_other_sites() {
    let mut colony = foraging_colony(2, PheromoneParams::default());
    colony.run(10).unwrap();

    let err = ColonyBuilder::new()
        .with_grid(6, 6)
        .with_homes(vec![Cell::new(0, 0)])
        .with_sites(vec![Cell::new(0, 5)])
        .resume_from(colony.snapshot())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, BuilderError::SnapshotSites { .. }), "got {err}");
}

#[test]
fn every_strategy_pair_runs_clean() {
    for decision in [DecisionStrategy::Standard, DecisionStrategy::Random, DecisionStrategy::Test] {
        for valid_position in [
            LoopStrategy::Specials,
            LoopStrategy::AvoidLoop,
            LoopStrategy::ForgetLoop,
            LoopStrategy::AvoidOrForgetLoop,
        ] {
            let mut colony = ColonyBuilder::new()
                .with_grid(5, 7)
                .with_homes(vec![Cell::new(0, 0), Cell::new(4, 0)])
                .with_sites(vec![Cell::new(2, 6)])
                .with_config(ColonyConfig {
                    decision,
                    valid_position,
                    ant_lifetime: 60,
                    max_ants: 10,
                    half_life: 25,
                    ..ColonyConfig::default()
                })
                .build()
                .unwrap();
            colony.run(150).unwrap_or_else(|e| panic!("{decision}/{valid_position} failed: {e}"));
            assert_eq!(colony.substrate().pheromone(Cell::new(2, 6)).unwrap(), 0.0);
        }
    }
}
