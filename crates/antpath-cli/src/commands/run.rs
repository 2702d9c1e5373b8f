//! Run the colony simulation.

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use antpath::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;

/// What a finished run left behind.
#[derive(Debug)]
pub struct RunSummary {
    pub stats: ColonyStats,
    /// Ants still walking when the run stopped.
    pub ants: Vec<AntSnapshot>,
    pub checkpoints: Vec<PathBuf>,
    pub final_snapshot: PathBuf,
}

pub fn run(config_path: Option<&Path>, ticks: u64, resume: Option<&Path>, verbose: bool) -> Result<()> {
    let config = Config::load(config_path)?;

    println!(
        "{} Running {} ticks on a {}x{} grid ({} homes, {} sites)...",
        "→".blue(),
        ticks.to_string().cyan(),
        config.grid.rows,
        config.grid.cols,
        config.places.homes.len(),
        config.places.sites.len()
    );
    if let Some(path) = resume {
        println!("  Resuming pheromone from {}", path.display().to_string().cyan());
    }

    let summary = simulate(&config, ticks, resume, true, verbose)?;
    let stats = &summary.stats;

    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    println!("  Paths found:      {}", stats.paths_found.to_string().green());
    println!("  Ants born:        {}", stats.total_spawned.to_string().cyan());
    println!("  Returned home:    {}", stats.retired_returned.to_string().cyan());
    println!("  Expired:          {}", stats.retired_expired.to_string().yellow());
    println!("  Still walking:    {}", stats.ants_alive.to_string().cyan());
    println!("  Peak pheromone:   {:.2}", stats.max_pheromone_seen);
    println!("  Checkpoints:      {}", summary.checkpoints.len());
    println!("  Final snapshot:   {}", summary.final_snapshot.display().to_string().cyan());

    if verbose && !summary.ants.is_empty() {
        println!();
        println!("{}", "Live Ants".blue().bold());
        for ant in &summary.ants {
            println!(
                "  {} home {} at {} {:?}, age {}, trail {}",
                ant.id, ant.home, ant.position, ant.state, ant.age, ant.trail_len
            );
        }
    }

    Ok(())
}

/// Build the colony from `config`, run it, and write checkpoints plus a
/// final snapshot into the configured output directory.
pub fn simulate(
    config: &Config,
    ticks: u64,
    resume: Option<&Path>,
    progress: bool,
    verbose: bool,
) -> Result<RunSummary> {
    let mut builder = config.builder()?;
    if let Some(path) = resume {
        let snapshot = load_snapshot(path)
            .with_context(|| format!("Failed to load snapshot: {}", path.display()))?;
        builder = builder.resume_from(snapshot);
    }
    let mut colony = builder.build().context("Invalid colony configuration")?;

    let pb = if progress { ProgressBar::new(ticks) } else { ProgressBar::hidden() };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks {msg}")?
            .progress_chars("#>-"),
    );

    let mut checkpoints = Vec::new();
    for _ in 0..ticks {
        let events = colony
            .tick()
            .with_context(|| format!("Simulation failed at tick {}", colony.stats().tick + 1))?;

        for event in &events {
            match event {
                ColonyEvent::Checkpoint { tick } => {
                    let path = snapshot_path(config, &format!("{tick:06}"));
                    save_snapshot(&colony.snapshot(), &path)
                        .with_context(|| format!("Failed to write checkpoint: {}", path.display()))?;
                    if verbose {
                        pb.println(format!("  {} checkpoint {}", "✓".green(), path.display()));
                    }
                    checkpoints.push(path);
                }
                ColonyEvent::PathFound { id, site, paths_found } if verbose => {
                    pb.println(format!("  {} {} reached {} (path #{})", "•".yellow(), id, site, paths_found));
                }
                _ => {}
            }
        }
        pb.set_message(format!("{} paths", colony.substrate().paths_found()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let final_snapshot = snapshot_path(config, "final");
    save_snapshot(&colony.snapshot(), &final_snapshot)
        .with_context(|| format!("Failed to write snapshot: {}", final_snapshot.display()))?;

    let stats = colony.stats();
    info!(tick = stats.tick, paths = stats.paths_found, "snapshot written to {}", final_snapshot.display());

    Ok(RunSummary {
        stats,
        ants: colony.ant_snapshots(),
        checkpoints,
        final_snapshot,
    })
}

fn snapshot_path(config: &Config, label: &str) -> PathBuf {
    config.output_dir().join(format!("{}-{}.json", config.output.prefix, label))
}
