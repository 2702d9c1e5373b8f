//! antpath CLI - Command-line interface for ant-colony pathfinding.

mod commands;
mod config;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "antpath")]
#[command(author, version, about = "antpath - Ant-colony pathfinding on cost grids", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: antpath.toml in this or a parent directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new antpath project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run the colony simulation
    Run {
        /// Number of ticks to run
        #[arg(short, long, default_value = "500")]
        ticks: u64,

        /// Start from a saved pheromone snapshot
        #[arg(short, long)]
        resume: Option<PathBuf>,
    },

    /// Summarise a pheromone snapshot
    Inspect {
        /// Snapshot file
        path: PathBuf,

        /// Number of strongest cells to list
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Draw the layer as a character map
        #[arg(short, long)]
        map: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run { ticks, resume } => {
            commands::run::run(cli.config.as_deref(), ticks, resume.as_deref(), cli.verbose > 0)
        }
        Commands::Inspect { path, top, map } => commands::inspect::run(&path, top, map),
    }
}
