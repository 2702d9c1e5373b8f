//! Initialize a new antpath project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    println!("{} Initializing antpath project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    // Create default config
    let config_path = base_path.join(CONFIG_FILE);
    let config = if !config_path.exists() {
        let config = Config { base_dir: base_path.clone(), ..Config::default() };
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
        config
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
        Config::from_file(&config_path)?
    };

    // Create the checkpoint directory
    let output_dir = config.output_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    println!("  {} Created {}", "✓".green(), output_dir.display());

    println!();
    println!("{} antpath project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} edit {} (grid, homes, sites)", "1.".blue(), CONFIG_FILE);
    println!("  {} antpath run --ticks 500", "2.".blue());
    println!("  {} antpath inspect {}/{}-final.json", "3.".blue(), config.output.directory.display(), config.output.prefix);

    Ok(())
}
