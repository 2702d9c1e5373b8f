//! Summarise a pheromone snapshot.

use anyhow::{Context, Result};
use colored::Colorize;
use antpath::prelude::*;
use std::path::Path;

/// Glyphs from faint to strong.
const SHADES: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

pub fn run(path: &Path, top: usize, map: bool) -> Result<()> {
    let snapshot = load_snapshot(path)
        .with_context(|| format!("Failed to load snapshot: {}", path.display()))?;
    let (min, max, mean) = snapshot.summary();

    println!("{}", "antpath Pheromone Snapshot".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Grid".blue().bold());
    println!("  Size:              {}x{}", snapshot.rows, snapshot.cols);
    println!("  Tick:              {}", snapshot.tick.to_string().cyan());
    println!("  Homes:             {}", list(&snapshot.homes));
    println!("  Sites:             {}", list(&snapshot.sites));
    println!("  Paths found:       {}", snapshot.paths_found.to_string().green());
    println!();

    println!("{}", "Pheromone".blue().bold());
    println!("  Min:               {:.3}", min);
    println!("  Max:               {:.3}", max);
    println!("  Mean:              {:.3}", mean);
    println!();

    if top > 0 {
        println!("{}", "Strongest Cells".blue().bold());
        for (rank, (cell, value)) in snapshot.strongest(top).into_iter().enumerate() {
            println!("  {:>3}. {:<12} {:.3}", rank + 1, cell.to_string(), value);
        }
        println!();
    }

    if map {
        println!("{}", "Map".blue().bold());
        for line in render_map(&snapshot).lines() {
            println!("  {}", line);
        }
        println!();
    }

    println!("{}", "═".repeat(40).dimmed());
    Ok(())
}

/// One character per cell: `H` for homes, `S` for sites, otherwise a
/// shade scaled between the layer's minimum and maximum.
pub fn render_map(snapshot: &PheromoneSnapshot) -> String {
    let (min, max, _) = snapshot.summary();
    let span = max - min;
    let mut out = String::with_capacity(snapshot.rows * (snapshot.cols + 1));
    for row in 0..snapshot.rows {
        for col in 0..snapshot.cols {
            let cell = Cell::new(row, col);
            let glyph = if snapshot.homes.contains(&cell) {
                'H'
            } else if snapshot.sites.contains(&cell) {
                'S'
            } else {
                let value = snapshot.value(cell).unwrap_or(min);
                let level = if span > 0.0 { (value - min) / span } else { 0.0 };
                let idx = (level * (SHADES.len() - 1) as f64).round() as usize;
                SHADES[idx.min(SHADES.len() - 1)]
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn list(cells: &[Cell]) -> String {
    if cells.is_empty() {
        return "none".dimmed().to_string();
    }
    cells.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}
