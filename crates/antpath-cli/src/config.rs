//! Configuration management for the antpath CLI.

use anyhow::{ensure, Context, Result};
use antpath::prelude::*;
use antpath::runtime::grid::DEFAULT_DIAGONAL_PENALTY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "antpath.toml";

/// antpath project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub pheromone: PheromoneParams,
    #[serde(default)]
    pub colony: ColonyConfig,
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Directory relative paths are resolved against (the config file's).
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default)]
    pub connectivity: Connectivity,
    #[serde(default = "default_diagonal_penalty")]
    pub diagonal_penalty: f64,
    /// Cost surface, one inner array per row. Flat when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    #[serde(default = "default_homes")]
    pub homes: Vec<[usize; 2]>,
    #[serde(default = "default_sites")]
    pub sites: Vec<[usize; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

// Default value functions
fn default_rows() -> usize { 20 }
fn default_cols() -> usize { 20 }
fn default_diagonal_penalty() -> f64 { DEFAULT_DIAGONAL_PENALTY }
fn default_homes() -> Vec<[usize; 2]> { vec![[0, 0]] }
fn default_sites() -> Vec<[usize; 2]> { vec![[19, 19]] }
fn default_directory() -> PathBuf { PathBuf::from("checkpoints") }
fn default_prefix() -> String { "pheromone".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            pheromone: PheromoneParams::default(),
            colony: ColonyConfig::default(),
            places: PlacesConfig::default(),
            output: OutputConfig::default(),
            base_dir: PathBuf::new(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            connectivity: Connectivity::default(),
            diagonal_penalty: default_diagonal_penalty(),
            costs: None,
        }
    }
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            homes: default_homes(),
            sites: default_sites(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            prefix: default_prefix(),
        }
    }
}

impl Config {
    /// Load config from `explicit`, or from antpath.toml in the current or
    /// parent directories, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(&std::env::current_dir()?),
        };
        match path {
            Some(path) => Self::from_file(&path),
            None => {
                warn!("no {CONFIG_FILE} found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }

    /// Read and parse one config file. Relative output paths resolve
    /// against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Where checkpoints and snapshots are written.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.output.directory)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Serialize as a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Flatten the cost rows into the row-major layout the grid expects.
    pub fn flat_costs(&self) -> Result<Option<Vec<f64>>> {
        let Some(rows) = &self.grid.costs else {
            return Ok(None);
        };
        ensure!(
            rows.len() == self.grid.rows,
            "grid.costs has {} rows, grid.rows is {}",
            rows.len(),
            self.grid.rows
        );
        for (i, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == self.grid.cols,
                "grid.costs row {} has {} values, grid.cols is {}",
                i,
                row.len(),
                self.grid.cols
            );
        }
        Ok(Some(rows.concat()))
    }

    /// A colony builder carrying every setting in this config.
    pub fn builder(&self) -> Result<ColonyBuilder> {
        let cells = |pairs: &[[usize; 2]]| pairs.iter().map(|&[r, c]| Cell::new(r, c)).collect::<Vec<_>>();
        let mut builder = ColonyBuilder::new()
            .with_grid(self.grid.rows, self.grid.cols)
            .with_connectivity(self.grid.connectivity)
            .with_diagonal_penalty(self.grid.diagonal_penalty)
            .with_pheromone(self.pheromone.clone())
            .with_homes(cells(&self.places.homes))
            .with_sites(cells(&self.places.sites))
            .with_config(self.colony.clone());
        if let Some(costs) = self.flat_costs()? {
            builder = builder.with_costs(costs);
        }
        if self.places.homes.is_empty() {
            warn!("no homes configured, no ants will be born");
        }
        Ok(builder)
    }
}

/// Find antpath.toml in `start` or its parent directories.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_survives_toml() {
        let text = Config::default().to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.grid.rows, 20);
        assert_eq!(parsed.places.sites, vec![[19, 19]]);
        assert_eq!(parsed.colony.decision, DecisionStrategy::Standard);
        assert_eq!(parsed.colony.valid_position, LoopStrategy::AvoidLoop);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let text = r#"
            [grid]
            rows = 3
            cols = 4
            connectivity = "four"

            [colony]
            decision = "test"
            valid_position = "forgetloop"
            half_life = 12

            [places]
            homes = [[0, 0], [2, 0]]
            sites = [[1, 3]]
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.grid.connectivity, Connectivity::Four);
        assert_eq!(config.colony.decision, DecisionStrategy::Test);
        assert_eq!(config.colony.valid_position, LoopStrategy::ForgetLoop);
        assert_eq!(config.colony.ant_lifetime, 200);
        assert_eq!(config.pheromone.path_intensity, 10.0);
        assert_eq!(config.output.prefix, "pheromone");
        assert!(config.builder().unwrap().build().is_ok());
    }

    #[test]
    fn unknown_strategy_is_a_parse_error() {
        let text = "[colony]\ndecision = \"greedy\"\n";
        let err = toml::from_str::<Config>(text).unwrap_err().to_string();
        assert!(err.contains("greedy"), "error should name the bad strategy: {err}");
    }

    #[test]
    fn cost_rows_must_match_the_grid() {
        let mut config = Config::default();
        config.grid.rows = 2;
        config.grid.cols = 2;
        config.places.sites = vec![[1, 1]];
        config.grid.costs = Some(vec![vec![0.0, 1.0], vec![2.0]]);
        assert!(config.flat_costs().is_err());

        config.grid.costs = Some(vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
        assert_eq!(config.flat_costs().unwrap(), Some(vec![0.0, 1.0, 2.0, 3.0]));
    }

    #[test]
    fn config_file_is_found_in_a_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        Config::default().save(&dir.path().join(CONFIG_FILE)).unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
        assert!(Config::from_file(&found).is_ok());
    }

    #[test]
    fn output_dir_is_relative_to_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs").join("today");
        std::fs::create_dir_all(&nested).unwrap();
        Config::default().save(&dir.path().join(CONFIG_FILE)).unwrap();

        let config = Config::load(find_config_file(&nested).as_deref()).unwrap();
        assert_eq!(config.output_dir(), dir.path().join("checkpoints"));

        let mut absolute = config.clone();
        absolute.output.directory = nested.clone();
        assert_eq!(absolute.output_dir(), nested, "absolute directories are kept");
        assert_eq!(Config::default().output_dir(), PathBuf::from("checkpoints"));
    }
}
