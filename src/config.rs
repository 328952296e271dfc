//! @ai:module:intent Configuration structs for exercise statistics
//! @ai:module:layer infrastructure
//! @ai:module:public_api StatsConfig, PathConfig, SuiteConfig
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "exercise-stats.toml";

/// @ai:intent Main configuration for the statistics run
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub suite: SuiteConfig,
}

/// @ai:intent Locations of the leaderboard manifest and run results
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_benchmarks_dir")]
    pub benchmarks_dir: PathBuf,
    #[serde(default = "default_leaderboard_file")]
    pub leaderboard_file: PathBuf,
    #[serde(default = "default_results_file_name")]
    pub results_file_name: String,
}

/// @ai:intent Facts about the benchmark suite that the result files do not carry
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Number of exercises in the benchmark suite. Used only for the
    /// "never solved" count; check it against the suite when exercises change.
    #[serde(default = "default_total_exercises")]
    pub total_exercises: usize,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            benchmarks_dir: default_benchmarks_dir(),
            leaderboard_file: default_leaderboard_file(),
            results_file_name: default_results_file_name(),
        }
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            total_exercises: default_total_exercises(),
        }
    }
}

fn default_benchmarks_dir() -> PathBuf {
    PathBuf::from("tmp.benchmarks")
}

fn default_leaderboard_file() -> PathBuf {
    PathBuf::from("aider/website/_data/edit_leaderboard.yml")
}

fn default_results_file_name() -> String {
    ".aider.results.json".to_string()
}

fn default_total_exercises() -> usize {
    133
}

impl StatsConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// @ai:intent Load an explicit config, else the default file if present, else defaults
    /// @ai:effects fs:read
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);

                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
