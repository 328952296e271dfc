//! @ai:module:intent JSON loader for the result files of one benchmark run
//! @ai:module:layer infrastructure
//! @ai:module:public_api ResultLoader
//! @ai:module:stateless true

use crate::config::PathConfig;
use crate::error::{Error, Result};
use crate::results::RunResult;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Trait for loading the results of a benchmark run
pub trait ResultLoaderTrait: Send + Sync {
    /// @ai:intent Load every result of a run; None when the run directory does not exist
    fn load_results(&self, dirname: &str) -> Option<Vec<RunResult>>;
}

/// @ai:intent Loads `<benchmarks_dir>/<dirname>/*/<results_file_name>` files
pub struct ResultLoader {
    benchmarks_dir: PathBuf,
    results_file_name: String,
}

impl ResultLoader {
    /// @ai:intent Create a loader rooted at a benchmarks directory
    /// @ai:effects pure
    pub fn new(benchmarks_dir: impl Into<PathBuf>, results_file_name: impl Into<String>) -> Self {
        Self {
            benchmarks_dir: benchmarks_dir.into(),
            results_file_name: results_file_name.into(),
        }
    }

    /// @ai:intent Create a loader from path configuration
    /// @ai:effects pure
    pub fn from_config(paths: &PathConfig) -> Self {
        Self::new(&paths.benchmarks_dir, &paths.results_file_name)
    }

    /// @ai:intent Parse a single result file
    /// @ai:effects fs:read
    fn parse_result_file(path: &Path) -> Result<RunResult> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ResultRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ResultParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// @ai:intent Find the result file in each immediate subdirectory, in name order
    /// @ai:effects fs:read
    fn find_result_files(&self, run_dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(run_dir)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.file_name() == self.results_file_name.as_str())
            .map(|e| e.into_path())
            .collect()
    }
}

impl ResultLoaderTrait for ResultLoader {
    /// @ai:intent Load all parseable results of a run, skipping malformed files
    /// @ai:effects fs:read
    fn load_results(&self, dirname: &str) -> Option<Vec<RunResult>> {
        let run_dir = self.benchmarks_dir.join(dirname);
        if !run_dir.is_dir() {
            return None;
        }

        let files = self.find_result_files(&run_dir);
        let mut results = Vec::with_capacity(files.len());

        for path in files {
            match Self::parse_result_file(&path) {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::warn!("Skipping result file: {}", e);
                }
            }
        }

        tracing::debug!("Loaded {} results from {}", results.len(), run_dir.display());
        Some(results)
    }
}
