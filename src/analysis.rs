//! @ai:module:intent Wire the manifest, result loading and aggregation into one pass
//! @ai:module:layer application
//! @ai:module:public_api analyze

use crate::aggregate::{ExerciseSolutions, SolutionAggregator, SolutionAggregatorTrait};
use crate::config::StatsConfig;
use crate::error::Result;
use crate::leaderboard::{LeaderboardReader, LeaderboardReaderTrait};
use crate::results::ResultLoader;

/// @ai:intent Read the leaderboard and aggregate solved exercises for every entry
/// @ai:pre config.paths.leaderboard_file is a readable YAML manifest
/// @ai:effects fs:read
pub fn analyze(config: &StatsConfig) -> Result<ExerciseSolutions> {
    let entries = LeaderboardReader::new().read_leaderboard(&config.paths.leaderboard_file)?;

    tracing::debug!(
        "Loading results from {}",
        config.paths.benchmarks_dir.display()
    );

    let aggregator = SolutionAggregator::new(ResultLoader::from_config(&config.paths));
    Ok(aggregator.aggregate(&entries))
}
