//! @ai:module:intent Per-exercise solve statistics across benchmark leaderboard runs
//! @ai:module:layer application
//! @ai:module:public_api config, leaderboard, results, aggregate, report, analysis

pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod report;
pub mod results;

#[cfg(test)]
mod testing;

pub use aggregate::{ExerciseSolutions, ExerciseStat, SolutionAggregator, SolutionSummary};
pub use analysis::analyze;
pub use config::StatsConfig;
pub use error::{Error, Result};
pub use leaderboard::{LeaderboardEntry, LeaderboardReader};
pub use report::{JsonReporter, ReportPrinter};
pub use results::{ResultLoader, RunResult};
