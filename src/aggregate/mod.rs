//! @ai:module:intent Solve aggregation across leaderboard runs
//! @ai:module:layer application
//! @ai:module:public_api ExerciseSolutions, ExerciseStat, SolutionSummary, SolutionAggregator

pub mod aggregator;
pub mod types;

pub use aggregator::{SolutionAggregator, SolutionAggregatorTrait};
pub use types::{ExerciseSolutions, ExerciseStat, SolutionSummary};
