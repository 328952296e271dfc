//! @ai:module:intent Accumulate which models solved which exercises
//! @ai:module:layer application
//! @ai:module:public_api SolutionAggregator
//! @ai:module:stateless true

use crate::aggregate::types::ExerciseSolutions;
use crate::leaderboard::LeaderboardEntry;
use crate::results::ResultLoaderTrait;

/// @ai:intent Trait for solve aggregation
pub trait SolutionAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate solved exercises over leaderboard entries in manifest order
    fn aggregate(&self, entries: &[LeaderboardEntry]) -> ExerciseSolutions;
}

/// @ai:intent Aggregates solved exercises using a result loader
pub struct SolutionAggregator<L: ResultLoaderTrait> {
    loader: L,
}

impl<L: ResultLoaderTrait> SolutionAggregator<L> {
    /// @ai:intent Create a new aggregator over a result loader
    /// @ai:effects pure
    pub fn new(loader: L) -> Self {
        Self { loader }
    }
}

impl<L: ResultLoaderTrait> SolutionAggregatorTrait for SolutionAggregator<L> {
    /// @ai:intent Credit each entry's model for every exercise its run solved
    /// @ai:effects fs:read
    fn aggregate(&self, entries: &[LeaderboardEntry]) -> ExerciseSolutions {
        let mut solutions = ExerciseSolutions::new();

        for entry in entries {
            let Some(results) = self.loader.load_results(&entry.dirname) else {
                tracing::warn!("Could not load results for {}", entry.dirname);
                continue;
            };

            if results.is_empty() {
                tracing::warn!("No result files found for {}", entry.dirname);
            }

            for result in &results {
                let Some(exercise) = result.exercise() else {
                    continue;
                };

                if result.is_solved() {
                    solutions.record(exercise, &entry.model);
                }
            }
        }

        tracing::debug!(
            "{} exercises solved across {} leaderboard entries",
            solutions.len(),
            entries.len()
        );
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::RunResult;
    use crate::testing::capture_logs;
    use std::collections::HashMap;

    struct MockResultLoader {
        runs: HashMap<String, Vec<RunResult>>,
    }

    impl MockResultLoader {
        fn new(runs: &[(&str, Vec<RunResult>)]) -> Self {
            Self {
                runs: runs
                    .iter()
                    .map(|(dir, results)| (dir.to_string(), results.clone()))
                    .collect(),
            }
        }
    }

    impl ResultLoaderTrait for MockResultLoader {
        fn load_results(&self, dirname: &str) -> Option<Vec<RunResult>> {
            self.runs.get(dirname).cloned()
        }
    }

    fn result(testcase: Option<&str>, outcomes: Option<Vec<bool>>) -> RunResult {
        RunResult {
            testcase: testcase.map(str::to_string),
            tests_outcomes: outcomes,
        }
    }

    #[test]
    fn test_last_outcome_decides_credit() {
        let loader = MockResultLoader::new(&[
            ("run1", vec![result(Some("ex1"), Some(vec![false, true]))]),
            ("run2", vec![result(Some("ex1"), Some(vec![false]))]),
        ]);
        let entries = vec![
            LeaderboardEntry::new("run1", "gpt-x"),
            LeaderboardEntry::new("run2", "gpt-y"),
        ];

        let solutions = SolutionAggregator::new(loader).aggregate(&entries);
        assert_eq!(solutions.models("ex1").unwrap(), ["gpt-x".to_string()]);
    }

    #[test]
    fn test_records_without_testcase_or_outcomes_are_excluded() {
        let loader = MockResultLoader::new(&[(
            "run1",
            vec![
                result(None, Some(vec![true])),
                result(Some(""), Some(vec![true])),
                result(Some("grep"), None),
                result(Some("bowling"), Some(vec![])),
                result(Some("zipper"), Some(vec![true, false])),
            ],
        )]);

        let solutions =
            SolutionAggregator::new(loader).aggregate(&[LeaderboardEntry::new("run1", "m")]);
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_missing_run_matches_absent_entry() {
        let runs = [("run1", vec![result(Some("ex1"), Some(vec![true]))])];

        let with_missing = SolutionAggregator::new(MockResultLoader::new(&runs)).aggregate(&[
            LeaderboardEntry::new("gone", "ghost"),
            LeaderboardEntry::new("run1", "gpt-x"),
        ]);
        let without = SolutionAggregator::new(MockResultLoader::new(&runs))
            .aggregate(&[LeaderboardEntry::new("run1", "gpt-x")]);

        assert_eq!(with_missing, without);
    }

    #[test]
    fn test_duplicate_credit_is_preserved() {
        let solved = vec![result(Some("ex1"), Some(vec![true]))];
        let loader = MockResultLoader::new(&[("run1", solved.clone()), ("run2", solved)]);
        let entries = vec![
            LeaderboardEntry::new("run1", "gpt-x"),
            LeaderboardEntry::new("run2", "gpt-x"),
            LeaderboardEntry::new("run1", "gpt-x"),
        ];

        let solutions = SolutionAggregator::new(loader).aggregate(&entries);
        assert_eq!(solutions.models("ex1").unwrap().len(), 3);
        assert_eq!(solutions.distinct_models().len(), 1);
    }

    #[test]
    fn test_models_follow_manifest_order() {
        let solved = vec![result(Some("ex1"), Some(vec![true]))];
        let loader = MockResultLoader::new(&[("b", solved.clone()), ("a", solved)]);
        let entries = vec![
            LeaderboardEntry::new("b", "second-dir-first"),
            LeaderboardEntry::new("a", "first-dir-second"),
        ];

        let solutions = SolutionAggregator::new(loader).aggregate(&entries);
        assert_eq!(
            solutions.models("ex1").unwrap(),
            ["second-dir-first".to_string(), "first-dir-second".to_string()]
        );
    }

    #[test]
    fn test_skipped_runs_log_warnings() {
        let loader = MockResultLoader::new(&[("empty-run", vec![])]);
        let aggregator = SolutionAggregator::new(loader);
        let entries = vec![
            LeaderboardEntry::new("gone", "ghost"),
            LeaderboardEntry::new("empty-run", "gpt-x"),
        ];

        let (solutions, logs) = capture_logs(|| aggregator.aggregate(&entries));

        assert!(solutions.is_empty());
        assert!(logs.contains("Could not load results for gone"));
        assert!(logs.contains("No result files found for empty-run"));
        assert_eq!(logs.matches("WARN").count(), 2);
    }
}
