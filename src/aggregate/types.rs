//! @ai:module:intent Aggregated solve data and the ranked summary built from it
//! @ai:module:layer domain
//! @ai:module:public_api ExerciseSolutions, ExerciseStat, SolutionSummary
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// @ai:intent Models credited with solving each exercise
/// @ai:effects pure
///
/// A model is appended once per solving result, so the same model can appear
/// several times for one exercise when several runs credit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseSolutions {
    by_exercise: BTreeMap<String, Vec<String>>,
}

impl ExerciseSolutions {
    /// @ai:intent Create an empty aggregation
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Credit a model with solving an exercise
    /// @ai:effects pure
    pub fn record(&mut self, exercise: &str, model: &str) {
        self.by_exercise
            .entry(exercise.to_string())
            .or_default()
            .push(model.to_string());
    }

    /// @ai:intent Models credited for one exercise, in aggregation order
    /// @ai:effects pure
    pub fn models(&self, exercise: &str) -> Option<&[String]> {
        self.by_exercise.get(exercise).map(Vec::as_slice)
    }

    /// @ai:intent Number of exercises solved at least once
    /// @ai:effects pure
    pub fn len(&self) -> usize {
        self.by_exercise.len()
    }

    /// @ai:intent Whether no exercise was solved by any model
    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.by_exercise.is_empty()
    }

    /// @ai:intent Iterate exercises in name order with their credited models
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_exercise
            .iter()
            .map(|(name, models)| (name.as_str(), models.as_slice()))
    }

    /// @ai:intent Every model credited for any exercise, deduplicated
    /// @ai:effects pure
    pub fn distinct_models(&self) -> BTreeSet<&str> {
        self.by_exercise
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// @ai:intent One ranked report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStat {
    pub name: String,
    pub solved_count: usize,
    pub percent: f64,
    pub models: Vec<String>,
}

/// @ai:intent Ranked per-exercise statistics plus suite-level counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub generated_at: String,
    pub exercises: Vec<ExerciseStat>,
    pub total_models: usize,
    pub solved_exercises: usize,
    pub total_exercises: usize,
    pub never_solved: usize,
}

impl SolutionSummary {
    /// @ai:intent Rank exercises by solve count and compute percentages and totals
    /// @ai:effects pure
    pub fn build(solutions: &ExerciseSolutions, total_exercises: usize) -> Self {
        let total_models = solutions.distinct_models().len();

        let mut exercises: Vec<ExerciseStat> = solutions
            .iter()
            .map(|(name, models)| ExerciseStat {
                name: name.to_string(),
                solved_count: models.len(),
                percent: percent_of(models.len(), total_models),
                models: models.to_vec(),
            })
            .collect();

        // Stable: ties stay in exercise-name order.
        exercises.sort_by(|a, b| b.solved_count.cmp(&a.solved_count));

        let solved_exercises = solutions.len();
        if solved_exercises > total_exercises {
            tracing::warn!(
                "{} exercises were solved but the suite is configured with {}; update suite.total_exercises",
                solved_exercises,
                total_exercises
            );
        }

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            exercises,
            total_models,
            solved_exercises,
            total_exercises,
            never_solved: total_exercises.saturating_sub(solved_exercises),
        }
    }

    /// @ai:intent Width of the longest exercise name
    /// @ai:effects pure
    pub fn name_width(&self) -> usize {
        self.exercises
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}
