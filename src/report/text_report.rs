//! @ai:module:intent Plain-text solve report for the console
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportPrinter
//! @ai:module:stateless true

use crate::aggregate::{ExerciseSolutions, SolutionSummary};
use std::fmt::Write as FmtWrite;

/// @ai:intent Renders ranked per-exercise solve counts and a summary
pub struct ReportPrinter {
    total_exercises: usize,
    show_models: bool,
}

impl ReportPrinter {
    /// @ai:intent Create a printer for a suite of the given size
    /// @ai:effects pure
    pub fn new(total_exercises: usize) -> Self {
        Self {
            total_exercises,
            show_models: false,
        }
    }

    /// @ai:intent List the credited models under each exercise row
    /// @ai:effects pure
    pub fn with_models(mut self, show_models: bool) -> Self {
        self.show_models = show_models;
        self
    }

    /// @ai:intent Rank the solutions, print the report to stdout and return the summary
    /// @ai:effects io
    pub fn print_report(&self, solutions: &ExerciseSolutions) -> SolutionSummary {
        let summary = SolutionSummary::build(solutions, self.total_exercises);
        print!("{}", self.render(&summary));
        summary
    }

    /// @ai:intent Render the report text
    /// @ai:effects pure
    pub fn render(&self, summary: &SolutionSummary) -> String {
        let mut output = String::new();
        let width = summary.name_width();

        writeln!(output).unwrap();
        writeln!(output, "Exercise Solution Statistics:").unwrap();
        writeln!(output, "{}", "-".repeat(40)).unwrap();

        for exercise in &summary.exercises {
            writeln!(
                output,
                "{:<width$} : {:>3} solved ({:>5.1}%)",
                exercise.name,
                exercise.solved_count,
                exercise.percent,
                width = width
            )
            .unwrap();

            if self.show_models {
                writeln!(output, "    {}", exercise.models.join(", ")).unwrap();
            }
        }

        writeln!(output).unwrap();
        writeln!(output, "Summary:").unwrap();
        writeln!(
            output,
            "Total exercises solved at least once: {}",
            summary.solved_exercises
        )
        .unwrap();
        writeln!(output, "Never solved by any model: {}", summary.never_solved).unwrap();

        output
    }
}
