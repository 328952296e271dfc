//! @ai:module:intent CLI for exercise solve statistics
//! @ai:module:layer presentation

use anyhow::Result;
use clap::{Parser, Subcommand};
use exercise_stats::{
    analyze,
    config::StatsConfig,
    report::{JsonReporter, JsonReporterTrait, ReportPrinter},
};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exercise-stats")]
#[command(about = "Count how many models solved each benchmark exercise")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate leaderboard runs and print per-exercise solve counts
    Report {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Leaderboard manifest (YAML)
        #[arg(long)]
        leaderboard: Option<PathBuf>,

        /// Directory holding one subdirectory per benchmark run
        #[arg(long)]
        benchmarks_dir: Option<PathBuf>,

        /// Name of the result file inside each exercise directory
        #[arg(long)]
        results_file: Option<String>,

        /// Number of exercises in the benchmark suite
        #[arg(long)]
        total_exercises: Option<usize>,

        /// Also write the summary as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// List the models credited for each exercise
        #[arg(long)]
        show_models: bool,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "exercise-stats.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Diagnostics share stdout with the report; keep escapes out of pipes.
    tracing_subscriber::fmt()
        .with_ansi(std::io::stdout().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("exercise_stats=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            config,
            leaderboard,
            benchmarks_dir,
            results_file,
            total_exercises,
            json,
            show_models,
        } => run_report(ReportArgs {
            config,
            leaderboard,
            benchmarks_dir,
            results_file,
            total_exercises,
            json,
            show_models,
        }),
        Commands::Init { output } => init_config(output),
    }
}

struct ReportArgs {
    config: Option<PathBuf>,
    leaderboard: Option<PathBuf>,
    benchmarks_dir: Option<PathBuf>,
    results_file: Option<String>,
    total_exercises: Option<usize>,
    json: Option<PathBuf>,
    show_models: bool,
}

/// @ai:intent Run the aggregation and print the report
/// @ai:effects fs:read, fs:write, io
fn run_report(args: ReportArgs) -> Result<()> {
    let mut config = StatsConfig::load_or_default(args.config.as_deref())?;

    if let Some(path) = args.leaderboard {
        config.paths.leaderboard_file = path;
    }
    if let Some(dir) = args.benchmarks_dir {
        config.paths.benchmarks_dir = dir;
    }
    if let Some(name) = args.results_file {
        config.paths.results_file_name = name;
    }
    if let Some(total) = args.total_exercises {
        config.suite.total_exercises = total;
    }

    let solutions = analyze(&config)?;

    let printer = ReportPrinter::new(config.suite.total_exercises).with_models(args.show_models);
    let summary = printer.print_report(&solutions);

    if let Some(path) = args.json {
        JsonReporter::new().generate(&summary, &path)?;
    }

    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = StatsConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}
