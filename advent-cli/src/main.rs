//! Command-line driver for the daily puzzle solvers
//!
//! With `--day D --part P` it prints that one answer. With no part
//! selection it runs every registered day as a regression check against the
//! recorded answers, exiting non-zero on any mismatch.

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::{RegistryBuilder, SolverError, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use input::InputSource;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(args);
    init_tracing(&config);

    match run(config) {
        Ok(0) => {}
        Ok(fails) => std::process::exit(fails.min(255) as i32),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the -v flags
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: Config) -> Result<usize, CliError> {
    let registry = build_registry(&config.tags)?;

    if let (Some(day), Some(part)) = (config.day_filter, config.part_filter) {
        solve_single(&registry, &config, day, part)?;
        return Ok(0);
    }

    run_regression(registry, &config)
}

/// Solve exactly one part and print only its answer
fn solve_single(
    registry: &SolverRegistry,
    config: &Config,
    day: u8,
    part: u8,
) -> Result<(), CliError> {
    let info = registry
        .get_info(day)
        .ok_or(SolverError::NotFound(day))?;

    let inputs = InputSource::new(config.input_root.clone(), config.test_input);
    let input = inputs.load(day, info.sample)?;

    let mut solver = registry.create_solver(day, &input)?;
    let result = solver.solve(part).map_err(SolverError::from)?;
    println!("{}", result.answer);

    Ok(())
}

/// Run all matching solvers, checking against recorded answers.
///
/// Returns the number of failures for the process exit code.
fn run_regression(registry: SolverRegistry, config: &Config) -> Result<usize, CliError> {
    let executor = Executor::new(registry, config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(0);
    }

    // the aggregator re-orders streamed results into (day, part) order
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts
                .clone()
                .map(|part| aggregator::ResultKey { day: w.day, part })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(config.quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // drain buffered stragglers (only reached if some results never arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::ExecutorPanic)?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(results.iter().filter(|r| r.failed()).count())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
