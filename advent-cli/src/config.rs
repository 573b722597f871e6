//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use std::path::PathBuf;

/// Resolved runtime configuration
pub struct Config {
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding the dayNN/dayNN.input files
    pub input_root: PathBuf,
    /// Solve embedded samples instead of input files
    pub test_input: bool,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
    /// Diagnostic verbosity (0 = errors only)
    pub verbose: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        let thread_count = args.threads.unwrap_or_else(num_cpus);

        Config {
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_root: args.input_root,
            test_input: args.test_input,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }

    /// Default tracing filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
