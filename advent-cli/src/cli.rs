//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across days; parts run sequentially within each day (default)
    #[default]
    Day,
    /// Parallelize across all day/part combinations
    Part,
}

/// Daily puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run the daily puzzle solvers", version)]
pub struct Args {
    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run; together with --day prints just that answer
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding the dayNN/dayNN.input files
    #[arg(long, default_value = ".")]
    pub input_root: PathBuf,

    /// Solve each day's embedded sample input instead of the input files
    #[arg(short = 'T', long)]
    pub test_input: bool,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
