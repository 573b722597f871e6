//! Puzzle solver framework
//!
//! A type-safe framework for daily puzzle solvers. Each day is implemented
//! as a solver with custom input parsing and one or two answer parts, and
//! registers itself into a day-keyed table that the driver dispatches from.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based solver definitions with parsing separated from solving
//! - A registry keyed by day with per-solver metadata (parts, tags,
//!   embedded sample input, expected answers)
//! - A plugin system so solvers self-register via `inventory`
//! - Type-erased instances with parse/solve timing
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{DynSolver, PuzzleParser, ParseError, SolveError, Solver, SolverInstance};
//!
//! struct Day1;
//!
//! impl PuzzleParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut solver = SolverInstance::<Day1>::new(1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.day(), 1);
//! ```
//!
//! # Key Concepts
//!
//! ## Parsing vs solving
//!
//! [`PuzzleParser`] owns the `SharedData` type and the `parse()` step;
//! [`PartSolver`] and [`Solver`] consume mutable shared data, so work common
//! to both parts can be computed once and memoized inside it.
//!
//! ## Plugins and derive macros
//!
//! Solvers register through `inventory` plugins, normally emitted by the
//! derive macros:
//!
//! ```ignore
//! #[derive(PuzzleSolver, RegisterPuzzle)]
//! #[puzzle_solver(parts = 2)]
//! #[puzzle(day = 4, sample = SAMPLE, tags = ["grid"], expected(part1 = "2532", part2 = "1941"))]
//! pub struct Day04;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS, RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin,
    SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macros
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
