//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data.
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use advent_solver::{PuzzleParser, ParseError};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a single part of a puzzle.
///
/// The const generic `N` is the part number (1 or 2), giving compile-time
/// validation that the part is implemented.
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    ///
    /// Shared data is mutable so that work common to both parts can be
    /// computed once and memoized.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that all day solvers implement.
///
/// Usually generated by the `PuzzleSolver` derive macro from the
/// `PartSolver` impls rather than written by hand.
///
/// # Example
///
/// ```
/// use advent_solver::{PuzzleParser, ParseError, SolveError, Solver};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().to_string()),
///             2 => Ok(shared.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Extension trait adding range validation on top of [`Solver::solve_part`].
pub trait SolverExt: Solver {
    fn solve_part_checked(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
