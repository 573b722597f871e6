//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given day
    #[error("No solver registered for day {0}")]
    NotFound(u8),
    /// Day number outside the 1-25 calendar
    #[error("Day {0} is not a valid puzzle day")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this day
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// Day number outside the 1-25 calendar
    #[error("Cannot register solver for day {0}")]
    InvalidDay(u8),
}
