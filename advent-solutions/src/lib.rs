//! Daily puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions, one module per day.
//! Each solution uses the `RegisterPuzzle` derive macro for automatic
//! plugin registration with the solver framework, and carries its own
//! embedded sample input and expected answers.

pub mod days;
pub mod util;
