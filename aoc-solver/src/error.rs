//! Error types for the solver framework

use thiserror::Error;

/// Error raised while turning raw puzzle input into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section of the input the puzzle needs is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Anything else
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error raised while solving one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part number is zero or larger than `Solver::PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle logic itself failed (no answer exists, bad toolkit call, ...)
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wraps any error produced by puzzle code.
    pub fn failed<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::SolveFailed(err.into())
    }
}

/// Error type for registry lookups
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the Advent of Code calendar
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
    /// Parsing failed
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Solving failed
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver for this year and day is already registered
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the Advent of Code calendar
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
}
