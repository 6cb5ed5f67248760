//! Parser and solver traits implemented by every puzzle

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data both parts work on.
///
/// `SharedData` is generic over the input lifetime so a parser may either
/// own its data (`Vec<Cube>`, a `Grid<char>`) or borrow slices of the input.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("199\n200").unwrap(), vec![199, 200]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    type SharedData<'a>;

    /// Parse the puzzle input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a puzzle, selected at compile time by `N`.
///
/// Combine with `#[derive(AocSolver)]` to get a [`Solver`] impl that
/// dispatches part numbers to these impls.
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve part `N` and render the answer.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: a parser plus a runtime dispatch over its parts.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Sonar;
///
/// impl AocParser for Sonar {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sonar {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut depths = Sonar::parse("199\n200\n208\n200").unwrap();
/// assert_eq!(Sonar::solve_part(&mut depths, 1).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts (almost always 2, day 25 usually has 1)
    const PARTS: u8;

    /// Solve `part`, which the caller promises is in `1..=PARTS`.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by [`crate::SolverInstance`].
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
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
