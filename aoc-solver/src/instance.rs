//! Parsed puzzles and the timing of each framework call
//!
//! [`SolverInstance`] runs [`AocParser::parse`](crate::AocParser::parse)
//! exactly once and then answers parts against the same shared data, so a
//! part 2 that reuses part 1's work (or mutates the data in place) sees it.
//! Every parse and every solve is bracketed by UTC timestamps; the registry
//! hands instances out as `Box<dyn DynSolver>`.

use std::fmt;

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// When a parse or solve call started and finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    fn micros(&self) -> i64 {
        self.duration().num_microseconds().unwrap_or(i64::MAX)
    }
}

/// Run `f` between two clock reads.
fn timed<T>(f: impl FnOnce() -> T) -> (T, Timing) {
    let start = Utc::now();
    let value = f();
    let end = Utc::now();
    (value, Timing { start, end })
}

/// The answer to one part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {}: {}", self.part, self.answer)
    }
}

/// Parsed shared data for one puzzle.
///
/// The lifetime `'a` is the input's: solvers whose `SharedData<'a>` borrows
/// from the input (`&'a str`, slices of lines) keep it alive through here.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S`.
    ///
    /// # Errors
    ///
    /// Whatever `S::parse` reports; nothing is kept on failure.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = timed(|| S::parse(input));
        let shared = shared?;
        log::debug!("parsed {year} day {day} in {}us", parsed.micros());

        Ok(Self {
            year,
            day,
            shared,
            parsed,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view of a [`SolverInstance`], so the registry can hand out
/// solvers of different puzzle types behind one `Box<dyn DynSolver>`.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     println!("{} day {} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for result in solver.solve_all() {
///         match result {
///             Ok(result) => println!("{result} ({})", result.duration()),
///             Err(e) => println!("{e}"),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call.
    ///
    /// # Errors
    ///
    /// [`SolveError::PartOutOfRange`] outside `1..=parts()`, otherwise
    /// whatever the part itself reports.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver declares
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }

    /// Every part in order. A failing part does not stop later ones.
    fn solve_all(&mut self) -> Vec<Result<SolveResult, SolveError>> {
        (1..=self.parts()).map(|part| self.solve(part)).collect()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, timing) = timed(|| S::solve_part_checked_range(shared, part));
        match &answer {
            Ok(answer) => log::debug!(
                "{} day {} part {part} -> {answer} in {}us",
                self.year,
                self.day,
                timing.micros()
            ),
            Err(e) => log::debug!("{} day {} part {part} failed: {e}", self.year, self.day),
        }

        Ok(SolveResult {
            part,
            answer: answer?,
            timing,
        })
    }

    fn parse_timing(&self) -> Timing {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
