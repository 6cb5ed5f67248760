//! Solver framework for the Advent of Code catalogue
//!
//! Every puzzle is a type that parses its input once ([`AocParser`]) and then
//! answers one or more parts ([`PartSolver`] / [`Solver`]). The framework
//! keeps the parsed data, times each call, and looks puzzles up by year and
//! day through a [`SolverRegistry`].
//!
//! # Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Calories;
//!
//! impl AocParser for Calories {
//!     type SharedData<'a> = Vec<u64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split("\n\n")
//!             .map(|elf| {
//!                 elf.lines()
//!                     .map(|l| l.parse::<u64>().map_err(|_| ParseError::InvalidFormat(l.into())))
//!                     .sum::<Result<u64, ParseError>>()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(elves.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         elves.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(elves.iter().take(3).sum::<u64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Calories>(2022, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1000\n2000\n\n4000\n\n5000\n6000").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "11000");
//! assert_eq!(solver.solve(2).unwrap().answer, "18000");
//! ```
//!
//! Puzzles in `aoc-solutions` additionally derive `AutoRegisterSolver`, which
//! submits a [`SolverPlugin`] so that
//! [`RegistryBuilder::register_all_plugins`] finds them without a central list.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    PuzzleInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    DAYS_PER_YEAR, FIRST_YEAR,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// The derive macro expands to `::aoc_solver::inventory::submit!`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
