//! Registry mapping (year, day) to solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First Advent of Code event
pub const FIRST_YEAR: u16 = 2015;
/// Puzzles per event
pub const DAYS_PER_YEAR: u8 = 25;

fn check_year_day(year: u16, day: u8) -> bool {
    year >= FIRST_YEAR && (1..=DAYS_PER_YEAR).contains(&day)
}

/// Parses input and boxes the resulting instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a puzzle without running it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct Entry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Collects factories, rejecting duplicates, then freezes into a [`SolverRegistry`].
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Floors {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         let floor: i64 = shared.chars().map(|c| if c == '(' { 1 } else { -1 }).sum();
///         Ok(floor.to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register::<Floors>(2015, 1, &["parsing"])
///     .unwrap()
///     .build();
/// let mut solver = registry.create_solver(2015, 1, "(()(()(").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), Entry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register solver type `S` for `year`/`day`.
    pub fn register<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, tags, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register an arbitrary factory with an explicit part count.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !check_year_day(year, day) {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        log::trace!("registered {year} day {day} ({parts} parts, tags {tags:?})");
        self.solvers.insert(
            (year, day),
            Entry {
                factory: Box::new(factory),
                parts,
                tags,
            },
        );
        Ok(self)
    }

    /// Register every plugin submitted through `inventory`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`, e.g. one year or one tag.
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let voxels = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"voxel"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

/// Immutable lookup from (year, day) to a solver factory.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), Entry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if !check_year_day(year, day) {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Registered puzzles in calendar order.
    pub fn puzzles(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), entry)| PuzzleInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Type-erased hook that lets a `&'static` solver value register its own type.
///
/// Every [`Solver`] gets this through the blanket impl, which is what
/// [`SolverPlugin`] stores.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day, tags)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Registration record collected with `inventory`.
///
/// Usually produced by `#[derive(AutoRegisterSolver)]`; written by hand it
/// looks like:
///
/// ```ignore
/// aoc_solver::inventory::submit! {
///     aoc_solver::SolverPlugin {
///         year: 2022,
///         day: 18,
///         solver: &Solver,
///         tags: &["voxel"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
