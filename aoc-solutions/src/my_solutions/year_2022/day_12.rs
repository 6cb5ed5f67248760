use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::{Neighbourhood, Point};
use crate::utils::grid::Grid;
use crate::utils::search::{SearchProblem, search, search_from};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["grid", "search"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    elevations: Grid<u8>,
    start: Point,
    goal: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_map(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_map(input: &str) -> Result<SharedData, anyhow::Error> {
    let grid = Grid::parse_chars(input)?;
    let find_unique = |marker: char| -> Result<Point, anyhow::Error> {
        let mut found = grid.iter().filter(|&(_, &c)| c == marker).map(|(p, _)| p);
        match (found.next(), found.next()) {
            (Some(p), None) => Ok(p),
            (None, _) => Err(anyhow!("no '{marker}' on the map")),
            (Some(_), Some(_)) => Err(anyhow!("more than one '{marker}' on the map")),
        }
    };
    let start = find_unique('S')?;
    let goal = find_unique('E')?;

    if let Some((p, c)) = grid
        .iter()
        .find(|&(_, &c)| !c.is_ascii_lowercase() && c != 'S' && c != 'E')
    {
        return Err(anyhow!("unexpected {c:?} at {p}"));
    }

    let elevations = grid.map(|&c| match c {
        'S' => 0,
        'E' => b'z' - b'a',
        c => c as u8 - b'a',
    });
    Ok(SharedData {
        elevations,
        start,
        goal,
    })
}

/// Climb at most one unit per step, drop any amount.
struct HillClimb<'a> {
    map: &'a SharedData,
}

impl SearchProblem for HillClimb<'_> {
    type State = Point;
    type Cost = u32;

    fn expand(&self, p: &Point) -> Vec<(Point, u32)> {
        let grid = &self.map.elevations;
        let Some(&here) = grid.get(*p) else {
            return Vec::new();
        };
        grid.neighbours(*p, Neighbourhood::ORTHOGONAL)
            .into_iter()
            .filter(|&n| grid.get(n).is_some_and(|&there| there <= here + 1))
            .map(|n| (n, 1))
            .collect()
    }

    fn is_goal(&self, p: &Point) -> bool {
        *p == self.map.goal
    }

    // one step moves one unit of Manhattan distance
    fn heuristic(&self, p: &Point) -> u32 {
        p.manhattan(self.map.goal) as u32
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &SharedData = shared;
        search(&HillClimb { map }, map.start)
            .map(|path| path.cost.to_string())
            .ok_or_else(|| SolveError::failed("summit is unreachable from the start"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &SharedData = shared;
        let trailheads: Vec<Point> = map
            .elevations
            .iter()
            .filter(|&(_, &e)| e == 0)
            .map(|(p, _)| p)
            .collect();
        search_from(&HillClimb { map }, trailheads)
            .map(|path| path.cost.to_string())
            .ok_or_else(|| SolveError::failed("summit is unreachable from every trailhead"))
    }
}
