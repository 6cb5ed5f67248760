use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::geometry::Cube;
use crate::utils::voxel::Droplet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["voxel", "flood-fill"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Droplet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> Result<Cube, anyhow::Error> {
                line.trim()
                    .split(',')
                    .map(|v| v.trim().parse::<i64>())
                    .collect_tuple()
                    .ok_or_else(|| anyhow!("expected three coordinates"))
                    .and_then(|(x, y, z)| Ok(Cube::new(x?, y?, z?)))
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Droplet, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(droplet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(droplet.total_surface().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(droplet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(droplet.exterior_surface().to_string())
    }
}
