use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::cuboid::{Action, Instruction, Region, count_on};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 22, tags = ["cuboid", "coordinate-compression"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(
            r"^(on|off) x=(-?\d+)\.\.(-?\d+),y=(-?\d+)\.\.(-?\d+),z=(-?\d+)\.\.(-?\d+)$",
        )
        .map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> Result<Instruction, anyhow::Error> {
                let caps = re
                    .captures(line.trim())
                    .ok_or_else(|| anyhow!("(line {}) unrecognised step: {line}", line_idx + 1))?;
                let action = match &caps[1] {
                    "on" => Action::On,
                    _ => Action::Off,
                };
                let mut bounds = [0i64; 6];
                for (slot, value) in bounds.iter_mut().zip(caps.iter().skip(2).flatten()) {
                    *slot = value
                        .as_str()
                        .parse()
                        .with_context(|| format!("(line {}) bad coordinate", line_idx + 1))?;
                }
                let [x0, x1, y0, y1, z0, z1] = bounds;
                let region = Region::new((x0, x1), (y0, y1), (z0, z1))
                    .with_context(|| format!("(line {})", line_idx + 1))?;
                Ok(Instruction::new(action, region))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let area = Region::cube(-50, 50).map_err(SolveError::failed)?;
        let clipped: Vec<Instruction> = steps.iter().filter_map(|step| step.clip(&area)).collect();
        Ok(count_on(&clipped).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_on(steps).to_string())
    }
}
