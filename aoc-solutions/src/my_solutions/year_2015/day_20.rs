use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numeric::factors;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 20, tags = ["divisors"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = u64;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .parse::<u64>()
            .map_err(anyhow::Error::from)
            .and_then(|target| {
                if target == 0 {
                    Err(anyhow!("present count must be positive"))
                } else {
                    Ok(target)
                }
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(target: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // every elf visits its own house, so house h gets at least 10h
        first_house(*target, target.div_ceil(10), |_, elf| 10 * elf)
    }
}

impl PartSolver<2> for Solver {
    fn solve(target: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // elves stop after 50 houses
        first_house(*target, target.div_ceil(11), |house, elf| {
            if house / elf <= 50 { 11 * elf } else { 0 }
        })
    }
}

/// Lowest house number in `1..=limit` receiving at least `target` presents,
/// where `gift(house, elf)` is what each dividing elf drops off.
fn first_house(target: u64, limit: u64, gift: impl Fn(u64, u64) -> u64) -> Result<String, SolveError> {
    for house in 1..=limit {
        let presents: u64 = factors(house)
            .map_err(SolveError::failed)?
            .into_iter()
            .map(|elf| gift(house, elf))
            .sum();
        if presents >= target {
            return Ok(house.to_string());
        }
    }
    Err(SolveError::failed(format!("no house below {limit} gets {target} presents")))
}
