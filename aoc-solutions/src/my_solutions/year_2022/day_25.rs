use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numeric::to_base_n;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 25, tags = ["radix"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                from_snafu(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = numbers.iter().sum();
        let total = u64::try_from(total).map_err(|_| SolveError::failed(format!("negative fuel total {total}")))?;
        to_snafu(total)
    }
}

fn from_snafu(s: &str) -> Result<i64, anyhow::Error> {
    if s.is_empty() {
        return Err(anyhow!("empty number"));
    }
    s.chars().try_fold(0i64, |acc, c| {
        let digit = match c {
            '2' => 2,
            '1' => 1,
            '0' => 0,
            '-' => -1,
            '=' => -2,
            _ => return Err(anyhow!("invalid SNAFU digit {c:?}")),
        };
        acc.checked_mul(5)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| anyhow!("{s} overflows i64"))
    })
}

/// Balanced base five: write `n` in plain base five, then from the least
/// significant digit rewrite 3 and 4 as -2 and -1 with a carry.
fn to_snafu(n: u64) -> Result<String, SolveError> {
    let plain = to_base_n(n, 5).map_err(SolveError::failed)?;
    let mut out = Vec::with_capacity(plain.len() + 1);
    let mut carry = 0;
    for c in plain.chars().rev() {
        let digit = c.to_digit(5).ok_or_else(|| SolveError::failed("not a base-5 digit"))? + carry;
        let (symbol, next_carry) = match digit {
            0 => ('0', 0),
            1 => ('1', 0),
            2 => ('2', 0),
            3 => ('=', 1),
            4 => ('-', 1),
            _ => ('0', 1),
        };
        out.push(symbol);
        carry = next_carry;
    }
    if carry == 1 {
        out.push('1');
    }
    Ok(out.iter().rev().collect())
}
