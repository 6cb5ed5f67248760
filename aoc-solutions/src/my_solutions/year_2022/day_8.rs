use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::{Point, Vector};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_chars(input)
            .map_err(anyhow::Error::from)
            .and_then(|grid| {
                let bad = grid.iter().find(|(_, c)| !c.is_ascii_digit()).map(|(p, &c)| (p, c));
                match bad {
                    Some((p, c)) => Err(anyhow!("non-digit {c:?} at {p}")),
                    None => Ok(grid),
                }
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = grid;
        let rows: Vec<Vec<char>> = grid.rows_as_str().iter().map(|s| s.chars().collect()).collect();
        let cols: Vec<Vec<char>> = grid.cols_as_str().iter().map(|s| s.chars().collect()).collect();

        let visible = grid
            .all_points()
            .filter(|p| {
                let (x, y) = (p.x as usize, p.y as usize);
                let (row, col) = (&rows[y], &cols[x]);
                let height = row[x];
                let lower = |trees: &[char]| trees.iter().all(|&t| t < height);
                lower(&row[..x]) || lower(&row[x + 1..]) || lower(&col[..y]) || lower(&col[y + 1..])
            })
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = grid;
        let best = grid
            .iter()
            .map(|(p, &height)| {
                Vector::ORTHOGONAL
                    .into_iter()
                    .map(|dir| viewing_distance(grid, p, dir, height))
                    .product::<usize>()
            })
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

/// Trees seen from `from` looking along `dir`, stopping at the first one at
/// least as tall.
fn viewing_distance(grid: &Grid<char>, from: Point, dir: Vector, height: char) -> usize {
    let mut seen = 0;
    let mut p = from + dir;
    while let Some(&tree) = grid.get(p) {
        seen += 1;
        if tree >= height {
            break;
        }
        p += dir;
    }
    seen
}
