use std::collections::BTreeSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::geometry::Point;
use crate::utils::numeric::{Interval, merge_intervals};

const QUERY_ROW: i64 = 2_000_000;
const SEARCH_BOUND: i64 = 4_000_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["intervals", "manhattan"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    position: Point,
    beacon: Point,
    radius: i64,
}

impl Sensor {
    fn new(position: Point, beacon: Point) -> Self {
        Self {
            position,
            beacon,
            radius: position.manhattan(beacon) as i64,
        }
    }

    /// Cells of row `y` within range, if any.
    fn coverage(&self, y: i64) -> Option<Interval> {
        let reach = self.radius - (self.position.y - y).abs();
        (reach >= 0).then(|| (self.position.x - reach, self.position.x + reach))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Sensor>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(
            r"^Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)$",
        )
        .map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> Result<Sensor, anyhow::Error> {
                let caps = re
                    .captures(line.trim())
                    .ok_or_else(|| anyhow!("(line {}) unrecognised report: {line}", line_idx + 1))?;
                let mut coords = [0i64; 4];
                for (slot, value) in coords.iter_mut().zip(caps.iter().skip(1).flatten()) {
                    *slot = value
                        .as_str()
                        .parse()
                        .with_context(|| format!("(line {}) bad coordinate", line_idx + 1))?;
                }
                let [sx, sy, bx, by] = coords;
                Ok(Sensor::new(Point::new(sx, sy), Point::new(bx, by)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(sensors: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(beaconless_cells(sensors, QUERY_ROW).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(sensors: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_distress_beacon(sensors, SEARCH_BOUND)
            .map(|p| (p.x * 4_000_000 + p.y).to_string())
            .ok_or_else(|| SolveError::failed(format!("no uncovered cell within 0..={SEARCH_BOUND}")))
    }
}

/// Cells on row `y` where no beacon can be.
fn beaconless_cells(sensors: &[Sensor], y: i64) -> u64 {
    let covered = merge_intervals(&sensors.iter().filter_map(|s| s.coverage(y)).collect::<Vec<_>>());
    let total: u64 = covered.iter().map(|&(lo, hi)| (hi - lo) as u64 + 1).sum();
    let beacons_on_row = sensors
        .iter()
        .map(|s| s.beacon)
        .filter(|b| b.y == y && covered.iter().any(|&(lo, hi)| lo <= b.x && b.x <= hi))
        .map(|b| b.x)
        .collect::<BTreeSet<_>>()
        .len() as u64;
    total - beacons_on_row
}

/// The one cell in `0..=bound` on both axes that no sensor covers.
fn find_distress_beacon(sensors: &[Sensor], bound: i64) -> Option<Point> {
    (0..=bound).find_map(|y| {
        let clipped: Vec<Interval> = sensors
            .iter()
            .filter_map(|s| s.coverage(y))
            .map(|(lo, hi)| (lo.max(0), hi.min(bound)))
            .collect();
        let mut next_free = 0;
        for (lo, hi) in merge_intervals(&clipped) {
            if lo > next_free {
                break;
            }
            next_free = next_free.max(hi + 1);
        }
        (next_free <= bound).then(|| Point::new(next_free, y))
    })
}
