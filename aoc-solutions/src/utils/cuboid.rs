//! Counting lit cubes after a sequence of on/off cuboid instructions,
//! without visiting individual unit cubes.

use std::fmt;
use std::ops::Range;

use rustc_hash::FxHashSet;

use super::error::{Result, ToolkitError};

/// Axis-aligned cuboid made of three closed intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    axes: [(i64, i64); 3],
}

impl Region {
    /// Every interval needs `lo <= hi`, and the cube count must fit in a
    /// `u64`.
    pub fn new(x: (i64, i64), y: (i64, i64), z: (i64, i64)) -> Result<Self> {
        let axes = [x, y, z];
        if let Some((lo, hi)) = axes.iter().copied().find(|&(lo, hi)| lo > hi) {
            return Err(ToolkitError::invalid(format!("empty interval {lo}..={hi}")));
        }
        // breakpoints are stored as hi + 1
        if axes.iter().any(|&(_, hi)| hi == i64::MAX) {
            return Err(ToolkitError::invalid("interval end must be below i64::MAX"));
        }
        let fits = axes
            .iter()
            .try_fold(1u64, |acc, &(lo, hi)| acc.checked_mul(span(lo, hi)))
            .is_some();
        if !fits {
            return Err(ToolkitError::invalid(format!(
                "volume of {} overflows u64",
                Region { axes }
            )));
        }
        Ok(Self { axes })
    }

    /// The cube `lo..=hi` on every axis.
    pub fn cube(lo: i64, hi: i64) -> Result<Self> {
        Self::new((lo, hi), (lo, hi), (lo, hi))
    }

    pub fn x(&self) -> (i64, i64) {
        self.axes[0]
    }

    pub fn y(&self) -> (i64, i64) {
        self.axes[1]
    }

    pub fn z(&self) -> (i64, i64) {
        self.axes[2]
    }

    /// Checked against overflow in [`Region::new`]; intersections only shrink.
    pub fn volume(&self) -> u64 {
        self.axes.iter().map(|&(lo, hi)| span(lo, hi)).product()
    }

    pub fn intersection(&self, other: &Region) -> Option<Region> {
        let mut axes = self.axes;
        for (axis, &(lo, hi)) in axes.iter_mut().zip(&other.axes) {
            *axis = (axis.0.max(lo), axis.1.min(hi));
            if axis.0 > axis.1 {
                return None;
            }
        }
        Some(Region { axes })
    }
}

/// Cubes in `lo..=hi`. `hi < i64::MAX`, so this cannot wrap.
fn span(lo: i64, hi: i64) -> u64 {
    hi.abs_diff(lo) + 1
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [(x0, x1), (y0, y1), (z0, z1)] = self.axes;
        write!(f, "x={x0}..{x1},y={y0}..{y1},z={z0}..{z1}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub action: Action,
    pub region: Region,
}

impl Instruction {
    pub fn new(action: Action, region: Region) -> Self {
        Self { action, region }
    }

    /// The same instruction restricted to `area`, or `None` if it misses it.
    pub fn clip(&self, area: &Region) -> Option<Instruction> {
        self.region
            .intersection(area)
            .map(|region| Instruction::new(self.action, region))
    }
}

/// Sorted, deduplicated `lo` and `hi + 1` of every region along `axis`.
fn breakpoints(instructions: &[Instruction], axis: usize) -> Vec<i64> {
    let mut points: Vec<i64> = instructions
        .iter()
        .flat_map(|ins| {
            let (lo, hi) = ins.region.axes[axis];
            [lo, hi + 1]
        })
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}

/// Segment indices covered by `lo..=hi`. Both ends are breakpoints.
fn segment_range(points: &[i64], (lo, hi): (i64, i64)) -> Range<usize> {
    points.partition_point(|&p| p < lo)..points.partition_point(|&p| p <= hi)
}

/// Number of cubes left on after applying `instructions` in order to an
/// all-off space.
///
/// Each axis is split at the region boundaries; the resulting segments are
/// switched as a whole and their volumes summed at the end. The total
/// saturates at `u64::MAX`.
///
/// ```
/// use aoc_solutions::utils::cuboid::{count_on, Action, Instruction, Region};
///
/// let on = Instruction::new(Action::On, Region::cube(0, 2).unwrap());
/// let off = Instruction::new(Action::Off, Region::cube(1, 1).unwrap());
/// assert_eq!(count_on(&[on, off]), 26);
/// ```
pub fn count_on(instructions: &[Instruction]) -> u64 {
    let axes: [Vec<i64>; 3] = std::array::from_fn(|axis| breakpoints(instructions, axis));
    log::debug!(
        "cuboid breakpoints: {} x {} x {}",
        axes[0].len(),
        axes[1].len(),
        axes[2].len()
    );

    let mut on: FxHashSet<(usize, usize, usize)> = FxHashSet::default();
    for ins in instructions {
        let [xs, ys, zs]: [Range<usize>; 3] =
            std::array::from_fn(|axis| segment_range(&axes[axis], ins.region.axes[axis]));
        for i in xs {
            for j in ys.clone() {
                for k in zs.clone() {
                    match ins.action {
                        Action::On => on.insert((i, j, k)),
                        Action::Off => on.remove(&(i, j, k)),
                    };
                }
            }
        }
        log::trace!("after {:?} {}: {} segments on", ins.action, ins.region, on.len());
    }

    // a lit segment lies inside one region, so its own product fits
    let width = |axis: usize, i: usize| axes[axis][i + 1].abs_diff(axes[axis][i]);
    on.iter()
        .map(|&(i, j, k)| width(0, i) * width(1, j) * width(2, k))
        .fold(0u64, u64::saturating_add)
}

/// Unit-cube enumeration, only usable for small coordinates.
#[cfg(test)]
pub(crate) fn naive_count(instructions: &[Instruction]) -> u64 {
    let mut on = FxHashSet::default();
    for ins in instructions {
        let [(x0, x1), (y0, y1), (z0, z1)] = ins.region.axes;
        for x in x0..=x1 {
            for y in y0..=y1 {
                for z in z0..=z1 {
                    match ins.action {
                        Action::On => on.insert((x, y, z)),
                        Action::Off => on.remove(&(x, y, z)),
                    };
                }
            }
        }
    }
    on.len() as u64
}
