//! Lattice points, compass vectors and unit cubes.
//!
//! Coordinates use screen orientation: `x` grows to the right and `y` grows
//! downward, so row `y` of a [`Grid`](super::grid::Grid) is the `y`-th line
//! of the puzzle input and [`Vector::North`] is `(0, -1)`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point (or displacement) on the integer plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 4, 8 or 9 lattice points around `self`, row by row from the
    /// top-left, as selected by `neighbourhood`.
    pub fn neighbours(self, neighbourhood: Neighbourhood) -> Vec<Point> {
        let mut out = Vec::with_capacity(9);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let is_self = dx == 0 && dy == 0;
                let is_diagonal = dx != 0 && dy != 0;
                if (is_self && !neighbourhood.include_self)
                    || (is_diagonal && !neighbourhood.diagonals)
                {
                    continue;
                }
                out.push(Point::new(self.x + dx, self.y + dy));
            }
        }
        out
    }

    /// |Δx| + |Δy|
    pub fn manhattan(self, other: Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Free-function form of [`Point::neighbours`].
pub fn neighbours(p: Point, include_diagonals: bool, include_self: bool) -> Vec<Point> {
    p.neighbours(Neighbourhood {
        diagonals: include_diagonals,
        include_self,
    })
}

/// Free-function form of [`Point::manhattan`].
pub fn manhattan(a: Point, b: Point) -> u64 {
    a.manhattan(b)
}

// Row-major: compare y first so sorting points reads like the input text.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Componentwise product, not a dot product.
impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self + rhs.value()
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which lattice points count as neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbourhood {
    pub diagonals: bool,
    pub include_self: bool,
}

impl Neighbourhood {
    /// Up, down, left, right
    pub const ORTHOGONAL: Neighbourhood = Neighbourhood {
        diagonals: false,
        include_self: false,
    };
    /// The eight surrounding points
    pub const ALL: Neighbourhood = Neighbourhood {
        diagonals: true,
        include_self: false,
    };
    /// The 3x3 block centred on the point
    pub const BLOCK: Neighbourhood = Neighbourhood {
        diagonals: true,
        include_self: true,
    };
}

/// The eight unit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vector {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Vector {
    /// Clockwise from north.
    pub const ALL: [Vector; 8] = [
        Vector::North,
        Vector::NorthEast,
        Vector::East,
        Vector::SouthEast,
        Vector::South,
        Vector::SouthWest,
        Vector::West,
        Vector::NorthWest,
    ];

    pub const ORTHOGONAL: [Vector; 4] = [Vector::North, Vector::East, Vector::South, Vector::West];

    pub const DIAGONAL: [Vector; 4] = [
        Vector::NorthEast,
        Vector::SouthEast,
        Vector::SouthWest,
        Vector::NorthWest,
    ];

    /// (dx, dy) as a point.
    pub const fn value(self) -> Point {
        match self {
            Vector::North => Point::new(0, -1),
            Vector::NorthEast => Point::new(1, -1),
            Vector::East => Point::new(1, 0),
            Vector::SouthEast => Point::new(1, 1),
            Vector::South => Point::new(0, 1),
            Vector::SouthWest => Point::new(-1, 1),
            Vector::West => Point::new(-1, 0),
            Vector::NorthWest => Point::new(-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Vector::NorthEast | Vector::SouthEast | Vector::SouthWest | Vector::NorthWest
        )
    }

    fn rotate(self, eighths: usize) -> Vector {
        Vector::ALL[(self as usize + eighths) % 8]
    }

    /// 90 degrees clockwise
    pub fn turn_right(self) -> Vector {
        self.rotate(2)
    }

    /// 90 degrees anticlockwise
    pub fn turn_left(self) -> Vector {
        self.rotate(6)
    }

    pub fn opposite(self) -> Vector {
        self.rotate(4)
    }
}

/// A unit cube at an integer lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cube {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Cube {
    /// Unit steps along each axis, both directions.
    pub const FACES: [Cube; 6] = [
        Cube::new(1, 0, 0),
        Cube::new(-1, 0, 0),
        Cube::new(0, 1, 0),
        Cube::new(0, -1, 0),
        Cube::new(0, 0, 1),
        Cube::new(0, 0, -1),
    ];

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The six cubes sharing a face with `self`.
    pub fn face_neighbours(self) -> [Cube; 6] {
        Cube::FACES.map(|step| self + step)
    }

    pub fn is_face_adjacent(self, other: Cube) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z) == 1
    }
}

impl Add for Cube {
    type Output = Cube;

    fn add(self, rhs: Cube) -> Cube {
        Cube::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Cube {
    type Output = Cube;

    fn sub(self, rhs: Cube) -> Cube {
        Cube::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<(i64, i64, i64)> for Cube {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Cube::new(x, y, z)
    }
}
