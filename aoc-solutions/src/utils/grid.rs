//! Rectangular grids addressed by [`Point`].

use std::fmt;

use super::error::{Result, ToolkitError};
use super::geometry::{Neighbourhood, Point};

/// A fixed-size 2D grid stored row-major.
///
/// Dimensions are fixed at construction; cells are mutable. `(x, y)` is
/// valid iff `0 <= x < width` and `0 <= y < height`.
///
/// ```
/// use aoc_solutions::utils::grid::Grid;
/// use aoc_solutions::utils::geometry::Point;
///
/// let mut grid = Grid::parse_chars("ab\ncd").unwrap();
/// assert_eq!(grid.value_at(Point::new(1, 0)), Ok(&'b'));
/// grid.set_value_at(Point::new(1, 0), 'x').unwrap();
/// assert_eq!(grid.rows_as_str(), vec!["ax", "cd"]);
/// assert_eq!(grid.cols_as_str(), vec!["ac", "xd"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from rows. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ToolkitError::invalid("grid must have at least one cell"));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ToolkitError::invalid(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn valid(&self, p: Point) -> bool {
        (0..self.width as i64).contains(&p.x) && (0..self.height as i64).contains(&p.y)
    }

    fn index(&self, p: Point) -> Result<usize> {
        if self.valid(p) {
            Ok(p.y as usize * self.width + p.x as usize)
        } else {
            Err(ToolkitError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn value_at(&self, p: Point) -> Result<&T> {
        let idx = self.index(p)?;
        Ok(&self.cells[idx])
    }

    pub fn set_value_at(&mut self, p: Point, value: T) -> Result<()> {
        let idx = self.index(p)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Like [`Grid::value_at`] but `None` off the grid, handy when walking outward.
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).ok().map(|idx| &self.cells[idx])
    }

    /// Every point, row by row.
    pub fn all_points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// Points paired with their cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.all_points().zip(self.cells.iter())
    }

    /// Neighbours of `p` that lie on the grid.
    pub fn neighbours(&self, p: Point, neighbourhood: Neighbourhood) -> Vec<Point> {
        p.neighbours(neighbourhood)
            .into_iter()
            .filter(|&n| self.valid(n))
            .collect()
    }

    /// First point, in row-major order, whose cell satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn row(&self, y: usize) -> Option<&[T]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }
}

impl Grid<char> {
    /// One row per non-empty line of `input`.
    pub fn parse_chars(input: &str) -> Result<Self> {
        Self::from_rows(
            input
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(|line| line.chars().collect())
                .collect(),
        )
    }

    pub fn rows_as_str(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// The `i`-th string holds column `x = i` read top to bottom.
    pub fn cols_as_str(&self) -> Vec<String> {
        (0..self.width)
            .map(|x| {
                (0..self.height)
                    .map(|y| self.cells[y * self.width + x])
                    .collect()
            })
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digits() -> Grid<u8> {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_dimensions_and_access() {
        let grid = digits();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.value_at(Point::new(2, 1)), Ok(&6));
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = digits();
        assert_eq!(
            grid.value_at(Point::new(-1, 0)),
            Err(ToolkitError::OutOfBounds {
                x: -1,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(grid.set_value_at(Point::new(0, 2), 9).is_err());
    }

    #[test]
    fn test_set_then_read() {
        let mut grid = digits();
        grid.set_value_at(Point::new(1, 1), 42).unwrap();
        grid.set_value_at(Point::new(1, 1), 43).unwrap();
        assert_eq!(grid.value_at(Point::new(1, 1)), Ok(&43));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(matches!(
            Grid::<u8>::from_rows(vec![]),
            Err(ToolkitError::InvalidArgument(_))
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![1], vec![1, 2]]),
            Err(ToolkitError::InvalidArgument(_))
        ));
        assert!(Grid::<u8>::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_all_points_row_major() {
        let grid = digits();
        let points: Vec<Point> = grid.all_points().collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[3], Point::new(0, 1));
        let mut sorted = points.clone();
        sorted.sort();
        assert_eq!(points, sorted);
    }

    #[test]
    fn test_string_projections() {
        let grid = Grid::parse_chars("abc\ndef\n").unwrap();
        assert_eq!(grid.rows_as_str(), vec!["abc", "def"]);
        assert_eq!(grid.cols_as_str(), vec!["ad", "be", "cf"]);
        assert_eq!(grid.to_string(), "abc\ndef\n");
        assert_eq!(grid.find(|&c| c == 'e'), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_neighbours_clipped_to_grid() {
        let grid = digits();
        assert_eq!(grid.neighbours(Point::new(0, 0), Neighbourhood::ALL).len(), 3);
        assert_eq!(grid.neighbours(Point::new(1, 0), Neighbourhood::ORTHOGONAL).len(), 3);
    }

    proptest! {
        #[test]
        fn prop_valid_matches_bounds(w in 1usize..8, h in 1usize..8, x in -3i64..12, y in -3i64..12) {
            let grid = Grid::from_rows(vec![vec![0u8; w]; h]).unwrap();
            let inside = 0 <= x && x < w as i64 && 0 <= y && y < h as i64;
            prop_assert_eq!(grid.valid(Point::new(x, y)), inside);
            prop_assert_eq!(grid.value_at(Point::new(x, y)).is_ok(), inside);
        }
    }
}
