//! Shared puzzle toolkit
//!
//! Reusable pieces that show up across many Advent of Code days:
//!
//! - [`geometry`]: integer points, compass directions, neighbourhoods and cubes
//! - [`grid`]: fixed-size 2D grids with bounds-checked access
//! - [`numeric`]: binary search, interval merging, divisors, radix output
//! - [`search`]: Dijkstra / A* over arbitrary state spaces
//! - [`voxel`]: exterior and total surface of cube solids
//! - [`cuboid`]: lit-cube counting over on/off cuboid instructions
//!
//! Precondition violations are reported as [`ToolkitError`].

pub mod cuboid;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod numeric;
pub mod search;
pub mod voxel;

pub use error::ToolkitError;
