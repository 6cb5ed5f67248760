//! Advent of Code puzzle toolkit and solutions with automatic registration
//!
//! [`utils`] holds the reusable building blocks (grids, geometry, search,
//! interval and voxel helpers). Puzzle solutions live under `my_solutions`,
//! organised by year, and register themselves with the solver framework
//! through the `AutoRegisterSolver` derive macro.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
