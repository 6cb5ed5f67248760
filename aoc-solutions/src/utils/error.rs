//! Errors raised by the toolkit when a caller breaks a precondition.

use thiserror::Error;

/// Programming errors surfaced by the toolkit.
///
/// Algorithmic non-results (an unreachable goal, an empty interval list,
/// zero lit cubes) are ordinary return values, never one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    /// A grid accessor was given a point outside the grid
    #[error("point ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    /// An argument lies outside the documented domain of a utility
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ToolkitError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ToolkitError::InvalidArgument(msg.into())
    }
}

pub type Result<T, E = ToolkitError> = std::result::Result<T, E>;
