//! Errors returned by checked searches.
//!
//! An unreachable goal is not an error: it is reported as an empty path.

use gridstar_core::{GridError, Point};
use thiserror::Error;

/// Invalid input rejected before a search starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Start or goal lies outside the grid.
    #[error("{0} is outside the grid")]
    OutOfBounds(Point),

    /// Start or goal is a blocked cell.
    #[error("{0} is blocked")]
    Blocked(Point),

    /// The walkability map itself is malformed.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, PathError>;
