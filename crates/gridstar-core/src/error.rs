//! Errors raised while building a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::Point;

/// Reasons a walkability map cannot be turned into a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no columns.
    #[error("grid is empty")]
    Empty,

    /// A row's width differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An ASCII map contains a character other than `.` or `#`.
    #[error("invalid tile {ch:?} at {pos}")]
    InvalidTile { ch: char, pos: Point },

    /// A dimension does not fit in an `i32` coordinate.
    #[error("grid dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },
}
