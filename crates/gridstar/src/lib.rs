//! Shortest paths on walkable/blocked grids.
//!
//! This crate implements A* search over a [`Grid`] with 8-directional
//! movement. Orthogonal steps are always allowed between walkable cells; a
//! diagonal step is only allowed when both orthogonal cells it passes between
//! are walkable, so paths never squeeze through a gap between two blocked
//! corners. Every step costs 1.
//!
//! - **A\*** search with a pluggable [`Heuristic`] ([`PathFinder::find_path`],
//!   [`astar_path`])
//! - **BFS** baseline path search ([`bfs_path`])
//!
//! # Heuristics
//!
//! | Heuristic | Estimate | Notes |
//! |---|---|---|
//! | [`Manhattan`] | `\|dx\| + \|dy\|` | not admissible, path may be longer than shortest |
//! | [`Diagonal`] | `max(\|dx\|, \|dy\|)` | admissible, always returns a shortest path |
//! | [`Euclidean`] | `sqrt(dx² + dy²)` | default, not admissible, path may be longer than shortest |
//!
//! The Euclidean default can overestimate the cost of a unit diagonal step,
//! so the path it returns is not guaranteed to be a shortest one. Use
//! [`Diagonal`] when a shortest path is required.
//!
//! Any `Fn(Point, Point) -> f64` closure can be used as a custom heuristic.
//!
//! # Example
//!
//! ```
//! use gridstar::{HeuristicKind, PathFinder, Point};
//!
//! let finder = PathFinder::from_rows(
//!     &[
//!         [0, 0, 0, 1, 0],
//!         [1, 1, 0, 1, 0],
//!         [0, 0, 0, 0, 0],
//!         [0, 1, 1, 1, 0],
//!         [0, 0, 0, 0, 0],
//!     ],
//!     HeuristicKind::Euclidean,
//! )?;
//! let path = finder.find_path(Point::new(0, 0), Point::new(4, 4))?;
//! assert_eq!(path.len(), 9);
//! # Ok::<(), gridstar::PathError>(())
//! ```

mod astar;
mod bfs;
mod distance;
mod error;
mod finder;
mod frontier;
mod heuristic;
mod neighbors;
mod traits;

pub use astar::{PathResult, astar_path};
pub use bfs::bfs_path;
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::{PathError, Result};
pub use finder::PathFinder;
pub use heuristic::{
    Diagonal, Euclidean, Heuristic, HeuristicKind, Manhattan, ParseHeuristicError,
};
pub use neighbors::neighbors;
pub use traits::Pather;

pub use gridstar_core::{Grid, GridError, Point, Range, Tile};
