use gridstar_core::{Grid, Point, Tile};

use crate::astar::{PathResult, astar_path};
use crate::error::{PathError, Result};
use crate::heuristic::{Heuristic, HeuristicKind};

/// A search context: a walkability map plus the heuristic used to order the
/// frontier.
///
/// Searches take `&self` and keep all bookkeeping local to the call, so a
/// single `PathFinder` can serve independent searches from several threads
/// as long as its heuristic is `Sync`.
#[derive(Debug, Clone)]
pub struct PathFinder<H = HeuristicKind> {
    grid: Grid,
    heuristic: H,
}

impl<H: Heuristic> PathFinder<H> {
    pub fn new(grid: Grid, heuristic: H) -> Self {
        Self { grid, heuristic }
    }

    /// Build the grid from rows of integer flags (`0` walkable, non-zero
    /// blocked) and wrap it in a finder.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R], heuristic: H) -> Result<Self> {
        Ok(Self::new(Grid::from_rows(rows)?, heuristic))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Give back the grid, e.g. to edit it before building a new finder.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Shortest path from `start` to `goal`, both inclusive.
    ///
    /// An empty vector means the goal cannot be reached. Endpoints outside
    /// the grid or on blocked cells are rejected with a [`PathError`].
    pub fn find_path(&self, start: Point, goal: Point) -> Result<Vec<Point>> {
        self.search(start, goal).map(|res| res.path)
    }

    /// Like [`find_path`](Self::find_path), also reporting how many cells
    /// were expanded.
    pub fn search(&self, start: Point, goal: Point) -> Result<PathResult> {
        self.check_endpoint(start)?;
        self.check_endpoint(goal)?;
        Ok(astar_path(&self.grid, &self.heuristic, start, goal))
    }

    fn check_endpoint(&self, p: Point) -> Result<()> {
        match self.grid.at(p) {
            None => Err(PathError::OutOfBounds(p)),
            Some(Tile::Blocked) => Err(PathError::Blocked(p)),
            Some(Tile::Walkable) => Ok(()),
        }
    }
}

impl From<Grid> for PathFinder {
    /// Finder using the default (Euclidean) heuristic.
    fn from(grid: Grid) -> Self {
        Self::new(grid, HeuristicKind::default())
    }
}
