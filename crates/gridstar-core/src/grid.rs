//! A rectangular walkability map.
//!
//! [`Grid`] stores one [`Tile`] per cell in row-major order. Its dimensions
//! are fixed at construction; searches borrow it immutably, so it cannot
//! change while a search is running.

use std::fmt;
use std::str::FromStr;

use crate::{GridError, Point, Range};

/// The state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tile {
    #[default]
    Walkable,
    Blocked,
}

impl Tile {
    /// Map an integer flag to a tile: `0` is walkable, anything else blocked.
    #[inline]
    pub const fn from_flag(flag: i32) -> Self {
        if flag == 0 { Tile::Walkable } else { Tile::Blocked }
    }

    /// Parse the ASCII form (`.` walkable, `#` blocked).
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Walkable),
            '#' => Some(Tile::Blocked),
            _ => None,
        }
    }

    /// ASCII form of the tile.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Tile::Walkable => '.',
            Tile::Blocked => '#',
        }
    }

    #[inline]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Tile::Walkable)
    }
}

/// A 2D walkability map with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl Grid {
    /// Create a fully walkable grid.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            tiles: vec![Tile::Walkable; (width as usize) * (height as usize)],
            bounds: Range::new(0, 0, width, height),
        }
    }

    /// Build a grid from rows of integer flags (`0` walkable, non-zero
    /// blocked). Row `i` becomes `y = i`, column `j` becomes `x = j`.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::from_tile_rows(rows.iter().map(|row| {
            row.as_ref()
                .iter()
                .map(|&flag| Tile::from_flag(flag))
                .collect::<Vec<_>>()
        }))
    }

    fn from_tile_rows(rows: impl IntoIterator<Item = Vec<Tile>>) -> Result<Self, GridError> {
        let mut tiles = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            if y == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            tiles.extend(row);
            height += 1;
        }
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(GridError::TooLarge { width, height });
        };
        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, w, h),
        })
    }

    /// Returns the bounding range of the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * (self.bounds.width() as usize) + p.x as usize
    }

    /// Get the tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Set the tile at a point. Returns `false` (and does nothing) if the
    /// point is out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        if !self.contains(p) {
            return false;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
        true
    }

    /// Whether `p` is inside the grid and not blocked.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_walkable)
    }

    /// Row/column form of [`is_walkable`](Self::is_walkable). Out-of-bounds
    /// indices (including negative ones) are simply not walkable.
    #[inline]
    pub fn is_walkable_at(&self, row: i32, col: i32) -> bool {
        self.is_walkable(Point::new(col, row))
    }

    /// Count how many cells hold the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    /// ASCII rows of the grid, top to bottom.
    pub fn to_lines(&self) -> Vec<String> {
        let w = self.bounds.width() as usize;
        self.tiles
            .chunks(w.max(1))
            .map(|row| row.iter().map(|t| t.as_char()).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse an ASCII map: one line per row, `.` walkable and `#` blocked.
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (y, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridError::InvalidTile {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        Self::from_tile_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.to_lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_lines().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = Vec::<String>::deserialize(deserializer)?;
        lines.join("\n").parse::<Grid>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: [[i32; 5]; 5] = [
        [0, 0, 0, 1, 0],
        [1, 1, 0, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ];

    #[test]
    fn new_is_fully_walkable() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.count(Tile::Walkable), 12);
        assert_eq!(g.count(Tile::Blocked), 0);
    }

    #[test]
    fn from_rows_maps_rows_to_y() {
        let g = Grid::from_rows(&MAZE).unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 5);
        // row 1, column 3 is blocked
        assert_eq!(g.at(Point::new(3, 1)), Some(Tile::Blocked));
        assert!(!g.is_walkable_at(1, 3));
        assert!(g.is_walkable_at(1, 2));
        assert_eq!(g.count(Tile::Blocked), 7);
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let g = Grid::from_rows(&MAZE).unwrap();
        assert!(!g.is_walkable_at(-1, 0));
        assert!(!g.is_walkable_at(0, -1));
        assert!(!g.is_walkable_at(5, 0));
        assert!(!g.is_walkable_at(0, 5));
        assert_eq!(g.at(Point::new(10, 10)), None);
    }

    #[test]
    fn from_rows_rejects_empty() {
        let none: [[i32; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&none), Err(GridError::Empty));
        let zero_width: Vec<Vec<i32>> = vec![vec![], vec![]];
        assert_eq!(Grid::from_rows(&zero_width), Err(GridError::Empty));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn set_inside_and_outside() {
        let mut g = Grid::new(3, 3);
        assert!(g.set(Point::new(1, 1), Tile::Blocked));
        assert!(!g.is_walkable(Point::new(1, 1)));
        assert!(!g.set(Point::new(3, 0), Tile::Blocked));
        assert_eq!(g.count(Tile::Blocked), 1);
    }

    #[test]
    fn parse_and_display() {
        let src = "\
..#
#..
";
        let g: Grid = src.parse().unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::new(2, 0)), Some(Tile::Blocked));
        assert_eq!(g.at(Point::new(0, 1)), Some(Tile::Blocked));
        assert_eq!(g.to_string(), "..#\n#..");
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        let err = "..\n.x".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidTile {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn iter_is_row_major() {
        let g: Grid = "#.\n..".parse().unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], (Point::new(0, 0), Tile::Blocked));
        assert_eq!(items[2], (Point::new(0, 1), Tile::Walkable));
    }
}
