use gridstar_core::{Grid, Point};

use crate::traits::Pather;

/// Orthogonal steps in enumeration order: left, up, right, down.
const ORTHOGONAL: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// Diagonal steps in enumeration order: up-left, down-left, down-right,
/// up-right.
const DIAGONAL: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
    Point::new(1, -1),
];

/// 8-way movement without corner cutting.
///
/// Orthogonal neighbors are kept whenever walkable. A diagonal neighbor is
/// kept only when it is walkable and both orthogonal cells flanking the move
/// (the one sharing its row and the one sharing its column) are walkable too.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        // cells outside the grid have no neighbors; this also keeps `p + d`
        // from overflowing near the i32 limits
        if !self.contains(p) {
            return;
        }
        for d in ORTHOGONAL {
            let n = p + d;
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
        for d in DIAGONAL {
            let n = p + d;
            if self.is_walkable(n)
                && self.is_walkable(Point::new(p.x, n.y))
                && self.is_walkable(Point::new(n.x, p.y))
            {
                buf.push(n);
            }
        }
    }
}

/// Convenience wrapper returning the walkable neighbors of `p` in a fresh
/// vector, in the same fixed order the search engine sees them.
pub fn neighbors(grid: &Grid, p: Point) -> Vec<Point> {
    let mut buf = Vec::with_capacity(8);
    grid.neighbors(p, &mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_has_eight_neighbors_in_fixed_order() {
        let g = Grid::new(3, 3);
        let c = Point::new(1, 1);
        assert_eq!(
            neighbors(&g, c),
            vec![
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 0),
                Point::new(0, 2),
                Point::new(2, 2),
                Point::new(2, 0),
            ]
        );
    }

    #[test]
    fn corner_cell_stays_in_bounds() {
        let g = Grid::new(3, 3);
        let ns = neighbors(&g, Point::new(0, 0));
        assert_eq!(ns, vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn blocked_cells_are_skipped() {
        let g: Grid = "\
.#.
...
...".parse().unwrap();
        let ns = neighbors(&g, Point::new(1, 1));
        assert!(!ns.contains(&Point::new(1, 0)));
        // both diagonals above share the blocked cell as a flank
        assert!(!ns.contains(&Point::new(0, 0)));
        assert!(!ns.contains(&Point::new(2, 0)));
        assert!(ns.contains(&Point::new(0, 2)));
        assert!(ns.contains(&Point::new(2, 2)));
        assert_eq!(ns.len(), 5);
    }

    #[test]
    fn no_squeezing_between_diagonal_walls() {
        let g: Grid = "\
.#
#.".parse().unwrap();
        assert!(neighbors(&g, Point::new(0, 0)).is_empty());
        assert!(neighbors(&g, Point::new(1, 1)).is_empty());
    }

    #[test]
    fn one_flank_blocked_is_enough_to_forbid_diagonal() {
        let g: Grid = "\
..
#.".parse().unwrap();
        let ns = neighbors(&g, Point::new(0, 0));
        assert_eq!(ns, vec![Point::new(1, 0)]);
    }

    #[test]
    fn cells_outside_the_grid_have_no_neighbors() {
        let g = Grid::new(3, 3);
        assert!(neighbors(&g, Point::new(-1, 0)).is_empty());
        assert!(neighbors(&g, Point::new(3, 1)).is_empty());
        assert!(neighbors(&g, Point::new(i32::MAX, i32::MIN)).is_empty());
    }

    #[test]
    fn blocked_diagonal_target_is_skipped() {
        let g: Grid = "\
..
.#".parse().unwrap();
        let ns = neighbors(&g, Point::new(0, 0));
        assert_eq!(ns, vec![Point::new(1, 0), Point::new(0, 1)]);
    }
}
