use std::collections::VecDeque;

use gridstar_core::{Point, Range};

use crate::traits::Pather;

/// Marker for cells the search has not reached.
const UNVISITED: usize = usize::MAX;

/// Shortest path by breadth-first search, every step costing 1.
///
/// Only cells inside `range` are considered. Returns the full path (including
/// both endpoints) or `None` if `to` cannot be reached. With the same
/// `pather` this gives the reference path length A* has to match.
pub fn bfs_path<P: Pather + ?Sized>(
    pather: &P,
    range: Range,
    from: Point,
    to: Point,
) -> Option<Vec<Point>> {
    if !range.contains(from) || !range.contains(to) {
        return None;
    }
    let width = range.width() as usize;
    let idx = |p: Point| ((p.y - range.min.y) as usize) * width + (p.x - range.min.x) as usize;
    let point = |i: usize| {
        Point::new(
            (i % width) as i32 + range.min.x,
            (i / width) as i32 + range.min.y,
        )
    };

    // parent index per cell; the start points at itself
    let mut parent = vec![UNVISITED; range.len()];
    let (si, gi) = (idx(from), idx(to));
    parent[si] = si;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(si);
    let mut nbuf = Vec::with_capacity(8);

    while let Some(ci) = queue.pop_front() {
        if ci == gi {
            break;
        }
        nbuf.clear();
        pather.neighbors(point(ci), &mut nbuf);
        for &np in nbuf.iter() {
            if !range.contains(np) {
                continue;
            }
            let ni = idx(np);
            if parent[ni] != UNVISITED {
                continue;
            }
            parent[ni] = ci;
            queue.push_back(ni);
        }
    }

    if parent[gi] == UNVISITED {
        return None;
    }
    let mut path = vec![to];
    let mut ci = gi;
    while ci != si {
        ci = parent[ci];
        path.push(point(ci));
    }
    path.reverse();
    Some(path)
}
