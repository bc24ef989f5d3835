use gridstar_core::Point;
use rustc_hash::FxHashMap;

use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::traits::Pather;

/// Cost of every accepted step, orthogonal or diagonal.
const STEP_COST: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Closed,
}

/// Per-cell search bookkeeping, created the first time a cell is discovered.
#[derive(Debug, Clone)]
struct Node {
    pos: Point,
    g: u32,
    h: f64,
    f: f64,
    /// Arena index of the node this one was reached from.
    parent: Option<usize>,
    state: State,
}

/// Outcome of a single A* search.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Cells from start to goal inclusive; empty when no path exists.
    pub path: Vec<Point>,
    /// Number of cells closed before the search finished.
    pub expanded: usize,
}

impl PathResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps in the path, or `None` if no path was found.
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Run A* from `from` to `to` over the neighbors produced by `pather`.
///
/// Every step costs 1. Closed cells are never reopened. Among frontier
/// entries with equal `f` the one with the smaller heuristic estimate is
/// expanded first, then the one discovered earlier, so repeated calls on the
/// same input return the same path.
///
/// No validation is done on the endpoints: a start that `pather` gives no
/// neighbors, such as a cell outside a [`Grid`](gridstar_core::Grid),
/// simply exhausts the frontier. Use
/// [`PathFinder`](crate::PathFinder) for checked searches on a
/// [`Grid`](gridstar_core::Grid).
pub fn astar_path<P, H>(pather: &P, heuristic: &H, from: Point, to: Point) -> PathResult
where
    P: Pather + ?Sized,
    H: Heuristic + ?Sized,
{
    log::debug!("astar: searching {from} -> {to}");

    let mut nodes: Vec<Node> = Vec::new();
    let mut lookup: FxHashMap<Point, usize> = FxHashMap::default();
    let mut open = Frontier::new();

    let h = heuristic.estimate(from, to);
    nodes.push(Node {
        pos: from,
        g: 0,
        h,
        f: h,
        parent: None,
        state: State::Open,
    });
    lookup.insert(from, 0);
    open.push(0, h, h);

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0;

    while let Some(ci) = open.pop() {
        let (cpos, cg) = (nodes[ci].pos, nodes[ci].g);

        if cpos == to {
            let path = reconstruct(&nodes, ci);
            log::debug!(
                "astar: found {} step path after expanding {} cells ({} still open)",
                path.len() - 1,
                expanded,
                open.len()
            );
            return PathResult { path, expanded };
        }

        nodes[ci].state = State::Closed;
        expanded += 1;
        log::trace!("astar: expand {cpos} g={cg} f={:.3}", nodes[ci].f);

        nbuf.clear();
        pather.neighbors(cpos, &mut nbuf);

        for &np in nbuf.iter() {
            let tentative_g = cg + STEP_COST;

            let Some(&ni) = lookup.get(&np) else {
                let h = heuristic.estimate(np, to);
                let f = f64::from(tentative_g) + h;
                let ni = nodes.len();
                nodes.push(Node {
                    pos: np,
                    g: tentative_g,
                    h,
                    f,
                    parent: Some(ci),
                    state: State::Open,
                });
                lookup.insert(np, ni);
                open.push(ni, f, h);
                continue;
            };

            let n = &mut nodes[ni];
            if n.state == State::Closed || tentative_g >= n.g {
                continue;
            }
            n.g = tentative_g;
            n.f = f64::from(tentative_g) + n.h;
            n.parent = Some(ci);
            let queued = open.decrease(ni, n.f);
            debug_assert!(queued, "open node {np} missing from frontier");
        }
    }

    debug_assert!(open.is_empty());
    log::debug!("astar: no path from {from} to {to} after expanding {expanded} cells");
    PathResult {
        path: Vec::new(),
        expanded,
    }
}

/// Walk predecessor links back from `goal` and return the path start→goal.
fn reconstruct(nodes: &[Node], goal: usize) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(Some(goal), |&i| nodes[i].parent)
        .map(|i| nodes[i].pos)
        .collect();
    path.reverse();
    path
}
