//! Indexed binary min-heap backing the A* open set.
//!
//! Entries are search-node ids. Besides the heap array, a slot table maps
//! every node id to its current heap position, so a queued node's priority
//! can be lowered and the node repositioned in O(log n) instead of pushing a
//! duplicate entry.

use std::cmp::Ordering;

/// Slot value for nodes that are not in the heap.
const NOT_QUEUED: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Entry {
    node: usize,
    f: f64,
    h: f64,
}

impl Entry {
    /// Lower `f` first, then lower `h`, then the node created earlier.
    #[inline]
    fn key_cmp(&self, other: &Entry) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.node.cmp(&other.node))
    }

    #[inline]
    fn precedes(&self, other: &Entry) -> bool {
        self.key_cmp(other) == Ordering::Less
    }
}

/// Min-priority queue of node ids with decrease-key.
///
/// Node ids are expected to be small dense integers (arena indices).
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: Vec<Entry>,
    slots: Vec<usize>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `node` is currently queued.
    #[inline]
    pub(crate) fn contains(&self, node: usize) -> bool {
        self.slots.get(node).is_some_and(|&s| s != NOT_QUEUED)
    }

    /// Queue `node` with priority `f` and tie-breaker `h`.
    pub(crate) fn push(&mut self, node: usize, f: f64, h: f64) {
        debug_assert!(!self.contains(node), "node {node} queued twice");
        if node >= self.slots.len() {
            self.slots.resize(node + 1, NOT_QUEUED);
        }
        let pos = self.heap.len();
        self.heap.push(Entry { node, f, h });
        self.slots[node] = pos;
        self.sift_up(pos);
    }

    /// Remove and return the node with the smallest priority.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slots[top.node] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top.node)
    }

    /// Lower the priority of a queued node to `f` and move it to its new
    /// position. Returns `false` if the node is not queued.
    pub(crate) fn decrease(&mut self, node: usize, f: f64) -> bool {
        let Some(&pos) = self.slots.get(node) else {
            return false;
        };
        if pos == NOT_QUEUED {
            return false;
        }
        debug_assert!(f <= self.heap[pos].f, "priority of node {node} increased");
        self.heap[pos].f = f;
        self.sift_up(pos);
        true
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].node] = a;
        self.slots[self.heap[b].node] = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;
            if left < len && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == pos {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(q: &mut Frontier) -> Vec<usize> {
        std::iter::from_fn(|| q.pop()).collect()
    }

    #[test]
    fn pops_in_priority_order() {
        let mut q = Frontier::new();
        q.push(0, 5.0, 0.0);
        q.push(1, 1.0, 0.0);
        q.push(2, 3.0, 0.0);
        q.push(3, 4.0, 0.0);
        assert_eq!(q.len(), 4);
        assert_eq!(drain(&mut q), vec![1, 2, 3, 0]);
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn ties_prefer_lower_h_then_older_node() {
        let mut q = Frontier::new();
        q.push(0, 4.0, 2.0);
        q.push(1, 4.0, 1.0);
        q.push(2, 4.0, 2.0);
        q.push(3, 4.0, 1.0);
        assert_eq!(drain(&mut q), vec![1, 3, 0, 2]);
    }

    #[test]
    fn decrease_repositions_node() {
        let mut q = Frontier::new();
        q.push(0, 2.0, 0.0);
        q.push(1, 3.0, 0.0);
        q.push(2, 9.0, 0.0);
        assert!(q.decrease(2, 1.0));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(1));
    }

    #[test]
    fn decrease_ignores_unqueued_nodes() {
        let mut q = Frontier::new();
        q.push(0, 1.0, 0.0);
        assert!(!q.decrease(7, 0.0));
        assert_eq!(q.pop(), Some(0));
        assert!(!q.decrease(0, 0.0));
    }

    #[test]
    fn contains_tracks_membership() {
        let mut q = Frontier::new();
        assert!(!q.contains(0));
        q.push(0, 1.0, 0.0);
        q.push(1, 2.0, 0.0);
        assert!(q.contains(0) && q.contains(1));
        q.pop();
        assert!(!q.contains(0));
        assert!(q.contains(1));
    }

    #[test]
    fn random_pushes_and_decreases_stay_ordered() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        let mut q = Frontier::new();
        let mut prio = Vec::new();
        for node in 0..200 {
            let f = f64::from(rng.u32(0..50));
            prio.push(f);
            q.push(node, f, 0.0);
        }
        for _ in 0..100 {
            let node = rng.usize(0..prio.len());
            let f = prio[node] - f64::from(rng.u32(0..10));
            prio[node] = f;
            assert!(q.decrease(node, f));
        }
        let popped = drain(&mut q);
        assert_eq!(popped.len(), 200);
        for pair in popped.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(prio[a] < prio[b] || (prio[a] == prio[b] && a < b));
        }
    }
}
