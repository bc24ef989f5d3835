use gridstar_core::Point;

/// Neighbor enumeration for grid searches.
///
/// The search engine only ever asks "where can I step from here?", so any
/// walkability map can drive it by implementing this trait.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

