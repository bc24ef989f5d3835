//! **gridstar-core** — core types for grid path search.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! walkability map ([`Grid`] of [`Tile`]s) that the `gridstar` search engine
//! operates on.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, Tile};
