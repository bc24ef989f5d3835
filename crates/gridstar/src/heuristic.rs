//! Remaining-distance estimates used to order the A* frontier.

use std::fmt;
use std::str::FromStr;

use gridstar_core::Point;
use thiserror::Error;

use crate::distance;

/// Estimate of the remaining cost between two cells.
///
/// Implementations must return a non-negative value that never exceeds the
/// true number of steps between `from` and `to` (admissible), otherwise the
/// returned path is no longer guaranteed to be shortest.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> f64;
}

/// `|dx| + |dy|`. Exact for orthogonal-only movement; overestimates once
/// diagonal steps are allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

/// `max(|dx|, |dy|)`. Exact lower bound when a diagonal step costs the same
/// as an orthogonal one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagonal;

/// `sqrt(dx² + dy²)`. The default.
///
/// With unit-cost diagonals it can exceed the true step count, so the path
/// found is not guaranteed to be a shortest one. Use [`Diagonal`] when it
/// must be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        distance::manhattan(from, to) as f64
    }
}

impl Heuristic for Diagonal {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(distance::chebyshev(from, to))
    }
}

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        distance::euclidean(from, to)
    }
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> f64,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self(from, to)
    }
}

// ---------------------------------------------------------------------------
// HeuristicKind
// ---------------------------------------------------------------------------

/// Runtime selection among the built-in heuristics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    Manhattan,
    #[cfg_attr(feature = "serde", serde(alias = "chebyshev"))]
    Diagonal,
    #[default]
    Euclidean,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Manhattan,
        HeuristicKind::Diagonal,
        HeuristicKind::Euclidean,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Diagonal => "diagonal",
            HeuristicKind::Euclidean => "euclidean",
        }
    }
}

impl Heuristic for HeuristicKind {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        match self {
            HeuristicKind::Manhattan => Manhattan.estimate(from, to),
            HeuristicKind::Diagonal => Diagonal.estimate(from, to),
            HeuristicKind::Euclidean => Euclidean.estimate(from, to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a heuristic name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown heuristic {0:?} (expected manhattan, diagonal or euclidean)")]
pub struct ParseHeuristicError(pub String);

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(HeuristicKind::Manhattan),
            "diagonal" | "chebyshev" => Ok(HeuristicKind::Diagonal),
            "euclidean" => Ok(HeuristicKind::Euclidean),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_estimates() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(Manhattan.estimate(a, b), 7.0);
        assert_eq!(Diagonal.estimate(a, b), 4.0);
        assert_eq!(Euclidean.estimate(a, b), 5.0);
    }

    #[test]
    fn builtins_are_symmetric_and_zero_at_goal() {
        let a = Point::new(-2, 7);
        let b = Point::new(3, 1);
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.estimate(a, b), kind.estimate(b, a), "{kind}");
            assert_eq!(kind.estimate(a, a), 0.0, "{kind}");
        }
    }

    #[test]
    fn builtins_handle_extreme_points() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        for kind in HeuristicKind::ALL {
            let e = kind.estimate(a, b);
            assert!((e - f64::from(u32::MAX)).abs() < 1e-3, "{kind}: {e}");
        }
    }

    #[test]
    fn kind_dispatches_to_variant() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 3);
        assert_eq!(HeuristicKind::Manhattan.estimate(a, b), 5.0);
        assert_eq!(HeuristicKind::Diagonal.estimate(a, b), 3.0);
        assert_eq!(HeuristicKind::Euclidean.estimate(a, b), 13f64.sqrt());
    }

    #[test]
    fn default_is_euclidean() {
        assert_eq!(HeuristicKind::default(), HeuristicKind::Euclidean);
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: Point, _: Point| 0.0_f64;
        assert_eq!(zero.estimate(Point::new(0, 0), Point::new(9, 9)), 0.0);
        let halved = |a: Point, b: Point| Diagonal.estimate(a, b) / 2.0;
        assert_eq!(halved.estimate(Point::new(0, 0), Point::new(9, 2)), 4.5);
    }

    #[test]
    fn parse_names() {
        assert_eq!("manhattan".parse(), Ok(HeuristicKind::Manhattan));
        assert_eq!(" Diagonal ".parse(), Ok(HeuristicKind::Diagonal));
        assert_eq!("chebyshev".parse(), Ok(HeuristicKind::Diagonal));
        assert_eq!("EUCLIDEAN".parse(), Ok(HeuristicKind::Euclidean));
        assert_eq!(
            "octile".parse::<HeuristicKind>(),
            Err(ParseHeuristicError("octile".to_string()))
        );
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}
