use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use stepwise_core::{Coord, Error, KeyFamily};

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    let (dr, dc) = a.delta(b);
    (dr + dc) as f64
}

/// Euclidean (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let (dr, dc) = a.delta(b);
    f64::from(dr).hypot(f64::from(dc))
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> f64 {
    let (dr, dc) = a.delta(b);
    dr.max(dc) as f64
}

/// Diagonal distance: `max + (√2 − 1)·min`.
#[inline]
pub fn diagonal(a: Coord, b: Coord) -> f64 {
    let (dr, dc) = a.delta(b);
    f64::from(dr.max(dc)) + (SQRT_2 - 1.0) * f64::from(dr.min(dc))
}

/// Octile variant: `max + √2·min`.
#[inline]
pub fn octile(a: Coord, b: Coord) -> f64 {
    let (dr, dc) = a.delta(b);
    f64::from(dr.max(dc)) + SQRT_2 * f64::from(dr.min(dc))
}

/// Selectable distance estimate for A* and greedy best-first search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    Diagonal,
    Octile,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
        Heuristic::Diagonal,
        Heuristic::Octile,
    ];

    #[inline]
    pub fn distance(self, a: Coord, b: Coord) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(a, b),
            Heuristic::Euclidean => euclidean(a, b),
            Heuristic::Chebyshev => chebyshev(a, b),
            Heuristic::Diagonal => diagonal(a, b),
            Heuristic::Octile => octile(a, b),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Diagonal => "diagonal",
            Heuristic::Octile => "octile",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.key() == s)
            .ok_or_else(|| Error::unknown_key(KeyFamily::Heuristic, s))
    }
}
