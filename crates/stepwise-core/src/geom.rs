//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs; rows grow downward and columns grow to
//! the right. [`Bounds`] describes a rectangular grid anchored at the origin
//! and maps coordinates to row-major flat indices.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Absolute row and column distance to `other`.
    #[inline]
    pub fn delta(self, other: Coord) -> (i32, i32) {
        ((self.row - other.row).abs(), (self.col - other.col).abs())
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Dimensions of a rectangular grid anchored at (0, 0).
///
/// Negative dimensions are clamped to zero, so every `Bounds` is valid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    rows: i32,
    cols: i32,
}

impl Bounds {
    /// Create bounds of `rows` × `cols`.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    #[inline]
    pub fn rows(self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> i32 {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Coordinate of flat index `idx`. The index must be below [`len`](Self::len).
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Iterate over all coordinates in row-major order.
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;

    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Debug, Clone)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.coord(self.next);
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bounds.len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for BoundsIter {}
