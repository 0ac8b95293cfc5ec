//! Geometry primitives: [`Pos`] and [`Range`].
//!
//! Coordinates are `(row, col)`, 0-indexed and row-major: rows grow down,
//! columns grow right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

/// Unit offsets in neighbor order: right, down, left, up.
///
/// Depth-first and breadth-first search break ties by this order, so it
/// decides which of several equally short routes gets reported.
pub const CARDINAL: [Pos; 4] = [
    Pos::new(0, 1),
    Pos::new(1, 0),
    Pos::new(0, -1),
    Pos::new(-1, 0),
];

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in [`CARDINAL`] order
    /// (right, down, left, up). Bounds are not checked.
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        CARDINAL.map(|d| self + d)
    }

    /// Whether `other` differs from `self` by exactly one unit on exactly
    /// one axis.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Pos ---

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Pos,
    pub max: Pos,
}

impl Range {
    /// Create a new range from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Pos::new(row0.min(row1), col0.min(col1)),
            max: Pos::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of positions in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.width() as usize) * (self.height() as usize)
        }
    }

    /// Whether the range contains no positions.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Whether `p` lies inside the range.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Row-major iterator over every position in the range.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            rng: self,
            cur: self.min,
        }
    }
}

/// Row-major iterator over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    rng: Range,
    cur: Pos,
}

impl Iterator for RangeIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.rng.is_empty() || self.cur.row >= self.rng.max.row {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.rng.max.col {
            self.cur.col = self.rng.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rng.is_empty() || self.cur.row >= self.rng.max.row {
            return (0, Some(0));
        }
        let w = self.rng.width() as usize;
        let rows_left = (self.rng.max.row - self.cur.row) as usize;
        let n = rows_left * w - (self.cur.col - self.rng.min.col) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
