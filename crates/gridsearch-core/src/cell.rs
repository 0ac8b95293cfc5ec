//! The [`Cell`] type — one square of a search grid.

use std::fmt;

/// Cost of entering a start, target or unweighted open cell.
pub const DEFAULT_COST: u32 = 1;

/// A typed grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Traversable cell with the cost of stepping onto it.
    Open(u32),
    /// Never traversable.
    Wall,
    Start,
    Target,
}

impl Cell {
    /// Whether a route may pass through this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Cost of stepping onto this cell, or `None` for a wall.
    #[inline]
    pub const fn cost(self) -> Option<u32> {
        match self {
            Cell::Open(c) => Some(c),
            Cell::Start | Cell::Target => Some(DEFAULT_COST),
            Cell::Wall => None,
        }
    }

    /// The marker this cell carries, if any.
    #[inline]
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Cell::Start => Some(Marker::Start),
            Cell::Target => Some(Marker::Target),
            _ => None,
        }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Cell::Open(DEFAULT_COST)
    }
}

/// Token form used by grid files: `s`, `t`, `-1` or the cost.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Open(c) => write!(f, "{c}"),
            Cell::Wall => f.write_str("-1"),
            Cell::Start => f.write_str("s"),
            Cell::Target => f.write_str("t"),
        }
    }
}

/// One of the two unique cells every searchable grid carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Start,
    Target,
}

impl Marker {
    /// The grid-file token for this marker.
    pub const fn token(self) -> &'static str {
        match self {
            Marker::Start => "s",
            Marker::Target => "t",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => f.write_str("start"),
            Marker::Target => f.write_str("target"),
        }
    }
}
