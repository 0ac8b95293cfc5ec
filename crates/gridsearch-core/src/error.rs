//! Errors raised while building or querying a [`Grid`](crate::Grid).

use std::fmt;

use crate::cell::Marker;
use crate::geom::Pos;

/// The input could not be turned into a rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedGridError {
    /// No rows, or rows with no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A second `s` or `t` cell was found.
    DuplicateMarker {
        marker: Marker,
        first: Pos,
        second: Pos,
    },
    /// A digit token too large for a cell cost.
    CostOverflow { pos: Pos, token: String },
    /// A token that is not `s`, `t`, `-1` or a cost, under strict parsing.
    UnknownToken { pos: Pos, token: String },
}

impl fmt::Display for MalformedGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("grid: no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "grid: more than one {marker} cell (\u{201c}{}\u{201d} at {first} and {second})",
                marker.token()
            ),
            Self::CostOverflow { pos, token } => {
                write!(f, "grid: cost \u{201c}{token}\u{201d} at {pos} is out of range")
            }
            Self::UnknownToken { pos, token } => {
                write!(f, "grid: unknown token \u{201c}{token}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MalformedGridError {}

/// The grid has no start or no target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingMarkerError {
    pub marker: Marker,
}

impl fmt::Display for MissingMarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid: no {} cell (\u{201c}{}\u{201d})",
            self.marker,
            self.marker.token()
        )
    }
}

impl std::error::Error for MissingMarkerError {}
