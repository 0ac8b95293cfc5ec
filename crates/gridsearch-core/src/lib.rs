//! **gridsearch-core** — the grid model shared by every route search.
//!
//! A [`Grid`] is an immutable rectangle of typed [`Cell`]s (open with a
//! step cost, wall, start, target). It answers the neighbour and cost
//! queries the search algorithms in `gridsearch-paths` are built on.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, DEFAULT_COST, Marker};
pub use config::{ParseConfig, UnknownTokens};
pub use error::{MalformedGridError, MissingMarkerError};
pub use geom::{CARDINAL, Pos, Range};
pub use grid::Grid;
