//! The [`Grid`] type — an immutable, rectangular matrix of [`Cell`]s.
//!
//! A grid is built once (from tokens, text or typed rows) and never mutated
//! afterwards, so it can be shared freely between searches and threads.

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, DEFAULT_COST, Marker};
use crate::config::{ParseConfig, UnknownTokens};
use crate::error::{MalformedGridError, MissingMarkerError};
use crate::geom::{Pos, Range};

/// A rectangular grid of [`Cell`]s with at most one start and one target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")
)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Pos>,
    target: Option<Pos>,
    min_step_cost: Option<u32>,
}

impl Grid {
    /// Build a grid from typed rows.
    ///
    /// Fails if there are no cells, if rows differ in length, or if more
    /// than one start or target is present. A missing start or target is
    /// not an error here; it surfaces from [`locate_start`](Self::locate_start)
    /// and [`locate_target`](Self::locate_target).
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MalformedGridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MalformedGridError::Empty);
        }
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut start: Option<Pos> = None;
        let mut target: Option<Pos> = None;
        let mut min_step_cost: Option<u32> = None;

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MalformedGridError::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                if let Some(marker) = cell.marker() {
                    let slot = match marker {
                        Marker::Start => &mut start,
                        Marker::Target => &mut target,
                    };
                    if let Some(first) = *slot {
                        return Err(MalformedGridError::DuplicateMarker {
                            marker,
                            first,
                            second: pos,
                        });
                    }
                    *slot = Some(pos);
                }
                // The start is never stepped onto, so it does not bound step costs.
                if cell != Cell::Start {
                    if let Some(cost) = cell.cost() {
                        min_step_cost = Some(min_step_cost.map_or(cost, |m| m.min(cost)));
                    }
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            cells,
            bounds: Range::new(0, 0, height as i32, width as i32),
            start,
            target,
            min_step_cost,
        })
    }

    /// Build a grid from a matrix of string tokens.
    ///
    /// `s` is the start, `t` the target, `-1` a wall and a string of ASCII
    /// digits an open cell with that cost. Other tokens are handled according
    /// to `config.unknown_tokens`.
    pub fn from_tokens<S: AsRef<str>>(
        rows: &[Vec<S>],
        config: &ParseConfig,
    ) -> Result<Self, MalformedGridError> {
        let mut typed = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (c, token) in row.iter().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                cells.push(parse_token(token.as_ref(), pos, config)?);
            }
            typed.push(cells);
        }
        Self::from_rows(typed)
    }

    /// Parse a whitespace-separated grid, one row per line.
    ///
    /// Blank lines are skipped.
    pub fn parse(text: &str, config: &ParseConfig) -> Result<Self, MalformedGridError> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_tokens(&rows, config)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Pos) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width() as usize + p.col as usize)
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn passable(&self, p: Pos) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Whether `p` is a wall inside the grid.
    #[inline]
    pub fn is_wall(&self, p: Pos) -> bool {
        self.at(p) == Some(Cell::Wall)
    }

    /// In-bounds, non-wall orthogonal neighbours of `p`, in the fixed order
    /// right, down, left, up.
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        p.neighbors_4().into_iter().filter(move |&n| self.passable(n))
    }

    /// Cost of stepping onto `p`: 1 for start, target and unweighted cells,
    /// the encoded cost for weighted cells. `None` for walls and positions
    /// outside the grid.
    #[inline]
    pub fn cost_of(&self, p: Pos) -> Option<u32> {
        self.at(p).and_then(Cell::cost)
    }

    /// Position of the start cell.
    pub fn locate_start(&self) -> Result<Pos, MissingMarkerError> {
        self.start.ok_or(MissingMarkerError {
            marker: Marker::Start,
        })
    }

    /// Position of the target cell.
    pub fn locate_target(&self) -> Result<Pos, MissingMarkerError> {
        self.target.ok_or(MissingMarkerError {
            marker: Marker::Target,
        })
    }

    /// Smallest cost of stepping onto any non-wall cell other than the start.
    pub fn min_step_cost(&self) -> Option<u32> {
        self.min_step_cost
    }

    /// Total cost of walking `path`: the entry cost of every cell after the
    /// first. Returns `None` if the path leaves the grid, crosses a wall or
    /// makes a non-orthogonal step.
    pub fn path_cost(&self, path: &[Pos]) -> Option<u64> {
        let mut total = 0u64;
        for w in path.windows(2) {
            if !w[0].is_adjacent(w[1]) {
                return None;
            }
            total += u64::from(self.cost_of(w[1])?);
        }
        if let Some(&first) = path.first() {
            if !self.passable(first) {
                return None;
            }
        }
        Some(total)
    }

    /// Row-major iterator over `(Pos, Cell)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Pos, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The cells of row `r`.
    pub fn row(&self, r: i32) -> Option<&[Cell]> {
        if r < 0 || r >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = r as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// The grid as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width() as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}

fn parse_token(token: &str, pos: Pos, config: &ParseConfig) -> Result<Cell, MalformedGridError> {
    match token {
        "s" => Ok(Cell::Start),
        "t" => Ok(Cell::Target),
        "-1" => Ok(Cell::Wall),
        _ if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) => token
            .parse::<u32>()
            .map(Cell::Open)
            .map_err(|_| MalformedGridError::CostOverflow {
                pos,
                token: token.to_string(),
            }),
        _ => match config.unknown_tokens {
            UnknownTokens::DefaultCost => {
                log::warn!("unknown grid token {token:?} at {pos}, using cost {DEFAULT_COST}");
                Ok(Cell::Open(DEFAULT_COST))
            }
            UnknownTokens::Reject => Err(MalformedGridError::UnknownToken {
                pos,
                token: token.to_string(),
            }),
        },
    }
}

impl FromStr for Grid {
    type Err = MalformedGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ParseConfig::default())
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = MalformedGridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(g: Grid) -> Self {
        g.to_rows()
    }
}

/// Writes the grid in the token format accepted by [`Grid::parse`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLED: &str = "\
s 1 1
-1 -1 1
t 1 1";

    #[test]
    fn parse_and_locate() {
        let g: Grid = WALLED.parse().unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert_eq!(g.locate_start(), Ok(Pos::new(0, 0)));
        assert_eq!(g.locate_target(), Ok(Pos::new(2, 0)));
        assert!(g.is_wall(Pos::new(1, 0)));
        assert!(g.is_wall(Pos::new(1, 1)));
        assert!(!g.is_wall(Pos::new(1, 2)));
    }

    #[test]
    fn weighted_cells_and_costs() {
        let g: Grid = "s 5 0\n1 -1 t".parse().unwrap();
        assert_eq!(g.at(Pos::new(0, 1)), Some(Cell::Open(5)));
        assert_eq!(g.cost_of(Pos::new(0, 1)), Some(5));
        assert_eq!(g.cost_of(Pos::new(0, 2)), Some(0));
        assert_eq!(g.cost_of(Pos::new(0, 0)), Some(1));
        assert_eq!(g.cost_of(Pos::new(1, 2)), Some(1));
        assert_eq!(g.cost_of(Pos::new(1, 1)), None);
        assert_eq!(g.cost_of(Pos::new(5, 5)), None);
        assert_eq!(g.min_step_cost(), Some(0));
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let g: Grid = WALLED.parse().unwrap();
        let n: Vec<Pos> = g.neighbors(Pos::new(0, 0)).collect();
        assert_eq!(n, [Pos::new(0, 1)]);
        let n: Vec<Pos> = g.neighbors(Pos::new(0, 2)).collect();
        assert_eq!(n, [Pos::new(1, 2), Pos::new(0, 1)]);
        let n: Vec<Pos> = g.neighbors(Pos::new(2, 1)).collect();
        assert_eq!(n, [Pos::new(2, 2), Pos::new(2, 0)]);
    }

    #[test]
    fn neighbor_order_is_right_down_left_up() {
        let g: Grid = "1 1 1\n1 s 1\n1 1 t".parse().unwrap();
        let n: Vec<Pos> = g.neighbors(Pos::new(1, 1)).collect();
        assert_eq!(
            n,
            [Pos::new(1, 2), Pos::new(2, 1), Pos::new(1, 0), Pos::new(0, 1)]
        );
    }

    #[test]
    fn unknown_tokens_default_to_cost_one() {
        let g: Grid = "s x\n? t".parse().unwrap();
        assert_eq!(g.at(Pos::new(0, 1)), Some(Cell::Open(1)));
        assert_eq!(g.at(Pos::new(1, 0)), Some(Cell::Open(1)));
        // Negative numbers other than -1 are not digit strings either.
        let g: Grid = "s -3 t".parse().unwrap();
        assert_eq!(g.at(Pos::new(0, 1)), Some(Cell::Open(1)));
    }

    #[test]
    fn strict_parsing_rejects_unknown_tokens() {
        let err = Grid::parse("s x t", &ParseConfig::strict()).unwrap_err();
        assert_eq!(
            err,
            MalformedGridError::UnknownToken {
                pos: Pos::new(0, 1),
                token: "x".to_string(),
            }
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = "s 1 1\n1 t".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            MalformedGridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!("".parse::<Grid>(), Err(MalformedGridError::Empty));
        assert_eq!("\n  \n".parse::<Grid>(), Err(MalformedGridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(MalformedGridError::Empty));
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        let err = "s 1 s\n1 1 t".parse::<Grid>().unwrap_err();
        assert!(matches!(
            err,
            MalformedGridError::DuplicateMarker {
                marker: Marker::Start,
                ..
            }
        ));
        let err = "s t 1\n1 1 t".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            MalformedGridError::DuplicateMarker {
                marker: Marker::Target,
                first: Pos::new(0, 1),
                second: Pos::new(1, 2),
            }
        );
    }

    #[test]
    fn oversized_cost_is_rejected() {
        let err = "s 99999999999 t".parse::<Grid>().unwrap_err();
        assert!(matches!(err, MalformedGridError::CostOverflow { .. }));
    }

    #[test]
    fn missing_markers_surface_on_locate() {
        let g: Grid = "1 1\n1 t".parse().unwrap();
        assert_eq!(
            g.locate_start(),
            Err(MissingMarkerError {
                marker: Marker::Start
            })
        );
        let g: Grid = "s 1\n1 1".parse().unwrap();
        assert_eq!(
            g.locate_target(),
            Err(MissingMarkerError {
                marker: Marker::Target
            })
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let g: Grid = "\ns 1\n\n1 t\n\n".parse().unwrap();
        assert_eq!(g.height(), 2);
    }

    #[test]
    fn path_cost_sums_entry_costs() {
        let g: Grid = "s 5 1\n1 -1 t".parse().unwrap();
        let path = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 2)];
        assert_eq!(g.path_cost(&path), Some(7));
        assert_eq!(g.path_cost(&[Pos::new(0, 0)]), Some(0));
        // Through a wall.
        assert_eq!(g.path_cost(&[Pos::new(1, 0), Pos::new(1, 1)]), None);
        // Diagonal step.
        assert_eq!(g.path_cost(&[Pos::new(0, 0), Pos::new(1, 1)]), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let g: Grid = WALLED.parse().unwrap();
        assert_eq!(g.to_string(), WALLED);
        let back: Grid = g.to_string().parse().unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn rows_and_iteration() {
        let g: Grid = WALLED.parse().unwrap();
        assert_eq!(g.row(1), Some(&[Cell::Wall, Cell::Wall, Cell::Open(1)][..]));
        assert_eq!(g.row(3), None);
        assert_eq!(g.iter().len(), 9);
        assert_eq!(g.iter().nth(6), Some((Pos::new(2, 0), Cell::Target)));
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = "s 4 -1\n1 1 t".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.locate_target(), Ok(Pos::new(1, 2)));
    }

    #[test]
    fn ragged_json_is_rejected() {
        let json = r#"[["Start",{"Open":1}],["Target"]]"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
