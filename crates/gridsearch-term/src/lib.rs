//! Crossterm rendering for gridsearch.
//!
//! Provides a [`Renderer`] that draws a [`Grid`] as a grey cost heatmap,
//! darker meaning costlier, with a found route overlaid as markers in the
//! colour of the algorithm that produced it.

use std::fmt;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use gridsearch_core::{Cell, Grid, Pos};
use gridsearch_paths::{Algorithm, SearchResult};

/// Route marker colour for each algorithm.
pub fn path_color(algo: Algorithm) -> Color {
    match algo {
        Algorithm::Bfs => Color::Blue,
        Algorithm::Dfs => Color::Green,
        Algorithm::Ucs => Color::Rgb {
            r: 128,
            g: 0,
            b: 128,
        },
        Algorithm::AStar => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        Algorithm::GreedyBestFirst => Color::Red,
    }
}

/// Grey level for walls.
const WALL_SHADE: u8 = 40;
/// Lightest and darkest grey levels used for open cells.
const LIGHT: u8 = 250;
const DARK: u8 = 90;

fn grey(level: u8) -> Color {
    Color::Rgb {
        r: level,
        g: level,
        b: level,
    }
}

/// Heatmap value of a cell; the start and target count as zero.
fn heat(cell: Cell) -> Option<u32> {
    match cell {
        Cell::Open(c) => Some(c),
        Cell::Start | Cell::Target => Some(0),
        Cell::Wall => None,
    }
}

/// Errors from [`Renderer::render`].
#[derive(Debug)]
pub enum RenderError {
    /// The result carries no route to draw.
    NotFound,
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("render: no route to draw"),
            Self::Io(e) => write!(f, "render: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NotFound => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Draws grids and routes as text.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    /// Emit colours. Without colour, route cells show `*`.
    pub color: bool,
}

impl Renderer {
    /// Create a new renderer with colour enabled.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Configure whether colour escape sequences are written.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Draw `grid` with the route of `result` overlaid in `marker`, under
    /// the `title` line if one is given.
    ///
    /// Fails with [`RenderError::NotFound`] if `result` has no route.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        grid: &Grid,
        result: &SearchResult,
        marker: Color,
        title: Option<&str>,
    ) -> Result<(), RenderError> {
        if !result.found {
            return Err(RenderError::NotFound);
        }

        let (lo, hi) = grid
            .iter()
            .filter_map(|(_, c)| heat(c))
            .fold((u32::MAX, 0), |(lo, hi), h| (lo.min(h), hi.max(h)));
        let width = grid
            .iter()
            .map(|(_, c)| token(c).len())
            .max()
            .unwrap_or(1);
        let on_path = |p: Pos| result.path.contains(&p);

        if let Some(title) = title {
            queue!(out, Print(title), Print("\n"))?;
        }
        for (p, cell) in grid.iter() {
            if p.col > 0 {
                queue!(out, Print(" "))?;
            }
            let routed = on_path(p);
            let text = match cell {
                Cell::Open(_) if routed => self.route_glyph().to_string(),
                _ => token(cell),
            };
            if self.color {
                let bg = match heat(cell) {
                    Some(h) => grey(shade(h, lo, hi)),
                    None => grey(WALL_SHADE),
                };
                let fg = if routed {
                    marker
                } else if matches!(bg, Color::Rgb { r, .. } if r < 160) {
                    Color::White
                } else {
                    Color::Black
                };
                queue!(out, SetBackgroundColor(bg), SetForegroundColor(fg))?;
                if routed {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, Print(format!("{text:>width$}")))?;
                queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            } else {
                queue!(out, Print(format!("{text:>width$}")))?;
            }
            if p.col == grid.width() - 1 {
                queue!(out, Print("\n"))?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn route_glyph(&self) -> char {
        if self.color { '\u{25cf}' } else { '*' }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown for a cell that is not on the route.
fn token(cell: Cell) -> String {
    match cell {
        Cell::Wall => "#".to_string(),
        other => other.to_string(),
    }
}

/// Map `h` in `lo..=hi` onto `LIGHT..=DARK`.
fn shade(h: u32, lo: u32, hi: u32) -> u8 {
    if hi <= lo {
        return LIGHT;
    }
    let span = u64::from(LIGHT - DARK);
    let t = u64::from(h - lo) * span / u64::from(hi - lo);
    LIGHT - t as u8
}
