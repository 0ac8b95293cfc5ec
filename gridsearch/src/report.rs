//! Per-strategy output: plain text with a drawn grid, or JSON lines.

use std::io::{self, Write};

use serde::Serialize;

use gridsearch_core::{Grid, Pos};
use gridsearch_paths::{Algorithm, SearchResult};
use gridsearch_term::{RenderError, Renderer, path_color};

/// How results are written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub json: bool,
    pub render: bool,
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            json: false,
            render: true,
            color: true,
        }
    }
}

/// One JSON line.
#[derive(Serialize, Debug)]
struct Record<'a> {
    algorithm: Algorithm,
    name: &'static str,
    found: bool,
    path: &'a [Pos],
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run each of `algorithms` on `grid` and write its report to `out`.
///
/// A strategy that cannot start because a marker is missing is reported
/// and the rest still run. Only write failures are returned.
pub fn run_all<W: Write>(
    out: &mut W,
    grid: &Grid,
    algorithms: &[Algorithm],
    opts: &ReportOptions,
) -> io::Result<()> {
    let renderer = Renderer::new().with_color(opts.color);
    for &algo in algorithms {
        let outcome = algo.run(grid);
        match &outcome {
            Ok(r) => log::info!("{}: found={} steps={}", algo.name(), r.found, r.edges()),
            Err(e) => log::error!("{}: {e}", algo.name()),
        }
        if opts.json {
            write_json(out, grid, algo, &outcome.map_err(|e| e.to_string()))?;
            continue;
        }

        match outcome {
            Err(e) => writeln!(out, "{}: {e}", algo.name())?,
            Ok(r) if !r.found => {
                writeln!(out, "There is No Path Found With {}...", algo.name())?
            }
            Ok(r) => {
                writeln!(out, "\n--------------- {} --------------------", algo.name())?;
                writeln!(out, "Path Found With {}...", algo.name())?;
                writeln!(out, "--> {}", format_path(&r.path))?;
                if let Some(cost) = grid.path_cost(&r.path) {
                    writeln!(out, "steps: {}, cost: {cost}", r.edges())?;
                }
                if opts.render {
                    draw(out, &renderer, grid, &r, algo)?;
                }
            }
        }
    }
    out.flush()
}

fn write_json<W: Write>(
    out: &mut W,
    grid: &Grid,
    algo: Algorithm,
    outcome: &Result<SearchResult, String>,
) -> io::Result<()> {
    let record = match outcome {
        Ok(r) => Record {
            algorithm: algo,
            name: algo.name(),
            found: r.found,
            path: &r.path,
            cost: if r.found { grid.path_cost(&r.path) } else { None },
            error: None,
        },
        Err(e) => Record {
            algorithm: algo,
            name: algo.name(),
            found: false,
            path: &[],
            cost: None,
            error: Some(e.clone()),
        },
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)
}

fn draw<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    grid: &Grid,
    result: &SearchResult,
    algo: Algorithm,
) -> io::Result<()> {
    match renderer.render(out, grid, result, path_color(algo), None) {
        Ok(()) => Ok(()),
        Err(RenderError::Io(e)) => Err(e),
        // Callers only draw found routes.
        Err(RenderError::NotFound) => Ok(()),
    }
}

/// `[(r, c), (r, c), ...]`
fn format_path(path: &[Pos]) -> String {
    let cells: Vec<String> = path.iter().map(Pos::to_string).collect();
    format!("[{}]", cells.join(", "))
}
