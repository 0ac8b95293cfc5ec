//! gridsearch: run the five route searches over a grid file.

mod cli;
mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridsearch_core::Grid;

use cli::Args;

fn init_logging(verbose: bool) {
    let default = if verbose { "gridsearch=debug" } else { "gridsearch=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Ask for the grid file on stdin.
fn prompt_for_file() -> io::Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter File Name that you want run : ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = match &args.file {
        Some(p) => p.clone(),
        None => prompt_for_file()?,
    };
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let grid = Grid::parse(&text, &args.parse_config())?;
    log::info!(
        "loaded {} ({} rows, {} columns)",
        path.display(),
        grid.height(),
        grid.width()
    );

    let mut out = io::stdout().lock();
    report::run_all(&mut out, &grid, &args.algorithms(), &args.report_options())?;
    Ok(())
}
