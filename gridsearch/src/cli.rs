use std::path::PathBuf;

use clap::Parser;

use gridsearch_core::ParseConfig;
use gridsearch_paths::Algorithm;

use crate::report::ReportOptions;

/// Find routes through a weighted grid with five search strategies.
///
/// The grid file holds one row per line of whitespace-separated tokens:
/// `s` start, `t` target, `-1` wall, a non-negative integer step cost.
#[derive(Parser, Debug)]
#[command(name = "gridsearch", version)]
pub struct Args {
    /// Grid file to search. Prompted for on stdin when omitted.
    pub file: Option<PathBuf>,

    /// Run only these strategies (bfs, dfs, ucs, astar, greedy), in order.
    #[arg(short, long = "algorithm", value_name = "NAME")]
    pub algorithms: Vec<Algorithm>,

    /// Reject unrecognised tokens instead of treating them as cost 1.
    #[arg(long)]
    pub strict: bool,

    /// Print one JSON object per strategy instead of text.
    #[arg(long)]
    pub json: bool,

    /// Skip drawing the grid for found routes.
    #[arg(long)]
    pub no_render: bool,

    /// Draw without colour escapes.
    #[arg(long)]
    pub no_color: bool,

    /// Log search statistics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Strategies to run, defaulting to all five.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    pub fn parse_config(&self) -> ParseConfig {
        if self.strict {
            ParseConfig::strict()
        } else {
            ParseConfig::default()
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            json: self.json,
            render: !self.no_render,
            color: !self.no_color,
        }
    }
}
