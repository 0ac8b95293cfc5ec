use std::fmt;
use std::str::FromStr;

use gridsearch_core::{Grid, MissingMarkerError, Pos};

use crate::result::SearchResult;
use crate::{astar, bfs, dfs, greedy_best_first, ucs};

/// Start and target of `grid`, or the first one missing.
pub(crate) fn endpoints(grid: &Grid) -> Result<(Pos, Pos), MissingMarkerError> {
    Ok((grid.locate_start()?, grid.locate_target()?))
}

/// The five search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    AStar,
    GreedyBestFirst,
}

impl Algorithm {
    /// Every strategy, in reporting order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::AStar,
        Algorithm::GreedyBestFirst,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::AStar => "A* Search",
            Algorithm::GreedyBestFirst => "Best First Search",
        }
    }

    /// Run this strategy between the grid's start and target.
    pub fn run(self, grid: &Grid) -> Result<SearchResult, MissingMarkerError> {
        match self {
            Algorithm::Bfs => bfs(grid),
            Algorithm::Dfs => dfs(grid),
            Algorithm::Ucs => ucs(grid),
            Algorithm::AStar => astar(grid),
            Algorithm::GreedyBestFirst => greedy_best_first(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "greedy" | "best-first" => Ok(Algorithm::GreedyBestFirst),
            _ => Err(format!(
                "unknown algorithm \u{201c}{s}\u{201d} (expected bfs, dfs, ucs, astar or greedy)"
            )),
        }
    }
}
