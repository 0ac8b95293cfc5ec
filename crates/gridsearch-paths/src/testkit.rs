//! Shared fixtures and checks for the search tests.

use std::collections::HashSet;

use gridsearch_core::{Cell, Grid, Pos};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::SearchResult;

/// Start and target in the same column with a wall between them.
pub(crate) const WALLED: &str = "\
s 1 1
-1 -1 1
t 1 1";

/// Start and target separated by a full column of walls.
pub(crate) const BARRIER: &str = "\
s 1 -1 1
1 1 -1 1
1 1 -1 t";

/// The only route around the wall in [`WALLED`].
pub(crate) fn walled_route() -> Vec<Pos> {
    [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)]
        .into_iter()
        .map(Pos::from)
        .collect()
}

pub(crate) fn grid(s: &str) -> Grid {
    s.parse().unwrap()
}

/// Assert that `result` is a found route from start to target made of
/// orthogonal steps over passable cells.
pub(crate) fn assert_valid(grid: &Grid, result: &SearchResult) {
    assert!(result.found, "no route found");
    let path = &result.path;
    assert_eq!(path.first().copied(), grid.locate_start().ok());
    assert_eq!(path.last().copied(), grid.locate_target().ok());
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
    }
    for &p in path {
        assert!(grid.passable(p), "{p} is not passable");
    }
}

/// The best achievable route measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Optimum {
    pub(crate) cost: u64,
    pub(crate) edges: usize,
}

/// Minimum cost and minimum step count over every simple route from start
/// to target, found by exhaustive enumeration. `None` if there is no route.
pub(crate) fn brute_force(grid: &Grid) -> Option<Optimum> {
    let start = grid.locate_start().ok()?;
    let target = grid.locate_target().ok()?;
    let mut on_path = HashSet::from([start]);
    let mut best = None;
    walk(grid, start, target, 0, 0, &mut on_path, &mut best);
    best
}

fn walk(
    grid: &Grid,
    cur: Pos,
    target: Pos,
    cost: u64,
    edges: usize,
    on_path: &mut HashSet<Pos>,
    best: &mut Option<Optimum>,
) {
    if cur == target {
        *best = Some(match *best {
            None => Optimum { cost, edges },
            Some(b) => Optimum {
                cost: b.cost.min(cost),
                edges: b.edges.min(edges),
            },
        });
        return;
    }
    let next: Vec<Pos> = grid.neighbors(cur).collect();
    for n in next {
        if on_path.insert(n) {
            let step = u64::from(grid.cost_of(n).unwrap());
            walk(grid, n, target, cost + step, edges + 1, on_path, best);
            on_path.remove(&n);
        }
    }
}

pub(crate) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random `rows` x `cols` grid: about a quarter walls, other cells with
/// costs in `costs`, and a start and target on distinct cells.
pub(crate) fn random_grid(
    rng: &mut impl Rng,
    rows: usize,
    cols: usize,
    costs: std::ops::RangeInclusive<u32>,
) -> Grid {
    let n = rows * cols;
    let s = rng.random_range(0..n);
    let mut t = rng.random_range(0..n - 1);
    if t >= s {
        t += 1;
    }
    let mut cells = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for c in 0..cols {
            let i = r * cols + c;
            let cell = if i == s {
                Cell::Start
            } else if i == t {
                Cell::Target
            } else if rng.random_range(0..4u32) == 0 {
                Cell::Wall
            } else {
                Cell::Open(rng.random_range(costs.clone()))
            };
            row.push(cell);
        }
        cells.push(row);
    }
    Grid::from_rows(cells).unwrap()
}
