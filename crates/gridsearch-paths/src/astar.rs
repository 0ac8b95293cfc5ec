use std::collections::HashMap;

use gridsearch_core::{Grid, MissingMarkerError, Pos};

use crate::algorithm::endpoints;
use crate::frontier::Frontier;
use crate::reconstruct::Predecessors;
use crate::result::SearchResult;
use crate::traits::AstarPather;

/// Compute the cheapest route from `from` to `to` using A*.
///
/// The frontier is keyed by cumulative cost plus the pather's estimate.
/// There is no closed set: whenever a strictly cheaper route to a cell is
/// found, even one that was already expanded, its best cost and
/// predecessor are replaced and it is pushed again. Popped entries costlier
/// than the cell's best known cost are stale and skipped.
///
/// Returns the full route (including both endpoints) or `None` if `to` is
/// unreachable.
pub fn astar_path<P: AstarPather>(pather: &P, from: Pos, to: Pos) -> Option<Vec<Pos>> {
    let mut best: HashMap<Pos, u64> = HashMap::from([(from, 0)]);
    let mut preds = Predecessors::new();
    preds.insert(from, None);

    let mut open = Frontier::new();
    open.push(u64::from(pather.estimate(from, to)), 0, from, None);

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while let Some(current) = open.pop() {
        let cp = current.pos;
        if best.get(&cp).is_some_and(|&g| current.g > g) {
            continue;
        }
        if cp == to {
            log::debug!(
                "astar: reached {to} at cost {} after {expanded} expansions",
                current.g
            );
            return preds.reconstruct(to);
        }
        expanded += 1;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let tentative = current.g + u64::from(pather.cost(cp, np));
            if best.get(&np).is_some_and(|&g| tentative >= g) {
                continue;
            }
            best.insert(np, tentative);
            preds.insert(np, Some(cp));
            let f = tentative + u64::from(pather.estimate(np, to));
            open.push(f, tentative, np, Some(cp));
        }
    }

    log::debug!("astar: {to} unreachable after {expanded} expansions");
    None
}

/// A* search between the grid's start and target.
pub fn astar(grid: &Grid) -> Result<SearchResult, MissingMarkerError> {
    let (start, target) = endpoints(grid)?;
    Ok(SearchResult::from_path(astar_path(grid, start, target)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{BARRIER, WALLED, assert_valid, brute_force, grid, random_grid, seeded, walled_route};
    use crate::traits::{Pather, WeightedPather};

    #[test]
    fn walled_scenario() {
        let g = grid(WALLED);
        let r = astar(&g).unwrap();
        assert_valid(&g, &r);
        assert_eq!(r.path, walled_route());
    }

    #[test]
    fn detours_around_expensive_cells() {
        let g = grid("s 9 t\n1 1 1");
        let r = astar(&g).unwrap();
        assert_eq!(g.path_cost(&r.path), Some(4));
    }

    #[test]
    fn zero_cost_cells_do_not_mislead() {
        // Plain Manhattan distance would overestimate along the free bottom
        // row and settle for the top row at cost 4.
        let g = grid("s 1 1 1 t\n0 0 0 0 0");
        let r = astar(&g).unwrap();
        assert_valid(&g, &r);
        assert_eq!(g.path_cost(&r.path), Some(1));
    }

    #[test]
    fn barrier_means_not_found() {
        assert_eq!(astar(&grid(BARRIER)).unwrap(), SearchResult::not_found());
    }

    /// A pather whose heuristic is admissible but inconsistent, so a cell
    /// can be expanded before its cheapest route is known.
    struct Inconsistent(Grid);

    impl Pather for Inconsistent {
        fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
            Pather::neighbors(&self.0, p, buf);
        }
    }

    impl WeightedPather for Inconsistent {
        fn cost(&self, from: Pos, to: Pos) -> u32 {
            self.0.cost(from, to)
        }
    }

    impl AstarPather for Inconsistent {
        fn estimate(&self, from: Pos, _to: Pos) -> u32 {
            // Exact at (1,0), zero elsewhere.
            if from == Pos::new(1, 0) { 5 } else { 0 }
        }
    }

    #[test]
    fn reexpands_when_a_cheaper_route_appears() {
        //   s 4 1 1 t
        //   1 1 1 # #
        // (0,2) is expanded first via the top at cost 5. The estimate at
        // (1,0) holds the bottom route back until then; it reaches (0,2)
        // at cost 4, which must be pushed and expanded again for the
        // route to cost 6 rather than 7.
        let g = grid("s 4 1 1 t\n1 1 1 -1 -1");
        let p = Inconsistent(g.clone());
        let path = astar_path(&p, Pos::new(0, 0), Pos::new(0, 4)).unwrap();
        let expected: Vec<Pos> = [(0, 0), (1, 0), (1, 1), (1, 2), (0, 2), (0, 3), (0, 4)]
            .into_iter()
            .map(Pos::from)
            .collect();
        assert_eq!(path, expected);
        assert_eq!(g.path_cost(&path), Some(6));
    }

    #[test]
    fn optimal_on_random_grids() {
        let mut rng = seeded(5);
        for _ in 0..200 {
            let g = random_grid(&mut rng, 4, 4, 1..=9);
            let r = astar(&g).unwrap();
            match brute_force(&g) {
                Some(best) => {
                    assert_valid(&g, &r);
                    assert_eq!(g.path_cost(&r.path), Some(best.cost), "grid:\n{g}");
                }
                None => assert!(!r.found, "grid:\n{g}"),
            }
        }
    }

    #[test]
    fn optimal_on_random_grids_with_free_cells() {
        let mut rng = seeded(6);
        for _ in 0..200 {
            let g = random_grid(&mut rng, 3, 5, 0..=3);
            let r = astar(&g).unwrap();
            match brute_force(&g) {
                Some(best) => {
                    assert_eq!(g.path_cost(&r.path), Some(best.cost), "grid:\n{g}");
                }
                None => assert!(!r.found, "grid:\n{g}"),
            }
        }
    }
}
