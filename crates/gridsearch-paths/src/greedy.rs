use gridsearch_core::{Grid, MissingMarkerError, Pos};

use crate::algorithm::endpoints;
use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::reconstruct::Predecessors;
use crate::result::SearchResult;
use crate::traits::Pather;

/// Greedy best-first search from `from` to `to`.
///
/// The frontier is keyed only by the Manhattan distance to `to`; step costs
/// play no part. Equal distances pop in insertion order. Fast, but the
/// heuristic can lead it onto a costlier or longer route than necessary.
pub fn greedy_best_first_path<P: Pather>(pather: &P, from: Pos, to: Pos) -> Option<Vec<Pos>> {
    let mut open = Frontier::new();
    open.push(u64::from(manhattan(from, to)), 0, from, None);
    let mut preds = Predecessors::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cp = current.pos;
        if preds.contains(cp) {
            continue;
        }
        preds.insert(cp, current.parent);
        if cp == to {
            log::debug!(
                "greedy: reached {to} after expanding {} cells",
                preds.len() - 1
            );
            return preds.reconstruct(to);
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if !preds.contains(np) {
                open.push(u64::from(manhattan(np, to)), 0, np, Some(cp));
            }
        }
    }

    log::debug!("greedy: {to} unreachable after expanding {} cells", preds.len());
    None
}

/// Greedy best-first search between the grid's start and target.
pub fn greedy_best_first(grid: &Grid) -> Result<SearchResult, MissingMarkerError> {
    let (start, target) = endpoints(grid)?;
    Ok(SearchResult::from_path(greedy_best_first_path(
        grid, start, target,
    )))
}
