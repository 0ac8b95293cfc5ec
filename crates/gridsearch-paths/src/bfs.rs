use std::collections::VecDeque;

use gridsearch_core::{Grid, MissingMarkerError, Pos};

use crate::algorithm::endpoints;
use crate::reconstruct::Predecessors;
use crate::result::SearchResult;
use crate::traits::Pather;

/// Breadth-first search from `from` to `to`.
///
/// Every step counts as one, so the route has the fewest possible steps.
/// Cells are marked visited when dequeued; among equally short routes the
/// pather's neighbor order decides.
pub fn bfs_path<P: Pather>(pather: &P, from: Pos, to: Pos) -> Option<Vec<Pos>> {
    let mut queue: VecDeque<(Pos, Option<Pos>)> = VecDeque::new();
    queue.push_back((from, None));
    let mut preds = Predecessors::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some((cur, parent)) = queue.pop_front() {
        if preds.contains(cur) {
            continue;
        }
        preds.insert(cur, parent);
        if cur == to {
            log::debug!("bfs: reached {to} after expanding {} cells", preds.len() - 1);
            return preds.reconstruct(to);
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &np in nbuf.iter() {
            if !preds.contains(np) {
                queue.push_back((np, Some(cur)));
            }
        }
    }

    log::debug!("bfs: {to} unreachable after expanding {} cells", preds.len());
    None
}

/// Breadth-first search between the grid's start and target.
pub fn bfs(grid: &Grid) -> Result<SearchResult, MissingMarkerError> {
    let (start, target) = endpoints(grid)?;
    Ok(SearchResult::from_path(bfs_path(grid, start, target)))
}
