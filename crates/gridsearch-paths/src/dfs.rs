use gridsearch_core::{Grid, MissingMarkerError, Pos};

use crate::algorithm::endpoints;
use crate::reconstruct::Predecessors;
use crate::result::SearchResult;
use crate::traits::Pather;

/// Depth-first search from `from` to `to`.
///
/// Neighbors are pushed in reverse so they pop in the pather's order. A
/// cell counts as visited once it is popped; later pops of the same cell
/// are discarded. The route returned is the first one found, not
/// necessarily the shortest.
pub fn dfs_path<P: Pather>(pather: &P, from: Pos, to: Pos) -> Option<Vec<Pos>> {
    let mut stack: Vec<(Pos, Option<Pos>)> = vec![(from, None)];
    let mut preds = Predecessors::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some((cur, parent)) = stack.pop() {
        if preds.contains(cur) {
            continue;
        }
        preds.insert(cur, parent);
        if cur == to {
            log::debug!("dfs: reached {to} after expanding {} cells", preds.len() - 1);
            return preds.reconstruct(to);
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &np in nbuf.iter().rev() {
            if !preds.contains(np) {
                stack.push((np, Some(cur)));
            }
        }
    }

    log::debug!("dfs: {to} unreachable after expanding {} cells", preds.len());
    None
}

/// Depth-first search between the grid's start and target.
pub fn dfs(grid: &Grid) -> Result<SearchResult, MissingMarkerError> {
    let (start, target) = endpoints(grid)?;
    Ok(SearchResult::from_path(dfs_path(grid, start, target)))
}
