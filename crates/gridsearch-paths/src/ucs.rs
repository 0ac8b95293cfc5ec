use gridsearch_core::{Grid, MissingMarkerError, Pos};

use crate::algorithm::endpoints;
use crate::frontier::Frontier;
use crate::reconstruct::Predecessors;
use crate::result::SearchResult;
use crate::traits::WeightedPather;

/// Uniform-cost search from `from` to `to`.
///
/// The frontier is keyed by cumulative cost. A cell is settled the first
/// time it is popped, which under non-negative costs is at its cheapest;
/// duplicate entries popped afterwards are discarded.
pub fn ucs_path<P: WeightedPather>(pather: &P, from: Pos, to: Pos) -> Option<Vec<Pos>> {
    let mut open = Frontier::new();
    open.push(0, 0, from, None);
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
                "ucs: reached {to} at cost {} after expanding {} cells",
                current.g,
                preds.len() - 1
            );
            return preds.reconstruct(to);
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if preds.contains(np) {
                continue;
            }
            let g = current.g + u64::from(pather.cost(cp, np));
            open.push(g, g, np, Some(cp));
        }
    }

    log::debug!("ucs: {to} unreachable after expanding {} cells", preds.len());
    None
}

/// Uniform-cost search between the grid's start and target.
pub fn ucs(grid: &Grid) -> Result<SearchResult, MissingMarkerError> {
    let (start, target) = endpoints(grid)?;
    Ok(SearchResult::from_path(ucs_path(grid, start, target)))
}
