use gridsearch_core::{Grid, Pos};

use crate::distance::manhattan;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`, in a fixed order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: Pos, to: Pos) -> u32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> u32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl WeightedPather for Grid {
    fn cost(&self, _from: Pos, to: Pos) -> u32 {
        // Walls never come out of `neighbors`.
        self.cost_of(to).unwrap_or(u32::MAX)
    }
}

impl AstarPather for Grid {
    /// Manhattan distance, or 0 when the grid has zero-cost cells: a step
    /// onto such a cell costs less than the one unit of distance it covers.
    fn estimate(&self, from: Pos, to: Pos) -> u32 {
        match self.min_step_cost() {
            Some(0) => 0,
            _ => manhattan(from, to),
        }
    }
}
