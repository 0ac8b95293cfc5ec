use std::collections::HashMap;

use gridsearch_core::Pos;

/// Predecessor map built during a search.
///
/// Maps each reached cell to the cell it was reached from; the start maps
/// to `None`.
#[derive(Debug, Clone, Default)]
pub struct Predecessors {
    map: HashMap<Pos, Option<Pos>>,
}

impl Predecessors {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the predecessor of `pos`.
    #[inline]
    pub fn insert(&mut self, pos: Pos, parent: Option<Pos>) {
        self.map.insert(pos, parent);
    }

    /// Whether `pos` has a recorded predecessor.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.map.contains_key(&pos)
    }

    /// The recorded predecessor of `pos`: `None` if `pos` was never reached,
    /// `Some(None)` for the start.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Option<Pos>> {
        self.map.get(&pos).copied()
    }

    /// Number of cells with a recorded predecessor.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Walk back from `end` to the start and return the route start → `end`.
    ///
    /// Returns `None` if `end` was never reached, or if the chain does not
    /// terminate at a start entry within `len()` steps.
    pub fn reconstruct(&self, end: Pos) -> Option<Vec<Pos>> {
        let mut path = Vec::new();
        let mut cur = Some(end);
        while let Some(p) = cur {
            if path.len() > self.map.len() {
                return None;
            }
            path.push(p);
            cur = self.get(p)?;
        }
        path.reverse();
        Some(path)
    }
}
