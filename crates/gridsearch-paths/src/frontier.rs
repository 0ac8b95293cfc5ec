use std::collections::BinaryHeap;

use gridsearch_core::Pos;

/// Priority-queue entry for the UCS, greedy and A* frontiers.
///
/// Carries the cell it was pushed from, so a predecessor is only committed
/// for the entry that actually gets expanded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    /// Priority key; smallest pops first.
    pub(crate) key: u64,
    /// Insertion sequence number, breaks ties between equal keys.
    pub(crate) seq: u64,
    /// Cumulative cost from the start to `pos` along this entry's route.
    pub(crate) g: u64,
    pub(crate) pos: Pos,
    pub(crate) parent: Option<Pos>,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and the
        // earliest pushed among equal keys.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with first-in-first-out order among equal keys.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: u64, g: u64, pos: Pos, parent: Option<Pos>) {
        self.heap.push(Entry {
            key,
            seq: self.seq,
            g,
            pos,
            parent,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}
