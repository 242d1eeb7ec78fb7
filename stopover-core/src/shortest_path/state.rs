use std::cmp::Ordering;

use crate::adjacency::NodeIndex;

/// Priority-queue entry for heap-based selection.
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) distance: f64,
    pub(super) node: NodeIndex,
}

// Min-heap on (distance, node); `BinaryHeap` is a max-heap, so both
// comparisons are reversed. Lower node index means lower identifier.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
