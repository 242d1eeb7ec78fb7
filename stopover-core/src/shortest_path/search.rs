//! Label-setting search over an [`AdjacencyIndex`].
//!
//! Nodes are settled in ascending `(distance, node)` order whichever
//! selection strategy runs, so both strategies produce identical labels.
//! Time rides along with the winning distance and never influences the
//! order.

use std::collections::BinaryHeap;

use super::SearchStrategy;
use super::state::State;
use crate::Route;
use crate::adjacency::{AdjacencyIndex, Edge, NodeIndex};

/// Per-node search state.
#[derive(Debug, Clone)]
pub(super) struct Labels {
    distance: Vec<f64>,
    time: Vec<f64>,
    predecessor: Vec<Option<NodeIndex>>,
    visited: Vec<bool>,
}

impl Labels {
    fn new(len: usize, start: NodeIndex) -> Self {
        let mut labels = Self {
            distance: vec![f64::INFINITY; len],
            time: vec![0.0; len],
            predecessor: vec![None; len],
            visited: vec![false; len],
        };
        if let Some(slot) = labels.distance.get_mut(start) {
            *slot = 0.0;
        }
        labels
    }

    pub(super) fn distance(&self, node: NodeIndex) -> f64 {
        self.distance.get(node).copied().unwrap_or(f64::INFINITY)
    }

    fn time(&self, node: NodeIndex) -> f64 {
        self.time.get(node).copied().unwrap_or(0.0)
    }

    pub(super) fn reached(&self, node: NodeIndex) -> bool {
        self.distance(node).is_finite()
    }

    fn is_visited(&self, node: NodeIndex) -> bool {
        self.visited.get(node).copied().unwrap_or(true)
    }

    fn mark_visited(&mut self, node: NodeIndex) {
        if let Some(slot) = self.visited.get_mut(node) {
            *slot = true;
        }
    }

    /// Relax `edge` out of `node`; returns the new distance on improvement.
    #[expect(
        clippy::float_arithmetic,
        reason = "path costs are sums of connection costs"
    )]
    fn relax(&mut self, node: NodeIndex, edge: &Edge) -> Option<f64> {
        if self.is_visited(edge.target) {
            return None;
        }
        let candidate = self.distance(node) + edge.distance;
        if candidate >= self.distance(edge.target) {
            return None;
        }
        let time = self.time(node) + edge.time;
        let target = edge.target;
        if let (Some(distance), Some(elapsed), Some(predecessor)) = (
            self.distance.get_mut(target),
            self.time.get_mut(target),
            self.predecessor.get_mut(target),
        ) {
            *distance = candidate;
            *elapsed = time;
            *predecessor = Some(node);
            return Some(candidate);
        }
        None
    }

    /// Unvisited node with the smallest `(distance, node)`, if any is reachable.
    fn closest_unvisited(&self) -> Option<NodeIndex> {
        let mut best: Option<(f64, NodeIndex)> = None;
        for (node, (&distance, &visited)) in self.distance.iter().zip(&self.visited).enumerate() {
            if visited || !distance.is_finite() {
                continue;
            }
            // Strict comparison keeps the lowest index among equal distances.
            if best.is_none_or(|(best_distance, _)| distance < best_distance) {
                best = Some((distance, node));
            }
        }
        best.map(|(_, node)| node)
    }

    /// Rebuild the route to `end` by walking predecessors back to `start`.
    pub(super) fn route(
        &self,
        index: &AdjacencyIndex,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Option<Route> {
        if !self.reached(end) {
            return None;
        }
        let mut nodes = vec![end];
        let mut current = end;
        while current != start {
            current = self.predecessor.get(current).copied().flatten()?;
            nodes.push(current);
            // A predecessor chain can never be longer than the node count.
            if nodes.len() > index.len() {
                return None;
            }
        }
        let path = nodes
            .iter()
            .rev()
            .map(|&node| index.id_of(node).map(str::to_owned))
            .collect::<Option<Vec<_>>>()?;
        Some(Route::new(path, self.distance(end), self.time(end)))
    }
}

/// Run the search from `start`, stopping once `target` is settled.
///
/// With no target the search settles every reachable node.
pub(super) fn run(
    index: &AdjacencyIndex,
    strategy: SearchStrategy,
    start: NodeIndex,
    target: Option<NodeIndex>,
) -> Labels {
    let mut labels = Labels::new(index.len(), start);
    let settled = match strategy {
        SearchStrategy::LinearScan => run_linear(index, &mut labels, target),
        SearchStrategy::BinaryHeap => run_heap(index, &mut labels, start, target),
    };
    log::debug!("search settled {settled} of {} points", index.len());
    labels
}

fn run_linear(index: &AdjacencyIndex, labels: &mut Labels, target: Option<NodeIndex>) -> usize {
    let mut settled = 0_usize;
    while let Some(node) = labels.closest_unvisited() {
        labels.mark_visited(node);
        settled = settled.saturating_add(1);
        if Some(node) == target {
            break;
        }
        for edge in index.edges_of(node) {
            labels.relax(node, edge);
        }
    }
    settled
}

fn run_heap(
    index: &AdjacencyIndex,
    labels: &mut Labels,
    start: NodeIndex,
    target: Option<NodeIndex>,
) -> usize {
    let mut settled = 0_usize;
    let mut heap = BinaryHeap::new();
    heap.push(State {
        distance: 0.0,
        node: start,
    });

    while let Some(State { distance, node }) = heap.pop() {
        // Skip entries superseded by a shorter distance or already settled.
        if labels.is_visited(node) || distance > labels.distance(node) {
            continue;
        }
        labels.mark_visited(node);
        settled = settled.saturating_add(1);
        if Some(node) == target {
            break;
        }
        for edge in index.edges_of(node) {
            if let Some(improved) = labels.relax(node, edge) {
                heap.push(State {
                    distance: improved,
                    node: edge.target,
                });
            }
        }
    }
    settled
}
