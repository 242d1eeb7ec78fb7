//! Proptest strategies and brute-force oracles for routing properties.
//!
//! Graphs are small (at most eight points) so every simple path can be
//! enumerated and compared against the engine.

use proptest::prelude::*;
use stopover_core::{Connection, Graph, Point};

/// Identifier of the `n`th generated point.
pub fn point_id(n: usize) -> String {
    format!("p{n}")
}

/// Strategy for a random graph with `min_points..=max_points` points and up
/// to three connections per point.
///
/// Distances are whole multiples of a quarter kilometre so sums are exact
/// and ties are deliberate rather than rounding accidents.
#[expect(
    clippy::float_arithmetic,
    reason = "quarter-kilometre steps are exact in binary floating point"
)]
pub fn graph_strategy(min_points: usize, max_points: usize) -> impl Strategy<Value = Graph> {
    (min_points..=max_points).prop_flat_map(|count| {
        let edge = (0..count, 0..count, 1_u32..=20, 1_u32..=30);
        proptest::collection::vec(edge, 0..=count.saturating_mul(3)).prop_map(move |edges| {
            let points = (0..count).fold(Graph::new(), |graph, n| {
                graph.with_point(Point::unnamed(point_id(n), 0.0, 0.0))
            });
            edges
                .into_iter()
                .fold(points, |graph, (from, to, quarters, minutes)| {
                    graph.with_connection(Connection::new(
                        point_id(from),
                        point_id(to),
                        f64::from(quarters) / 4.0,
                        f64::from(minutes),
                    ))
                })
        })
    })
}

/// Cost of walking `path` using the cheapest connection between each
/// consecutive pair, or `None` if some pair is not directly connected.
pub fn path_distance(graph: &Graph, path: &[String]) -> Option<f64> {
    path.windows(2)
        .map(|pair| match pair {
            [from, to] if from == to => Some(0.0),
            [from, to] => cheapest_link(graph, from, to),
            _ => None,
        })
        .sum()
}

fn cheapest_link(graph: &Graph, from: &str, to: &str) -> Option<f64> {
    graph
        .connections()
        .iter()
        .filter(|c| (c.from() == from && c.to() == to) || (c.from() == to && c.to() == from))
        .map(Connection::distance)
        .min_by(f64::total_cmp)
}

/// Shortest distance between `from` and `to` by enumerating every simple
/// path.
pub fn brute_force_distance(graph: &Graph, from: &str, to: &str) -> Option<f64> {
    if from == to {
        return Some(0.0);
    }
    let mut best: Option<f64> = None;
    let mut trail = vec![from.to_owned()];
    explore(graph, to, 0.0, &mut trail, &mut best);
    best
}

#[expect(
    clippy::float_arithmetic,
    reason = "the oracle accumulates path costs"
)]
fn explore(
    graph: &Graph,
    target: &str,
    so_far: f64,
    trail: &mut Vec<String>,
    best: &mut Option<f64>,
) {
    let Some(here) = trail.last().cloned() else {
        return;
    };
    if here == target {
        if best.is_none_or(|current| so_far < current) {
            *best = Some(so_far);
        }
        return;
    }
    for next in graph.point_ids() {
        if trail.iter().any(|seen| seen == next) {
            continue;
        }
        if let Some(step) = cheapest_link(graph, &here, next) {
            trail.push(next.to_owned());
            explore(graph, target, so_far + step, trail, best);
            trail.pop();
        }
    }
}
