//! Exact open-tour sequencing for small destination sets.

use std::collections::BTreeSet;

use super::{TourPlan, TourPlanner};
use crate::{Route, RouteError, ShortestPathEngine, ShortestPathTree};

/// Default cap on destinations; the search is factorial in this count.
const DEFAULT_MAX_DESTINATIONS: usize = 8;

/// Search every visiting order and keep the cheapest by total distance.
///
/// Pairwise distances come from one shortest-path tree per stop, then a
/// depth-first branch-and-bound walks the orders in id order. Among orders
/// of equal distance the first one found wins. Destinations outside the
/// start's component are reported as unreachable.
///
/// # Examples
/// ```
/// use stopover_core::{
///     Connection, ExhaustivePlanner, Graph, MultiStopRouter, Point, RouterConfig,
/// };
///
/// // On the line F - S - N - X a greedy walk from S grabs N, doubles back
/// // to F and then crosses the whole line to X. Visiting F first is cheaper.
/// let graph = Graph::new()
///     .with_point(Point::unnamed("S", 0.0, 0.0))
///     .with_point(Point::unnamed("N", 0.0, 0.0))
///     .with_point(Point::unnamed("F", 0.0, 0.0))
///     .with_point(Point::unnamed("X", 0.0, 0.0))
///     .with_connection(Connection::new("S", "N", 1.0, 1.0))
///     .with_connection(Connection::new("S", "F", 1.5, 1.0))
///     .with_connection(Connection::new("N", "X", 3.0, 1.0));
/// let router = MultiStopRouter::with_planner(ExhaustivePlanner::default(), RouterConfig::default());
///
/// let route = router.optimal_route(&graph, "S", &["N", "F", "X"])?;
/// assert_eq!(route.path(), ["S", "F", "S", "N", "X"]);
/// assert!((route.total_distance() - 7.0).abs() < 1e-9);
/// # Ok::<(), stopover_core::RouteError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustivePlanner {
    max_destinations: usize,
}

impl ExhaustivePlanner {
    /// Planner accepting at most `max_destinations` distinct destinations.
    #[must_use]
    pub const fn new(max_destinations: usize) -> Self {
        Self { max_destinations }
    }

    /// Largest destination set this planner accepts.
    #[must_use]
    pub const fn max_destinations(&self) -> usize {
        self.max_destinations
    }
}

impl Default for ExhaustivePlanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DESTINATIONS)
    }
}

impl TourPlanner for ExhaustivePlanner {
    fn plan(
        &self,
        engine: &ShortestPathEngine<'_>,
        start: &str,
        destinations: &BTreeSet<String>,
    ) -> Result<TourPlan, RouteError> {
        if destinations.len() > self.max_destinations {
            return Err(RouteError::TooManyDestinations {
                count: destinations.len(),
                limit: self.max_destinations,
            });
        }

        let origin = engine.tree_from(start)?;
        let (reachable, unreachable): (Vec<&str>, Vec<&str>) = destinations
            .iter()
            .map(String::as_str)
            .partition(|id| origin.reaches(id));

        // Stop 0 is the start; stop i + 1 is reachable[i].
        let mut trees = Vec::with_capacity(reachable.len().saturating_add(1));
        trees.push(origin);
        for id in &reachable {
            trees.push(engine.tree_from(id)?);
        }
        let costs = CostMatrix::new(&trees, &reachable);

        let mut search = OrderSearch::new(&costs, reachable.len());
        search.descend(0, 0.0);
        let order = search.best.map(|(_, order)| order).unwrap_or_default();

        let mut route = Route::single(start);
        let mut visited = Vec::with_capacity(order.len());
        let mut previous = 0_usize;
        for stop in order {
            let (Some(tree), Some(id)) = (trees.get(previous), stop_id(&reachable, stop)) else {
                break;
            };
            route.extend_with(tree.route_to(id)?);
            visited.push(id.to_owned());
            previous = stop;
        }
        log::debug!(
            "exhaustive plan from {start:?} visits {} destination(s), {} km",
            visited.len(),
            route.total_distance()
        );

        Ok(TourPlan {
            route,
            visited,
            unreachable: unreachable.into_iter().map(str::to_owned).collect(),
        })
    }
}

/// Identifier of stop `stop` (1-based into `reachable`).
fn stop_id<'a>(reachable: &[&'a str], stop: usize) -> Option<&'a str> {
    stop.checked_sub(1)
        .and_then(|position| reachable.get(position))
        .copied()
}

/// Distances between every pair of stops.
struct CostMatrix {
    rows: Vec<Vec<f64>>,
}

impl CostMatrix {
    fn new(trees: &[ShortestPathTree<'_>], reachable: &[&str]) -> Self {
        let rows = trees
            .iter()
            .map(|tree| {
                std::iter::once(0.0)
                    .chain(
                        reachable
                            .iter()
                            .map(|id| tree.distance_to(id).unwrap_or(f64::INFINITY)),
                    )
                    .collect()
            })
            .collect();
        Self { rows }
    }

    fn get(&self, from: usize, to: usize) -> f64 {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}

/// Depth-first branch-and-bound over visiting orders.
struct OrderSearch<'a> {
    costs: &'a CostMatrix,
    used: Vec<bool>,
    order: Vec<usize>,
    best: Option<(f64, Vec<usize>)>,
}

impl<'a> OrderSearch<'a> {
    fn new(costs: &'a CostMatrix, stops: usize) -> Self {
        Self {
            costs,
            used: vec![false; stops],
            order: Vec::with_capacity(stops),
            best: None,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "tour costs are sums of leg distances"
    )]
    fn descend(&mut self, at: usize, so_far: f64) {
        if self.order.len() == self.used.len() {
            if self.best.as_ref().is_none_or(|(best, _)| so_far < *best) {
                self.best = Some((so_far, self.order.clone()));
            }
            return;
        }
        for position in 0..self.used.len() {
            if self.used.get(position).copied().unwrap_or(true) {
                continue;
            }
            let stop = position.saturating_add(1);
            let total = so_far + self.costs.get(at, stop);
            if self.best.as_ref().is_some_and(|(best, _)| total >= *best) {
                continue;
            }
            self.set_used(position, true);
            self.order.push(stop);
            self.descend(stop, total);
            self.order.pop();
            self.set_used(position, false);
        }
    }

    fn set_used(&mut self, position: usize, value: bool) {
        if let Some(slot) = self.used.get_mut(position) {
            *slot = value;
        }
    }
}
