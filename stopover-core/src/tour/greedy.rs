//! Greedy nearest-unvisited sequencing.

use std::collections::BTreeSet;

use super::{TourPlan, TourPlanner};
use crate::{Route, RouteError, ShortestPathEngine};

/// Repeatedly travel to the closest remaining destination.
///
/// At each step the planner searches from the current position, picks the
/// remaining destination with the smallest distance (the smaller id on a
/// tie), appends that leg and continues from there. Destinations that
/// cannot be reached from the current position are left behind and
/// reported as unreachable.
///
/// Fast and deterministic, but not optimal: an early cheap leg can force an
/// expensive one later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighbour;

impl TourPlanner for NearestNeighbour {
    fn plan(
        &self,
        engine: &ShortestPathEngine<'_>,
        start: &str,
        destinations: &BTreeSet<String>,
    ) -> Result<TourPlan, RouteError> {
        let mut remaining: BTreeSet<&str> = destinations.iter().map(String::as_str).collect();
        let mut route = Route::single(start);
        let mut visited = Vec::with_capacity(remaining.len());
        let mut current = start;

        while !remaining.is_empty() {
            let tree = engine.tree_from(current)?;
            // `remaining` iterates in id order, so `min_by` keeps the
            // smaller id on equal distances.
            let nearest = remaining
                .iter()
                .filter_map(|&id| tree.distance_to(id).map(|distance| (distance, id)))
                .min_by(|(lhs, _), (rhs, _)| lhs.total_cmp(rhs));
            let Some((distance, next)) = nearest else {
                break;
            };
            log::debug!("greedy step {current:?} -> {next:?} ({distance} km)");
            route.extend_with(tree.route_to(next)?);
            remaining.remove(next);
            visited.push(next.to_owned());
            current = next;
        }

        Ok(TourPlan {
            route,
            visited,
            unreachable: remaining.into_iter().map(str::to_owned).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_close, reference_network};
    use crate::{Connection, Graph, Point};
    use rstest::rstest;

    fn ids(raw: &[&str]) -> BTreeSet<String> {
        raw.iter().map(|id| (*id).to_owned()).collect()
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn picks_closest_destination_first() {
        let graph = reference_network();
        let engine = ShortestPathEngine::new(&graph).expect("well formed");
        let plan = NearestNeighbour
            .plan(&engine, "A", &ids(&["D", "Y"]))
            .expect("plan succeeds");
        assert_eq!(plan.visited, vec!["Y".to_owned(), "D".to_owned()]);
        assert_close(plan.route.total_distance(), 2.7);
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn equal_distances_prefer_smaller_id() {
        // B and C are both one kilometre from A.
        let graph = Graph::new()
            .with_point(Point::unnamed("A", 0.0, 0.0))
            .with_point(Point::unnamed("B", 0.0, 0.0))
            .with_point(Point::unnamed("C", 0.0, 0.0))
            .with_connection(Connection::new("A", "C", 1.0, 1.0))
            .with_connection(Connection::new("A", "B", 1.0, 1.0));
        let engine = ShortestPathEngine::new(&graph).expect("well formed");
        let plan = NearestNeighbour
            .plan(&engine, "A", &ids(&["C", "B"]))
            .expect("plan succeeds");
        assert_eq!(plan.route.path(), ["A", "B", "A", "C"]);
        assert_close(plan.route.total_distance(), 3.0);
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn start_among_destinations_costs_nothing() {
        let graph = reference_network();
        let engine = ShortestPathEngine::new(&graph).expect("well formed");
        let plan = NearestNeighbour
            .plan(&engine, "A", &ids(&["A", "B"]))
            .expect("plan succeeds");
        assert_eq!(plan.visited, vec!["A".to_owned(), "B".to_owned()]);
        assert_eq!(plan.route.path(), ["A", "B"]);
        assert_close(plan.route.total_distance(), 0.5);
    }
}
