//! Multi-stop sequencing.
//!
//! [`MultiStopRouter`] turns a start point and an unordered set of
//! destinations into one open route (no return leg). Sequencing is delegated
//! to a [`TourPlanner`]: [`NearestNeighbour`] is the default greedy
//! heuristic and makes no optimality promise; [`ExhaustivePlanner`] finds the
//! cheapest order for small destination sets.
//!
//! Duplicate destination ids collapse into one required visit.

mod exhaustive;
mod greedy;

use std::collections::BTreeSet;

use crate::{Graph, QueryLimits, Route, RouteError, SearchConfig, ShortestPathEngine};

pub use exhaustive::ExhaustivePlanner;
pub use greedy::NearestNeighbour;

/// What to do with destinations that cannot be reached from the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum UnreachablePolicy {
    /// Drop them from the route and list them in [`TourPlan::unreachable`].
    #[default]
    Skip,
    /// Fail the whole query with [`RouteError::PartialUnreachable`].
    Fail,
}

/// Result of sequencing a multi-stop query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourPlan {
    /// The full route, start first.
    pub route: Route,
    /// Destinations in the order they are visited.
    pub visited: Vec<String>,
    /// Destinations that were dropped, in lexicographic order.
    pub unreachable: Vec<String>,
}

impl TourPlan {
    /// Whether every requested destination is on the route.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unreachable.is_empty()
    }
}

/// Orders a destination set into a route.
///
/// The router validates ids, removes duplicates and handles the empty and
/// single-destination cases before calling a planner, so `destinations`
/// always holds at least two known ids. Planners must report unreachable
/// destinations in [`TourPlan::unreachable`] rather than failing.
/// Planners must be `Send + Sync` to be shared across request threads.
pub trait TourPlanner: Send + Sync {
    /// Sequence `destinations` starting from `start`.
    ///
    /// # Errors
    /// Implementations return [`RouteError`] for conditions they cannot
    /// plan around, such as exceeding their own size limits.
    fn plan(
        &self,
        engine: &ShortestPathEngine<'_>,
        start: &str,
        destinations: &BTreeSet<String>,
    ) -> Result<TourPlan, RouteError>;
}

/// Configuration for [`MultiStopRouter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouterConfig {
    /// Search settings passed to the underlying engine.
    pub search: SearchConfig,
    /// Size guards applied before sequencing.
    pub limits: QueryLimits,
    /// Handling of destinations outside the start's component.
    pub unreachable: UnreachablePolicy,
}

/// Builds open routes through a destination set.
///
/// # Examples
/// ```
/// use stopover_core::{Connection, Graph, MultiStopRouter, Point};
///
/// let graph = Graph::new()
///     .with_point(Point::unnamed("A", 0.0, 0.0))
///     .with_point(Point::unnamed("B", 0.0, 0.0))
///     .with_point(Point::unnamed("C", 0.0, 0.0))
///     .with_connection(Connection::new("A", "B", 1.0, 1.0))
///     .with_connection(Connection::new("B", "C", 1.0, 1.0));
/// let router = MultiStopRouter::new();
///
/// let route = router.optimal_route(&graph, "A", &["C", "B"])?;
/// assert_eq!(route.path(), ["A", "B", "C"]);
/// # Ok::<(), stopover_core::RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MultiStopRouter<P = NearestNeighbour>
where
    P: TourPlanner,
{
    planner: P,
    config: RouterConfig,
}

impl MultiStopRouter<NearestNeighbour> {
    /// Greedy nearest-neighbour router with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_planner(NearestNeighbour, RouterConfig::default())
    }
}

impl Default for MultiStopRouter<NearestNeighbour> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> MultiStopRouter<P>
where
    P: TourPlanner,
{
    /// Router using `planner` and explicit configuration.
    #[must_use]
    pub const fn with_planner(planner: P, config: RouterConfig) -> Self {
        Self { planner, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> RouterConfig {
        self.config
    }

    /// Sequence `destinations` from `start`, returning only the route.
    ///
    /// Destinations that cannot be reached are dropped (a warning is
    /// logged) unless the policy is [`UnreachablePolicy::Fail`]. Use
    /// [`Self::plan`] to see which ones were dropped.
    ///
    /// # Errors
    /// See [`Self::plan`].
    pub fn optimal_route<S>(
        &self,
        graph: &Graph,
        start: &str,
        destinations: &[S],
    ) -> Result<Route, RouteError>
    where
        S: AsRef<str>,
    {
        self.plan(graph, start, destinations).map(|plan| plan.route)
    }

    /// Sequence `destinations` from `start`.
    ///
    /// # Errors
    /// - [`RouteError::NoDestinations`] if `destinations` is empty.
    /// - [`RouteError::MalformedGraph`] if the graph fails validation.
    /// - [`RouteError::GraphTooLarge`] or [`RouteError::TooManyDestinations`]
    ///   when the configured limits are exceeded.
    /// - [`RouteError::InvalidEndpoint`] if the start or any destination is
    ///   not in the graph.
    /// - [`RouteError::NotFound`] if no destination is reachable.
    /// - [`RouteError::PartialUnreachable`] if some are unreachable and the
    ///   policy is [`UnreachablePolicy::Fail`].
    pub fn plan<S>(
        &self,
        graph: &Graph,
        start: &str,
        destinations: &[S],
    ) -> Result<TourPlan, RouteError>
    where
        S: AsRef<str>,
    {
        if destinations.is_empty() {
            return Err(RouteError::NoDestinations);
        }
        self.config.limits.check_points(graph.point_count())?;
        let engine = ShortestPathEngine::with_config(graph, self.config.search)?;
        self.sequence(&engine, start, destinations)
    }

    /// Sequence `destinations` using an engine built earlier.
    ///
    /// The point limit is checked against the engine's graph, so reusing a
    /// cached engine does not bypass it.
    ///
    /// # Errors
    /// As [`Self::plan`], except that graph validation already happened
    /// when `engine` was built.
    pub fn plan_with<S>(
        &self,
        engine: &ShortestPathEngine<'_>,
        start: &str,
        destinations: &[S],
    ) -> Result<TourPlan, RouteError>
    where
        S: AsRef<str>,
    {
        self.config.limits.check_points(engine.graph().point_count())?;
        self.sequence(engine, start, destinations)
    }

    /// Everything after the point limit: destination checks, delegation and
    /// the unreachable policy.
    fn sequence<S>(
        &self,
        engine: &ShortestPathEngine<'_>,
        start: &str,
        destinations: &[S],
    ) -> Result<TourPlan, RouteError>
    where
        S: AsRef<str>,
    {
        let pending = collect_destinations(engine, start, destinations)?;
        self.config.limits.check_destinations(pending.len())?;

        let plan = match single(&pending) {
            Some(only) => {
                let route = engine.shortest_path(start, only)?;
                TourPlan {
                    route,
                    visited: vec![only.to_owned()],
                    unreachable: Vec::new(),
                }
            }
            None => self.planner.plan(engine, start, &pending)?,
        };

        if plan.visited.is_empty() {
            let first = pending.first().map_or("", String::as_str);
            return Err(RouteError::not_found(start, first));
        }
        if !plan.is_complete() {
            if self.config.unreachable == UnreachablePolicy::Fail {
                return Err(RouteError::PartialUnreachable {
                    unreachable: plan.unreachable,
                });
            }
            log::warn!(
                "dropped {} unreachable destination(s) from {start:?}: {}",
                plan.unreachable.len(),
                plan.unreachable.join(", ")
            );
        }
        Ok(plan)
    }
}

/// Greedy multi-stop route from `start`, rebuilding the index for this call.
///
/// Unreachable destinations are silently dropped.
///
/// # Errors
/// See [`MultiStopRouter::plan`].
pub fn optimal_route<S>(graph: &Graph, start: &str, destinations: &[S]) -> Result<Route, RouteError>
where
    S: AsRef<str>,
{
    MultiStopRouter::new().optimal_route(graph, start, destinations)
}

/// Validate every id and collapse duplicates.
fn collect_destinations<S>(
    engine: &ShortestPathEngine<'_>,
    start: &str,
    destinations: &[S],
) -> Result<BTreeSet<String>, RouteError>
where
    S: AsRef<str>,
{
    if destinations.is_empty() {
        return Err(RouteError::NoDestinations);
    }
    let index = engine.index();
    if !index.contains(start) {
        return Err(RouteError::invalid_endpoint(start));
    }
    destinations
        .iter()
        .map(|id| {
            let raw = id.as_ref();
            if index.contains(raw) {
                Ok(raw.to_owned())
            } else {
                Err(RouteError::invalid_endpoint(raw))
            }
        })
        .collect()
}

fn single(pending: &BTreeSet<String>) -> Option<&str> {
    match (pending.first(), pending.len()) {
        (Some(only), 1) => Some(only.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_close, reference_network};
    use crate::{Connection, Point, shortest_path};
    use rstest::rstest;

    fn with_island() -> Graph {
        reference_network()
            .with_point(Point::unnamed("W", 0.0, 0.0))
            .with_point(Point::unnamed("X", 0.0, 0.0))
            .with_connection(Connection::new("W", "X", 1.0, 1.0))
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn reference_network_greedy_tour() {
        let graph = reference_network();
        let route = optimal_route(&graph, "A", &["D", "Y"]).expect("both reachable");
        assert_eq!(route.path(), ["A", "E", "Y", "C", "D"]);
        assert_close(route.total_distance(), 2.7);
        assert_close(route.total_time(), 19.0);
    }

    #[rstest]
    fn empty_destinations_fail() {
        let graph = reference_network();
        let none: [&str; 0] = [];
        assert_eq!(
            optimal_route(&graph, "A", &none),
            Err(RouteError::NoDestinations)
        );
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn single_destination_delegates_to_shortest_path() {
        let graph = reference_network();
        let toured = optimal_route(&graph, "A", &["D"]).expect("D reachable");
        let direct = shortest_path(&graph, "A", "D").expect("D reachable");
        assert_eq!(toured, direct);
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn duplicates_collapse() {
        let graph = reference_network();
        let doubled = optimal_route(&graph, "A", &["D", "D"]).expect("D reachable");
        let once = optimal_route(&graph, "A", &["D"]).expect("D reachable");
        assert_eq!(doubled, once);
    }

    #[rstest]
    fn unknown_destination_is_invalid() {
        let graph = reference_network();
        let err = optimal_route(&graph, "A", &["D", "Q"]).expect_err("Q is unknown");
        assert_eq!(err, RouteError::invalid_endpoint("Q"));
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn unreachable_destinations_are_reported_and_dropped() {
        let graph = with_island();
        let plan = MultiStopRouter::new()
            .plan(&graph, "A", &["X", "Y", "W"])
            .expect("Y is reachable");
        assert_eq!(plan.route.path(), ["A", "E", "Y"]);
        assert_eq!(plan.visited, vec!["Y".to_owned()]);
        assert_eq!(plan.unreachable, vec!["W".to_owned(), "X".to_owned()]);
        assert!(!plan.is_complete());
    }

    #[rstest]
    fn fail_policy_rejects_partial_tours() {
        let graph = with_island();
        let router = MultiStopRouter::with_planner(
            NearestNeighbour,
            RouterConfig {
                unreachable: UnreachablePolicy::Fail,
                ..RouterConfig::default()
            },
        );
        let err = router
            .optimal_route(&graph, "A", &["Y", "X"])
            .expect_err("X is on an island");
        assert_eq!(
            err,
            RouteError::PartialUnreachable {
                unreachable: vec!["X".to_owned()],
            }
        );
    }

    #[rstest]
    fn nothing_reachable_is_not_found() {
        let graph = with_island();
        let err = optimal_route(&graph, "A", &["X", "W"]).expect_err("island only");
        assert_eq!(err, RouteError::not_found("A", "W"));
    }

    #[rstest]
    fn destination_limit_counts_distinct_ids() {
        let graph = reference_network();
        let router = MultiStopRouter::with_planner(
            NearestNeighbour,
            RouterConfig {
                limits: QueryLimits {
                    max_destinations: Some(1),
                    ..QueryLimits::default()
                },
                ..RouterConfig::default()
            },
        );
        assert!(router.optimal_route(&graph, "A", &["D", "D"]).is_ok());
        assert!(matches!(
            router.optimal_route(&graph, "A", &["D", "C"]),
            Err(RouteError::TooManyDestinations { count: 2, limit: 1 })
        ));
    }

    #[rstest]
    fn point_limit_guards_the_graph() {
        let graph = reference_network();
        let router = MultiStopRouter::with_planner(
            NearestNeighbour,
            RouterConfig {
                limits: QueryLimits {
                    max_points: Some(3),
                    ..QueryLimits::default()
                },
                ..RouterConfig::default()
            },
        );
        assert_eq!(
            router.optimal_route(&graph, "A", &["D"]),
            Err(RouteError::GraphTooLarge {
                points: 7,
                limit: 3,
            })
        );
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn point_limit_applies_to_cached_engines() {
        let graph = reference_network();
        let engine = ShortestPathEngine::new(&graph).expect("reference network is well formed");
        let router = MultiStopRouter::with_planner(
            NearestNeighbour,
            RouterConfig {
                limits: QueryLimits {
                    max_points: Some(3),
                    ..QueryLimits::default()
                },
                ..RouterConfig::default()
            },
        );
        assert_eq!(
            router.plan_with(&engine, "A", &["D", "Y"]),
            Err(RouteError::GraphTooLarge {
                points: 7,
                limit: 3,
            })
        );
    }
}
