//! Single-source, single-target shortest paths.
//!
//! [`ShortestPathEngine`] derives the [`AdjacencyIndex`] once and answers any
//! number of queries against it. It borrows the [`Graph`] for its whole
//! lifetime, so the graph cannot change underneath a cached index. The free
//! function [`shortest_path`] rebuilds the index on every call.
//!
//! The search is keyed purely on distance. Among equal distances the point
//! with the lexicographically smaller id is settled first, and a label is
//! only replaced by a strictly shorter distance.

mod search;
mod state;

use crate::adjacency::NodeIndex;
use crate::{AdjacencyIndex, Graph, Route, RouteError};

use self::search::Labels;

/// How the next point to settle is chosen.
///
/// Both strategies settle points in the same order and return identical
/// routes; they differ only in cost on larger graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SearchStrategy {
    /// Scan every point for the closest unvisited one. Quadratic, fine for
    /// hand-drawn networks.
    #[default]
    LinearScan,
    /// Keep candidates in a binary heap.
    BinaryHeap,
}

/// Configuration for [`ShortestPathEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Selection strategy used by every search.
    pub strategy: SearchStrategy,
}

/// Dijkstra-style search over a borrowed [`Graph`].
///
/// # Examples
/// ```
/// use stopover_core::{Connection, Graph, Point, ShortestPathEngine};
///
/// let graph = Graph::new()
///     .with_point(Point::unnamed("A", 0.0, 0.0))
///     .with_point(Point::unnamed("B", 0.0, 0.0))
///     .with_point(Point::unnamed("C", 0.0, 0.0))
///     .with_connection(Connection::new("A", "B", 0.5, 3.0))
///     .with_connection(Connection::new("B", "C", 0.8, 6.0))
///     .with_connection(Connection::new("A", "C", 2.0, 9.0));
/// let engine = ShortestPathEngine::new(&graph)?;
///
/// let route = engine.shortest_path("A", "C")?;
/// assert_eq!(route.path(), ["A", "B", "C"]);
/// assert!((route.total_distance() - 1.3).abs() < 1e-9);
/// # Ok::<(), stopover_core::RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
    index: AdjacencyIndex,
    config: SearchConfig,
}

impl<'g> ShortestPathEngine<'g> {
    /// Validate `graph` and build an engine with default configuration.
    ///
    /// # Errors
    /// Returns [`RouteError::MalformedGraph`] if the graph fails validation.
    pub fn new(graph: &'g Graph) -> Result<Self, RouteError> {
        Self::with_config(graph, SearchConfig::default())
    }

    /// Validate `graph` and build an engine with explicit configuration.
    ///
    /// # Errors
    /// Returns [`RouteError::MalformedGraph`] if the graph fails validation.
    pub fn with_config(graph: &'g Graph, config: SearchConfig) -> Result<Self, RouteError> {
        let index = AdjacencyIndex::build(graph)?;
        Ok(Self {
            graph,
            index,
            config,
        })
    }

    /// The graph this engine searches.
    #[must_use]
    pub const fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The derived neighbour lists.
    #[must_use]
    pub const fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// Cheapest route by distance from `start` to `end`.
    ///
    /// When `start == end` the result is the single-point route with zero
    /// costs and no search runs.
    ///
    /// # Errors
    /// - [`RouteError::InvalidEndpoint`] if either id is not in the graph.
    /// - [`RouteError::NotFound`] if `end` is unreachable from `start`.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Route, RouteError> {
        let from = self.position(start)?;
        let to = self.position(end)?;
        if from == to {
            return Ok(Route::single(start));
        }
        search::run(&self.index, self.config.strategy, from, Some(to))
            .route(&self.index, from, to)
            .ok_or_else(|| RouteError::not_found(start, end))
    }

    /// Settle every point reachable from `start`.
    ///
    /// Routes read from the tree are identical to those returned by
    /// [`Self::shortest_path`] for the same endpoints.
    ///
    /// # Errors
    /// Returns [`RouteError::InvalidEndpoint`] if `start` is not in the graph.
    pub fn tree_from(&self, start: &str) -> Result<ShortestPathTree<'_>, RouteError> {
        let origin = self.position(start)?;
        let labels = search::run(&self.index, self.config.strategy, origin, None);
        Ok(ShortestPathTree {
            index: &self.index,
            origin,
            labels,
        })
    }

    fn position(&self, id: &str) -> Result<NodeIndex, RouteError> {
        self.index
            .position(id)
            .ok_or_else(|| RouteError::invalid_endpoint(id))
    }
}

/// Shortest routes from one origin to every reachable point.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'a> {
    index: &'a AdjacencyIndex,
    origin: NodeIndex,
    labels: Labels,
}

impl ShortestPathTree<'_> {
    /// Identifier of the origin.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.index.id_of(self.origin).unwrap_or_default()
    }

    /// Shortest distance to `id`, or `None` when unreachable or unknown.
    #[must_use]
    pub fn distance_to(&self, id: &str) -> Option<f64> {
        self.index
            .position(id)
            .map(|node| self.labels.distance(node))
            .filter(|distance| distance.is_finite())
    }

    /// Whether `id` is reachable from the origin.
    #[must_use]
    pub fn reaches(&self, id: &str) -> bool {
        self.index
            .position(id)
            .is_some_and(|node| self.labels.reached(node))
    }

    /// Full route from the origin to `id`.
    ///
    /// # Errors
    /// - [`RouteError::InvalidEndpoint`] if `id` is not in the graph.
    /// - [`RouteError::NotFound`] if `id` is unreachable.
    pub fn route_to(&self, id: &str) -> Result<Route, RouteError> {
        let target = self
            .index
            .position(id)
            .ok_or_else(|| RouteError::invalid_endpoint(id))?;
        if target == self.origin {
            return Ok(Route::single(id));
        }
        self.labels
            .route(self.index, self.origin, target)
            .ok_or_else(|| RouteError::not_found(self.origin(), id))
    }
}

/// Cheapest route from `start` to `end`, rebuilding the index for this call.
///
/// # Errors
/// - [`RouteError::MalformedGraph`] if the graph fails validation.
/// - [`RouteError::InvalidEndpoint`] if either id is not in the graph.
/// - [`RouteError::NotFound`] if `end` is unreachable from `start`.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Result<Route, RouteError> {
    ShortestPathEngine::new(graph)?.shortest_path(start, end)
}
