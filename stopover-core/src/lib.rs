//! Core routing for the Stopover engine.
//!
//! Three layers, leaves first:
//!
//! - [`Graph`] holds points and bidirectional connections; an
//!   [`AdjacencyIndex`] is derived from it and rejects malformed graphs.
//! - [`ShortestPathEngine`] finds the cheapest route by distance between two
//!   points.
//! - [`MultiStopRouter`] sequences an unordered destination set into one open
//!   route by repeatedly asking the engine for the nearest remaining stop.
//!
//! Every query is synchronous and pure with respect to its graph, so a
//! [`Graph`] can be shared read-only across threads. Failures are reported as
//! [`RouteError`] values.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod error;
mod graph;
mod limits;
mod locator;
mod point;
mod route;
mod shortest_path;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use adjacency::{AdjacencyIndex, Neighbour};
pub use error::RouteError;
pub use graph::{Connection, CostField, Graph, GraphError};
pub use limits::QueryLimits;
pub use locator::PointLocator;
pub use point::Point;
pub use route::Route;
pub use shortest_path::{
    SearchConfig, SearchStrategy, ShortestPathEngine, ShortestPathTree, shortest_path,
};
pub use tour::{
    ExhaustivePlanner, MultiStopRouter, NearestNeighbour, RouterConfig, TourPlan, TourPlanner,
    UnreachablePolicy, optimal_route,
};
