//! Facade crate for the Stopover routing engine.
//!
//! This crate re-exports the graph model, the shortest-path engine and the
//! multi-stop router from `stopover-core`. Serialisation support follows the
//! `serde` feature and shared fixtures follow `test-support`.

#![forbid(unsafe_code)]

pub use stopover_core::{
    AdjacencyIndex, Connection, CostField, ExhaustivePlanner, Graph, GraphError, MultiStopRouter,
    NearestNeighbour, Neighbour, Point, PointLocator, QueryLimits, Route, RouteError,
    RouterConfig, SearchConfig, SearchStrategy, ShortestPathEngine, ShortestPathTree, TourPlan,
    TourPlanner, UnreachablePolicy, optimal_route, shortest_path,
};

#[cfg(feature = "test-support")]
pub use stopover_core::test_support;
