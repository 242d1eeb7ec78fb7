use thiserror::Error;

use crate::GraphError;

/// Failure outcomes of a routing query.
///
/// Every query reports problems through this type; the search and sequencing
/// code never panics on bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A start, end or destination id is not a point of the graph.
    #[error("unknown point {id:?}")]
    InvalidEndpoint {
        /// The identifier that was not found.
        id: String,
    },
    /// The graph failed validation before any search ran.
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] GraphError),
    /// A multi-stop query named no destinations.
    #[error("at least one destination is required")]
    NoDestinations,
    /// No path joins the endpoints.
    #[error("no path from {from:?} to {to:?}")]
    NotFound {
        /// Where the search started.
        from: String,
        /// The unreachable target; for multi-stop queries, the first
        /// destination considered.
        to: String,
    },
    /// Some destinations could not be reached and the router was configured
    /// to fail rather than drop them.
    #[error("{} destination(s) unreachable: {}", unreachable.len(), unreachable.join(", "))]
    PartialUnreachable {
        /// Destinations that were dropped, in lexicographic order.
        unreachable: Vec<String>,
    },
    /// The graph exceeds the configured point limit.
    #[error("graph has {points} points; limit is {limit}")]
    GraphTooLarge {
        /// Points in the graph.
        points: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// The query names more distinct destinations than allowed.
    #[error("{count} destinations requested; limit is {limit}")]
    TooManyDestinations {
        /// Distinct destinations requested.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },
}

impl RouteError {
    pub(crate) fn invalid_endpoint(id: &str) -> Self {
        Self::InvalidEndpoint { id: id.to_owned() }
    }

    pub(crate) fn not_found(from: &str, to: &str) -> Self {
        Self::NotFound {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }
}
