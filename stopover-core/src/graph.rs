//! The route network: points keyed by identifier plus bidirectional
//! connections between them.
//!
//! A [`Graph`] is plain input data. It can be assembled incrementally, so it
//! is not validated on construction; [`Graph::validate`] (called whenever an
//! [`AdjacencyIndex`](crate::AdjacencyIndex) is derived) rejects connections
//! that reference unknown points or carry unusable costs.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::Point;

/// One bidirectional link between two points.
///
/// The stored direction is irrelevant: the link is traversable both ways at
/// the same cost.
///
/// # Examples
/// ```
/// use stopover_core::Connection;
///
/// let link = Connection::new("A", "B", 0.5, 3.0);
/// assert_eq!(link.from(), "A");
/// assert!(link.touches("B"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    from: String,
    to: String,
    /// Length in kilometres.
    distance: f64,
    /// Travel time in minutes.
    time: f64,
}

impl Connection {
    /// Construct a connection with a distance in kilometres and a time in
    /// minutes.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64, time: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            time,
        }
    }

    /// One endpoint as stored.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The other endpoint as stored.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Length in kilometres.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Travel time in minutes.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Whether `id` is either endpoint.
    #[must_use]
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}

/// Which cost of a [`Connection`] failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostField {
    /// The distance in kilometres.
    Distance,
    /// The time in minutes.
    Time,
}

impl fmt::Display for CostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance => f.write_str("distance"),
            Self::Time => f.write_str("time"),
        }
    }
}

/// Reasons a [`Graph`] cannot be searched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A connection names a point that is not in the graph.
    #[error("connection {connection} references unknown point {id:?}")]
    UnknownEndpoint {
        /// Position of the offending connection.
        connection: usize,
        /// The missing point identifier.
        id: String,
    },
    /// A connection cost is negative, NaN or infinite.
    #[error("connection {connection} has invalid {field} {value}")]
    InvalidCost {
        /// Position of the offending connection.
        connection: usize,
        /// The cost that failed validation.
        field: CostField,
        /// The rejected value.
        value: f64,
    },
    /// Connection costs are individually finite but their total is not, so
    /// a route summing them could overflow.
    #[error("total connection {field} overflows")]
    CostOverflow {
        /// The cost whose total overflows.
        field: CostField,
    },
    /// A point is stored under a key other than its own identifier.
    #[error("point {id:?} is stored under key {key:?}")]
    PointKeyMismatch {
        /// The mapping key.
        key: String,
        /// The identifier carried by the point.
        id: String,
    },
}

/// Points keyed by identifier plus an ordered list of connections.
///
/// Keys iterate in lexicographic order, which is the order searches use to
/// break ties.
///
/// # Examples
/// ```
/// use stopover_core::{Connection, Graph, Point};
///
/// let graph = Graph::new()
///     .with_point(Point::unnamed("A", 0.0, 0.0))
///     .with_point(Point::unnamed("B", 0.0, 0.01))
///     .with_connection(Connection::new("A", "B", 0.5, 3.0));
///
/// assert_eq!(graph.point_count(), 2);
/// assert!(graph.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    #[cfg_attr(feature = "serde", serde(default))]
    points: BTreeMap<String, Point>,
    #[cfg_attr(feature = "serde", serde(default))]
    connections: Vec<Connection>,
}

impl Graph {
    /// Construct an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: BTreeMap::new(),
            connections: Vec::new(),
        }
    }

    /// Add a point, replacing any existing point with the same id.
    #[must_use]
    pub fn with_point(mut self, point: Point) -> Self {
        self.insert_point(point);
        self
    }

    /// Append a connection.
    #[must_use]
    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connect(connection);
        self
    }

    /// Add a point, returning the one it replaced, if any.
    pub fn insert_point(&mut self, point: Point) -> Option<Point> {
        self.points.insert(point.id().to_owned(), point)
    }

    /// Append a connection. Parallel connections are kept.
    pub fn connect(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Look up a point by id.
    #[must_use]
    pub fn point(&self, id: &str) -> Option<&Point> {
        self.points.get(id)
    }

    /// Whether a point with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.points.contains_key(id)
    }

    /// Points in lexicographic id order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.points.values()
    }

    /// Point identifiers in lexicographic order.
    pub fn point_ids(&self) -> impl ExactSizeIterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }

    /// Connections in insertion order.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Whether the graph has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check that every connection joins known points with finite,
    /// non-negative costs, and that every point sits under its own id.
    /// The summed distance and time of all connections must also be finite.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] found.
    pub fn validate(&self) -> Result<(), GraphError> {
        if let Some((key, point)) = self.points.iter().find(|(key, point)| *key != point.id()) {
            return Err(GraphError::PointKeyMismatch {
                key: key.clone(),
                id: point.id().to_owned(),
            });
        }
        for (index, connection) in self.connections.iter().enumerate() {
            self.validate_connection(index, connection)?;
        }
        // No simple path uses a connection twice, so a finite total bounds
        // every route cost.
        if !self.total(Connection::distance).is_finite() {
            return Err(GraphError::CostOverflow {
                field: CostField::Distance,
            });
        }
        if !self.total(Connection::time).is_finite() {
            return Err(GraphError::CostOverflow {
                field: CostField::Time,
            });
        }
        Ok(())
    }

    fn total(&self, cost: impl Fn(&Connection) -> f64) -> f64 {
        self.connections.iter().map(cost).sum()
    }

    fn validate_connection(&self, index: usize, connection: &Connection) -> Result<(), GraphError> {
        for id in [connection.from(), connection.to()] {
            if !self.contains(id) {
                return Err(GraphError::UnknownEndpoint {
                    connection: index,
                    id: id.to_owned(),
                });
            }
        }
        for (field, value) in [
            (CostField::Distance, connection.distance()),
            (CostField::Time, connection.time()),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidCost {
                    connection: index,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}
