//! Neighbour lists derived from a [`Graph`].
//!
//! Points are numbered densely in lexicographic id order, so comparing dense
//! indices is the same as comparing identifiers. Every connection is inserted
//! twice, once per direction; parallel connections stay separate entries.

use std::collections::HashMap;

use crate::{Graph, GraphError};

/// Dense position of a point inside an [`AdjacencyIndex`].
pub(crate) type NodeIndex = usize;

/// Directed half of a connection as stored in the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub(crate) target: NodeIndex,
    pub(crate) distance: f64,
    pub(crate) time: f64,
}

/// A neighbour of some point, as seen from that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a> {
    /// Identifier of the adjacent point.
    pub id: &'a str,
    /// Connection length in kilometres.
    pub distance: f64,
    /// Connection time in minutes.
    pub time: f64,
}

/// Per-point neighbour lists used by the search.
///
/// # Examples
/// ```
/// use stopover_core::{AdjacencyIndex, Connection, Graph, Point};
///
/// let graph = Graph::new()
///     .with_point(Point::unnamed("A", 0.0, 0.0))
///     .with_point(Point::unnamed("B", 0.0, 0.0))
///     .with_point(Point::unnamed("C", 0.0, 0.0))
///     .with_connection(Connection::new("A", "B", 0.5, 3.0));
/// let index = AdjacencyIndex::build(&graph)?;
///
/// let from_b: Vec<_> = index.neighbours("B").map(|n| n.id).collect();
/// assert_eq!(from_b, vec!["A"]);
/// assert_eq!(index.neighbours("C").count(), 0);
/// # Ok::<(), stopover_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    ids: Vec<String>,
    positions: HashMap<String, NodeIndex>,
    edges: Vec<Vec<Edge>>,
}

impl AdjacencyIndex {
    /// Validate `graph` and derive its neighbour lists.
    ///
    /// Every point receives an entry, including isolated ones.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the graph is malformed; see
    /// [`Graph::validate`].
    pub fn build(graph: &Graph) -> Result<Self, GraphError> {
        graph.validate()?;

        let ids: Vec<String> = graph.point_ids().map(str::to_owned).collect();
        let positions: HashMap<String, NodeIndex> = ids
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();
        let mut edges: Vec<Vec<Edge>> = vec![Vec::new(); ids.len()];

        for (connection_index, connection) in graph.connections().iter().enumerate() {
            let endpoint = |id: &str| {
                positions
                    .get(id)
                    .copied()
                    .ok_or_else(|| GraphError::UnknownEndpoint {
                        connection: connection_index,
                        id: id.to_owned(),
                    })
            };
            let from = endpoint(connection.from())?;
            let to = endpoint(connection.to())?;
            push_edge(&mut edges, from, to, connection.distance(), connection.time());
            push_edge(&mut edges, to, from, connection.distance(), connection.time());
        }

        log::debug!(
            "built adjacency index for {} points and {} connections",
            ids.len(),
            graph.connections().len()
        );

        Ok(Self {
            ids,
            positions,
            edges,
        })
    }

    /// Number of points covered by the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the index covers no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` has an entry.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Neighbours of `id` in connection insertion order.
    ///
    /// Unknown identifiers yield no neighbours.
    pub fn neighbours<'a>(&'a self, id: &str) -> impl Iterator<Item = Neighbour<'a>> + use<'a> {
        self.position(id)
            .and_then(|node| self.edges.get(node))
            .into_iter()
            .flatten()
            .filter_map(|edge| {
                self.id_of(edge.target).map(|neighbour_id| Neighbour {
                    id: neighbour_id,
                    distance: edge.distance,
                    time: edge.time,
                })
            })
    }

    pub(crate) fn position(&self, id: &str) -> Option<NodeIndex> {
        self.positions.get(id).copied()
    }

    pub(crate) fn id_of(&self, node: NodeIndex) -> Option<&str> {
        self.ids.get(node).map(String::as_str)
    }

    pub(crate) fn edges_of(&self, node: NodeIndex) -> &[Edge] {
        self.edges.get(node).map_or(&[], Vec::as_slice)
    }
}

fn push_edge(edges: &mut [Vec<Edge>], from: NodeIndex, to: NodeIndex, distance: f64, time: f64) {
    if let Some(list) = edges.get_mut(from) {
        list.push(Edge {
            target: to,
            distance,
            time,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Connection, Point};
    use rstest::rstest;

    fn triangle() -> Graph {
        Graph::new()
            .with_point(Point::unnamed("A", 0.0, 0.0))
            .with_point(Point::unnamed("B", 0.0, 0.0))
            .with_point(Point::unnamed("C", 0.0, 0.0))
            .with_point(Point::unnamed("D", 0.0, 0.0))
            .with_connection(Connection::new("A", "B", 1.0, 2.0))
            .with_connection(Connection::new("C", "A", 3.0, 4.0))
            .with_connection(Connection::new("A", "B", 0.5, 9.0))
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn connections_are_inserted_in_both_directions() {
        let index = AdjacencyIndex::build(&triangle()).expect("valid graph");
        let from_c: Vec<_> = index.neighbours("C").collect();
        assert_eq!(
            from_c,
            vec![Neighbour {
                id: "A",
                distance: 3.0,
                time: 4.0,
            }]
        );
        let from_a: Vec<_> = index.neighbours("A").map(|n| n.id).collect();
        assert_eq!(from_a, vec!["B", "C", "B"]);
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn parallel_connections_are_preserved() {
        let index = AdjacencyIndex::build(&triangle()).expect("valid graph");
        let to_a: Vec<_> = index.neighbours("B").map(|n| n.distance).collect();
        assert_eq!(to_a, vec![1.0, 0.5]);
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn isolated_points_get_an_empty_entry() {
        let index = AdjacencyIndex::build(&triangle()).expect("valid graph");
        assert!(index.contains("D"));
        assert_eq!(index.neighbours("D").count(), 0);
        assert_eq!(index.len(), 4);
    }

    #[rstest]
    fn dangling_connection_is_malformed() {
        let graph = triangle().with_connection(Connection::new("D", "Q", 1.0, 1.0));
        let err = AdjacencyIndex::build(&graph).expect_err("Q is unknown");
        assert!(matches!(err, GraphError::UnknownEndpoint { connection: 3, .. }));
    }

    #[rstest]
    #[expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]
    fn dense_order_follows_identifiers() {
        let index = AdjacencyIndex::build(&triangle()).expect("valid graph");
        assert!(index.position("A") < index.position("B"));
        assert_eq!(index.id_of(2), Some("C"));
    }
}
