//! Shared fixtures for unit, behaviour and property tests.

use crate::{Connection, Graph, Point};

/// Connections of the seven-point reference network as
/// `(from, to, kilometres, minutes)`.
pub const REFERENCE_CONNECTIONS: [(&str, &str, f64, f64); 11] = [
    ("A", "B", 0.5, 3.0),
    ("A", "E", 0.7, 5.0),
    ("A", "V", 0.4, 2.0),
    ("B", "C", 0.8, 6.0),
    ("B", "Y", 1.1, 8.0),
    ("C", "D", 0.6, 4.0),
    ("C", "Y", 0.9, 7.0),
    ("D", "E", 1.2, 10.0),
    ("E", "V", 0.6, 4.0),
    ("E", "Y", 0.5, 3.0),
    ("V", "Y", 0.9, 7.0),
];

/// The reference network: points A, B, C, D, E, V and Y joined by
/// [`REFERENCE_CONNECTIONS`].
///
/// # Examples
/// ```
/// use stopover_core::test_support::reference_network;
///
/// let graph = reference_network();
/// assert_eq!(graph.point_count(), 7);
/// assert_eq!(graph.connections().len(), 11);
/// ```
#[must_use]
pub fn reference_network() -> Graph {
    let points = [
        ("A", "Town hall", 48.8584, 2.2945),
        ("B", "Library", 48.8606, 2.3376),
        ("C", "Market", 48.8530, 2.3499),
        ("D", "Station", 48.8462, 2.3464),
        ("E", "Museum", 48.8600, 2.3266),
        ("V", "Park", 48.8625, 2.3130),
        ("Y", "Harbour", 48.8566, 2.3522),
    ];
    let graph = points
        .into_iter()
        .fold(Graph::new(), |network, (id, name, lat, lng)| {
            network.with_point(Point::new(id, name, lat, lng))
        });
    REFERENCE_CONNECTIONS
        .into_iter()
        .fold(graph, |network, (from, to, distance, time)| {
            network.with_connection(Connection::new(from, to, distance, time))
        })
}

/// Assert two costs agree to within accumulated rounding error.
///
/// # Panics
/// Panics when `actual` and `expected` differ by more than `1e-9`.
#[expect(
    clippy::float_arithmetic,
    reason = "comparisons tolerate floating-point summation error"
)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, found {actual}"
    );
}
