//! Snap arbitrary coordinates onto graph points.
//!
//! Map clicks and geolocation fixes arrive as coordinates; queries need
//! point identifiers. [`PointLocator`] bridges the two with an R\*-tree over
//! the graph's points. Distances are planar in degrees, which is adequate
//! for picking the closest point in a small network.

use geo::Coord;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::Graph;

type IndexedPoint = GeomWithData<[f64; 2], String>;

/// Nearest-point lookup over a graph snapshot.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use stopover_core::{Graph, Point, PointLocator};
///
/// let graph = Graph::new()
///     .with_point(Point::unnamed("A", 51.50, -0.12))
///     .with_point(Point::unnamed("B", 51.52, -0.10));
/// let locator = PointLocator::new(&graph);
///
/// let near_b = Coord { x: -0.101, y: 51.519 };
/// assert_eq!(locator.nearest(near_b), Some("B"));
/// ```
#[derive(Debug, Clone)]
pub struct PointLocator {
    index: RTree<IndexedPoint>,
}

impl PointLocator {
    /// Index every point of `graph`.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        let entries = graph
            .points()
            .map(|point| {
                let location = point.location();
                GeomWithData::new([location.x, location.y], point.id().to_owned())
            })
            .collect();
        Self {
            index: RTree::bulk_load(entries),
        }
    }

    /// Identifier of the point closest to `location` (`x = longitude`,
    /// `y = latitude`), or `None` for an empty graph.
    #[must_use]
    pub fn nearest(&self, location: Coord<f64>) -> Option<&str> {
        self.index
            .nearest_neighbor(&[location.x, location.y])
            .map(|entry| entry.data.as_str())
    }

    /// Identifier of the point closest to a latitude/longitude pair.
    #[must_use]
    pub fn nearest_to(&self, latitude: f64, longitude: f64) -> Option<&str> {
        self.nearest(Coord {
            x: longitude,
            y: latitude,
        })
    }

    /// Number of indexed points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.size()
    }

    /// Whether no points are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }
}
