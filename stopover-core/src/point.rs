//! Named locations in a route network.

use geo::Coord;

/// A named, located node in the network.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Points are
/// immutable once added to a [`Graph`](crate::Graph).
///
/// # Examples
/// ```
/// use stopover_core::Point;
///
/// let point = Point::new("A", "Main gate", 51.5007, -0.1246);
///
/// assert_eq!(point.id(), "A");
/// assert_eq!(point.name(), "Main gate");
/// assert!((point.latitude() - 51.5007).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PointRecord", into = "PointRecord")
)]
pub struct Point {
    id: String,
    name: String,
    location: Coord<f64>,
}

impl Point {
    /// Construct a point from its identifier, display name and coordinates.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: Coord {
                x: longitude,
                y: latitude,
            },
        }
    }

    /// Construct a point whose display name matches its identifier.
    ///
    /// # Examples
    /// ```
    /// use stopover_core::Point;
    ///
    /// let point = Point::unnamed("V", 0.0, 0.0);
    /// assert_eq!(point.name(), "V");
    /// ```
    #[must_use]
    pub fn unnamed(key: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        let id: String = key.into();
        Self::new(id.clone(), id, latitude, longitude)
    }

    /// Unique key of the point within its graph.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position as a `geo` coordinate.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

/// Wire shape of a [`Point`]; uses `lat`/`lng` rather than `x`/`y`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PointRecord {
    id: String,
    #[serde(default)]
    name: Option<String>,
    lat: f64,
    lng: f64,
}

#[cfg(feature = "serde")]
impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        let name = record.name.unwrap_or_else(|| record.id.clone());
        Self::new(record.id, name, record.lat, record.lng)
    }
}

#[cfg(feature = "serde")]
impl From<Point> for PointRecord {
    fn from(point: Point) -> Self {
        Self {
            lat: point.latitude(),
            lng: point.longitude(),
            id: point.id,
            name: Some(point.name),
        }
    }
}
