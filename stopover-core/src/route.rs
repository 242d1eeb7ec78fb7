//! Routes through the network.
//!
//! Aggregates an ordered list of point identifiers with total distance and
//! time.

/// An ordered visiting sequence with its aggregate costs.
///
/// Routes are computed values: every query produces a fresh one.
///
/// # Examples
/// ```
/// use stopover_core::Route;
///
/// let route = Route::new(vec!["A".into(), "E".into(), "Y".into()], 1.2, 8.0);
///
/// assert_eq!(route.path(), ["A", "E", "Y"]);
/// assert_eq!(route.start(), Some("A"));
/// assert_eq!(route.end(), Some("Y"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    path: Vec<String>,
    total_distance: f64,
    total_time: f64,
}

impl Route {
    /// Construct a route from its path and totals.
    #[must_use]
    pub const fn new(path: Vec<String>, total_distance: f64, total_time: f64) -> Self {
        Self {
            path,
            total_distance,
            total_time,
        }
    }

    /// A zero-cost route that stays at `id`.
    ///
    /// # Examples
    /// ```
    /// use stopover_core::Route;
    ///
    /// let route = Route::single("A");
    /// assert_eq!(route.path(), ["A"]);
    /// assert_eq!(route.total_distance(), 0.0);
    /// ```
    #[must_use]
    pub fn single(id: impl Into<String>) -> Self {
        Self::new(vec![id.into()], 0.0, 0.0)
    }

    /// Point identifiers in visiting order, start first.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Sum of traversed connection distances in kilometres.
    #[must_use]
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of traversed connection times in minutes.
    #[must_use]
    pub const fn total_time(&self) -> f64 {
        self.total_time
    }

    /// First point of the route.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Last point of the route.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of points on the path, including the start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of connections traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Consume the route, returning its path.
    #[must_use]
    pub fn into_path(self) -> Vec<String> {
        self.path
    }

    /// Append `leg`, which must begin where this route ends.
    ///
    /// The shared junction point is not repeated.
    #[expect(
        clippy::float_arithmetic,
        reason = "route totals are sums of connection costs"
    )]
    pub(crate) fn extend_with(&mut self, leg: Self) {
        self.total_distance += leg.total_distance;
        self.total_time += leg.total_time;
        self.path.extend(leg.path.into_iter().skip(1));
    }
}
