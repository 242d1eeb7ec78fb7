//! Size guards for interactive queries.
//!
//! A single search costs roughly the square of the point count and a
//! multi-stop query repeats it once per remaining destination per step, so
//! callers that need latency bounds cap both inputs up front.

use crate::RouteError;

/// Upper bounds applied before any search runs.
///
/// `None` disables a bound. The default disables both.
///
/// # Examples
/// ```
/// use stopover_core::{QueryLimits, RouteError};
///
/// let limits = QueryLimits {
///     max_points: Some(500),
///     max_destinations: Some(8),
/// };
/// assert!(limits.check_points(120).is_ok());
/// assert!(matches!(
///     limits.check_destinations(9),
///     Err(RouteError::TooManyDestinations { count: 9, limit: 8 })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryLimits {
    /// Largest accepted graph, in points.
    pub max_points: Option<usize>,
    /// Largest accepted number of distinct destinations.
    pub max_destinations: Option<usize>,
}

impl QueryLimits {
    /// No bounds at all.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_points: None,
            max_destinations: None,
        }
    }

    /// Reject graphs with more than `max_points` points.
    ///
    /// # Errors
    /// Returns [`RouteError::GraphTooLarge`] when the bound is exceeded.
    pub fn check_points(&self, points: usize) -> Result<(), RouteError> {
        match self.max_points {
            Some(limit) if points > limit => Err(RouteError::GraphTooLarge { points, limit }),
            Some(limit) => {
                warn_if_near(points, limit, "points");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Reject queries with more than `max_destinations` distinct destinations.
    ///
    /// # Errors
    /// Returns [`RouteError::TooManyDestinations`] when the bound is exceeded.
    pub fn check_destinations(&self, count: usize) -> Result<(), RouteError> {
        match self.max_destinations {
            Some(limit) if count > limit => Err(RouteError::TooManyDestinations { count, limit }),
            Some(limit) => {
                warn_if_near(count, limit, "destinations");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

/// Warn once usage reaches nine tenths of a limit.
fn warn_if_near(value: usize, limit: usize, what: &str) {
    if value.saturating_mul(10) >= limit.saturating_mul(9) && value > 0 {
        log::warn!("query uses {value} {what}, close to the configured limit of {limit}");
    }
}
