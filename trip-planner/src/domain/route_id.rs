//! Timetable route identifier type.

use std::fmt;

/// Error returned when parsing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route ID: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// The identifier of a scheduled connection, as published in the timetable.
///
/// Route IDs are opaque. The only validation is that they must be
/// non-empty after trimming; comparison is exact.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::RouteId;
///
/// let id = RouteId::new("R00042").unwrap();
/// assert_eq!(id.as_str(), "R00042");
///
/// assert!(RouteId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route ID from a string, trimming surrounding whitespace.
    pub fn new(s: &str) -> Result<Self, InvalidRouteId> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidRouteId {
                reason: "route ID cannot be empty",
            });
        }
        Ok(RouteId(s.to_string()))
    }

    /// Returns the route ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
