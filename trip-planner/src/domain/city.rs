//! City name type.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// A city served by the timetable.
///
/// City names are matched case-insensitively everywhere in the planner,
/// so equality and hashing ignore ASCII and Unicode case. The name is
/// displayed exactly as it was given (after trimming).
///
/// # Examples
///
/// ```
/// use trip_planner::domain::City;
///
/// let paris = City::parse("Paris").unwrap();
/// assert_eq!(paris, City::parse("PARIS").unwrap());
/// assert_eq!(paris.to_string(), "Paris");
///
/// // Blank names are rejected
/// assert!(City::parse("   ").is_err());
/// ```
#[derive(Clone)]
pub struct City {
    name: String,
    key: String,
}

impl City {
    /// Parse a city name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        let name = s.trim();
        if name.is_empty() {
            return Err(InvalidCity {
                reason: "name cannot be empty",
            });
        }

        Ok(City {
            name: name.to_string(),
            key: name.to_lowercase(),
        })
    }

    /// Returns the city name as given.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
