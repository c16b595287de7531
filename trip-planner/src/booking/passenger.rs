//! Passenger details and fare classes.

use std::fmt;
use std::str::FromStr;

use super::BookingError;

/// A traveller named on a booking.
///
/// # Invariants
///
/// First name, last name and identity document are non-empty after trimming.
///
/// # Examples
///
/// ```
/// use trip_planner::booking::Passenger;
///
/// let p = Passenger::new(" Ada ", "Lovelace", 36, "P1234567").unwrap();
/// assert_eq!(p.full_name(), "Ada Lovelace");
/// assert!(Passenger::new("", "Lovelace", 36, "P1234567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    first_name: String,
    last_name: String,
    age: u32,
    id_document: String,
}

impl Passenger {
    pub fn new(
        first_name: &str,
        last_name: &str,
        age: u32,
        id_document: &str,
    ) -> Result<Self, BookingError> {
        Ok(Self {
            first_name: required(first_name, "first name is empty")?,
            last_name: required(last_name, "last name is empty")?,
            age,
            id_document: required(id_document, "identity document is empty")?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn id_document(&self) -> &str {
        &self.id_document
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match on first and last name.
    pub fn is_named(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.to_lowercase() == first_name.trim().to_lowercase()
            && self.last_name.to_lowercase() == last_name.trim().to_lowercase()
    }

    /// Returns true if `id_document` is this passenger's document and
    /// `last_name` appears in their last name, ignoring case.
    ///
    /// A blank `last_name` matches any passenger holding the document.
    pub fn holds_document(&self, last_name: &str, id_document: &str) -> bool {
        self.id_document == id_document.trim()
            && self
                .last_name
                .to_lowercase()
                .contains(&last_name.trim().to_lowercase())
    }
}

fn required(value: &str, reason: &'static str) -> Result<String, BookingError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookingError::InvalidPassenger(reason));
    }
    Ok(value.to_string())
}

/// Seating class, which decides the fare charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FareClass {
    First,
    #[default]
    Second,
}

/// Error parsing a `FareClass`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fare class '{0}' (expected first or second)")]
pub struct InvalidFareClass(String);

impl FromStr for FareClass {
    type Err = InvalidFareClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "1" | "1st" => Ok(FareClass::First),
            "second" | "2" | "2nd" => Ok(FareClass::Second),
            _ => Err(InvalidFareClass(s.to_string())),
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FareClass::First => f.write_str("first"),
            FareClass::Second => f.write_str("second"),
        }
    }
}
