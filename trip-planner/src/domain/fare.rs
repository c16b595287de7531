//! Fare amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Error returned when parsing an invalid fare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare: {reason}")]
pub struct InvalidFare {
    reason: &'static str,
}

impl InvalidFare {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A non-negative ticket price, held exactly in cents.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Fare;
///
/// let fare = Fare::parse("49.5").unwrap();
/// assert_eq!(fare.cents(), 4950);
/// assert_eq!(fare.to_string(), "49.50");
///
/// assert!(Fare::parse("-3").is_err());
/// assert!(Fare::parse("1.999").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fare(u64);

impl Fare {
    /// A fare of zero.
    pub const ZERO: Fare = Fare(0);

    /// Create a fare from a number of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Fare(cents)
    }

    /// Create a fare from whole units.
    pub const fn from_units(units: u64) -> Self {
        Fare(units * 100)
    }

    /// Parse a decimal amount with at most two fractional digits.
    pub fn parse(s: &str) -> Result<Self, InvalidFare> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidFare::new("amount cannot be empty"));
        }
        if s.starts_with('-') {
            return Err(InvalidFare::new("amount must not be negative"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidFare::new("expected a decimal amount"));
        }
        if frac.len() > 2 {
            return Err(InvalidFare::new("at most two decimal places"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidFare::new("expected a decimal amount"));
        }

        let units: u64 = whole
            .parse()
            .map_err(|_| InvalidFare::new("amount too large"))?;
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Fare)
            .ok_or_else(|| InvalidFare::new("amount too large"))
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Returns true for a zero fare.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the amount as a floating-point number of units.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        Fare(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Fare {
        iter.fold(Fare::ZERO, Add::add)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse roundtrips
        #[test]
        fn display_parse_roundtrip(cents in 0u64..100_000_000) {
            let fare = Fare::from_cents(cents);
            prop_assert_eq!(Fare::parse(&fare.to_string()).unwrap(), fare);
        }
    }
}
