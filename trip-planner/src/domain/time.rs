//! Time-of-day handling for timetable connections.
//!
//! The timetable publishes clock times without dates ("HH:MM"). A connection
//! whose arrival is numerically earlier than its departure runs overnight,
//! so durations are computed with a single midnight wrap.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day as published in the timetable.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::ClockTime;
///
/// let time = ClockTime::parse("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
///
/// // Seconds are accepted but must be well-formed
/// assert!(ClockTime::parse("14:30:15").is_ok());
/// assert!(ClockTime::parse("14:30:1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a clock time from a `NaiveTime`.
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Create a clock time from hour and minute, if valid.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "HH:MM" or "HH:MM:SS" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("23:59:59").is_ok());
    ///
    /// assert!(ClockTime::parse("1430").is_err());
    /// assert!(ClockTime::parse("24:00").is_err());
    /// assert!(ClockTime::parse("08:15 (+1d)").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 && bytes.len() != 8 {
            return Err(TimeError::new("expected HH:MM or HH:MM:SS format"));
        }

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = if bytes.len() == 8 {
            if bytes[5] != b':' {
                return Err(TimeError::new("expected colon at position 5"));
            }
            let second = parse_two_digits(&bytes[6..8])
                .ok_or_else(|| TimeError::new("invalid second digits"))?;
            if second > 59 {
                return Err(TimeError::new("second must be 0-59"));
            }
            second
        } else {
            0
        };

        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the time component.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the travel time from `self` until `arrival`.
    ///
    /// If `arrival` is earlier on the clock than `self`, the journey is
    /// taken to cross midnight once, so a day is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::domain::ClockTime;
    /// use chrono::Duration;
    ///
    /// let dep = ClockTime::parse("23:00").unwrap();
    /// let arr = ClockTime::parse("01:00").unwrap();
    /// assert_eq!(dep.duration_until(arr), Duration::hours(2));
    /// ```
    pub fn duration_until(&self, arrival: ClockTime) -> Duration {
        let diff = arrival.0.signed_duration_since(self.0);
        if diff < Duration::zero() {
            diff + Duration::days(1)
        } else {
            diff
        }
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({})", self.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        if self.0.second() != 0 {
            write!(f, ":{:02}", self.0.second())?;
        }
        Ok(())
    }
}

/// Reduce a duration modulo 24 hours.
pub fn wrap_day(duration: Duration) -> Duration {
    Duration::seconds(duration.num_seconds().rem_euclid(SECONDS_PER_DAY))
}

/// Format a duration as "HH:MM:SS".
///
/// Negative durations are clamped to zero.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::format_hms;
/// use chrono::Duration;
///
/// assert_eq!(format_hms(Duration::minutes(125)), "02:05:00");
/// ```
pub fn format_hms(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total / 60) % 60,
        total % 60
    )
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
