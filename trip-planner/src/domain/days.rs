//! Days-of-operation handling.

use std::fmt;

use chrono::Weekday;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The days on which a connection runs.
///
/// Timetables may publish a range such as "Mon-Fri"; this is expanded to
/// an explicit comma-separated list at construction. Ranges wrap past
/// Sunday ("Fri-Mon" runs Friday through Monday). Anything that is not a
/// recognised range ("Daily", "Sat,Sun") is kept verbatim.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::DaysOfOperation;
///
/// let days = DaysOfOperation::parse("Mon-Fri");
/// assert_eq!(days.as_str(), "Mon, Tue, Wed, Thu, Fri");
/// assert!(days.contains("Wed"));
/// assert!(!days.contains("Sat"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DaysOfOperation(String);

impl DaysOfOperation {
    /// Parse a days-of-operation value, expanding range notation.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        DaysOfOperation(expand_range(s).unwrap_or_else(|| s.to_string()))
    }

    /// Returns the expanded days as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Literal substring match against the expanded text.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Returns true if the service runs on `day`.
    ///
    /// Matches the day's three-letter name or "Daily", ignoring case.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use trip_planner::domain::DaysOfOperation;
    ///
    /// assert!(DaysOfOperation::parse("Fri-Mon").runs_on(Weekday::Sun));
    /// assert!(DaysOfOperation::parse("Daily").runs_on(Weekday::Tue));
    /// assert!(!DaysOfOperation::parse("Sat,Sun").runs_on(Weekday::Wed));
    /// ```
    pub fn runs_on(&self, day: Weekday) -> bool {
        let days = self.0.to_lowercase();
        days.contains("daily") || days.contains(&day.to_string().to_lowercase())
    }
}

impl fmt::Display for DaysOfOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expand "Start-End" into an explicit day list, or `None` if `s` is not a range.
fn expand_range(s: &str) -> Option<String> {
    let (start, end) = s.split_once('-')?;
    let start = WEEKDAYS.iter().position(|d| *d == start.trim())?;
    let end = WEEKDAYS.iter().position(|d| *d == end.trim())?;

    let mut days = Vec::with_capacity(WEEKDAYS.len());
    let mut i = start;
    loop {
        days.push(WEEKDAYS[i]);
        if i == end {
            break;
        }
        i = (i + 1) % WEEKDAYS.len();
    }

    Some(days.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_weekday_range() {
        let days = DaysOfOperation::parse("Mon-Fri");
        assert_eq!(days.as_str(), "Mon, Tue, Wed, Thu, Fri");
    }

    #[test]
    fn expands_with_spaces() {
        let days = DaysOfOperation::parse(" Sat - Sun ");
        assert_eq!(days.as_str(), "Sat, Sun");
    }

    #[test]
    fn range_wraps_past_sunday() {
        let days = DaysOfOperation::parse("Fri-Mon");
        assert_eq!(days.as_str(), "Fri, Sat, Sun, Mon");
    }

    #[test]
    fn single_day_range() {
        let days = DaysOfOperation::parse("Wed-Wed");
        assert_eq!(days.as_str(), "Wed");
    }

    #[test]
    fn non_range_kept_verbatim() {
        assert_eq!(DaysOfOperation::parse("Daily").as_str(), "Daily");
        assert_eq!(DaysOfOperation::parse("Sat,Sun").as_str(), "Sat,Sun");
        assert_eq!(DaysOfOperation::parse("Mon-Funday").as_str(), "Mon-Funday");
        assert_eq!(DaysOfOperation::parse("mon-fri").as_str(), "mon-fri");
    }

    #[test]
    fn runs_on_matches_short_names() {
        let days = DaysOfOperation::parse("Mon-Wed");
        assert!(days.runs_on(Weekday::Mon));
        assert!(days.runs_on(Weekday::Wed));
        assert!(!days.runs_on(Weekday::Thu));

        assert!(DaysOfOperation::parse("sat,sun").runs_on(Weekday::Sat));
        assert!(DaysOfOperation::parse("DAILY").runs_on(Weekday::Fri));
        assert!(!DaysOfOperation::parse("").runs_on(Weekday::Mon));
    }

    #[test]
    fn contains_is_literal() {
        let days = DaysOfOperation::parse("Mon-Wed");
        assert!(days.contains("Tue"));
        assert!(days.contains("Mon, Tue"));
        assert!(!days.contains("tue"));
        assert!(!days.contains("Thu"));
    }
}
