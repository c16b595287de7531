//! Timetable connection type.
//!
//! A `ConnectionRecord` is one scheduled point-to-point leg, the atomic unit
//! of every itinerary.

use std::fmt;

use chrono::Duration;

use super::{City, ClockTime, DaysOfOperation, DomainError, Fare, RouteId};

/// One scheduled connection between two cities.
///
/// Created once at timetable load time and immutable thereafter. Itineraries
/// share records through `Arc<ConnectionRecord>`.
///
/// # Invariants
///
/// - Departure and arrival cities differ (case-insensitively)
/// - Fares are non-negative (guaranteed by `Fare`)
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{City, ClockTime, ConnectionRecord, Fare, RouteId};
/// use chrono::Duration;
///
/// let conn = ConnectionRecord::new(
///     RouteId::new("R1").unwrap(),
///     City::parse("Paris").unwrap(),
///     City::parse("Lyon").unwrap(),
///     ClockTime::parse("08:00").unwrap(),
///     ClockTime::parse("10:00").unwrap(),
/// )
/// .unwrap()
/// .with_fares(Fare::from_units(50), Fare::from_units(30));
///
/// assert_eq!(conn.duration(), Duration::hours(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    route_id: RouteId,
    departure_city: City,
    arrival_city: City,
    departure_time: ClockTime,
    arrival_time: ClockTime,
    train_type: String,
    days: DaysOfOperation,
    first_class: Fare,
    second_class: Fare,
}

impl ConnectionRecord {
    /// Construct a connection, validating that it joins two distinct cities.
    ///
    /// Train type and days default to empty and fares to zero; set them with
    /// the `with_*` methods.
    ///
    /// # Errors
    ///
    /// Returns `Err` if departure and arrival city are the same.
    pub fn new(
        route_id: RouteId,
        departure_city: City,
        arrival_city: City,
        departure_time: ClockTime,
        arrival_time: ClockTime,
    ) -> Result<Self, DomainError> {
        if departure_city == arrival_city {
            return Err(DomainError::InvalidConnection(
                "departure and arrival city must differ",
            ));
        }

        Ok(Self {
            route_id,
            departure_city,
            arrival_city,
            departure_time,
            arrival_time,
            train_type: String::new(),
            days: DaysOfOperation::parse(""),
            first_class: Fare::ZERO,
            second_class: Fare::ZERO,
        })
    }

    /// Set the train category label.
    pub fn with_train_type(mut self, train_type: impl Into<String>) -> Self {
        self.train_type = train_type.into().trim().to_string();
        self
    }

    /// Set the days of operation.
    pub fn with_days(mut self, days: DaysOfOperation) -> Self {
        self.days = days;
        self
    }

    /// Set the first- and second-class fares.
    pub fn with_fares(mut self, first_class: Fare, second_class: Fare) -> Self {
        self.first_class = first_class;
        self.second_class = second_class;
        self
    }

    pub fn route_id(&self) -> &RouteId {
        &self.route_id
    }

    pub fn departure_city(&self) -> &City {
        &self.departure_city
    }

    pub fn arrival_city(&self) -> &City {
        &self.arrival_city
    }

    pub fn departure_time(&self) -> ClockTime {
        self.departure_time
    }

    pub fn arrival_time(&self) -> ClockTime {
        self.arrival_time
    }

    pub fn train_type(&self) -> &str {
        &self.train_type
    }

    pub fn days(&self) -> &DaysOfOperation {
        &self.days
    }

    pub fn first_class(&self) -> Fare {
        self.first_class
    }

    pub fn second_class(&self) -> Fare {
        self.second_class
    }

    /// Travel time of this connection, crossing midnight at most once.
    pub fn duration(&self) -> Duration {
        self.departure_time.duration_until(self.arrival_time)
    }

    /// Returns true if this connection runs overnight.
    pub fn is_overnight(&self) -> bool {
        self.arrival_time < self.departure_time
    }
}

impl fmt::Display for ConnectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {}, Departure: {}, Arrival: {}, Train: {}, Days: {}, \
             1st Class: EUR {}, 2nd Class: EUR {}",
            self.route_id,
            self.departure_city,
            self.arrival_city,
            self.departure_time,
            self.arrival_time,
            self.train_type,
            self.days,
            self.first_class,
            self.second_class,
        )
    }
}
