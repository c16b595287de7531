//! Search filters.
//!
//! A `SearchFilter` has the shape of a connection with every field
//! optional. Endpoint fields constrain where an itinerary starts and ends;
//! the remaining fields are attribute filters that every leg must pass.

use serde::Deserialize;

use crate::domain::{City, ClockTime, ConnectionRecord, Fare, InvalidCity, InvalidFare, TimeError};

/// Error converting raw filter input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid {field}: {source}")]
    City {
        field: &'static str,
        source: InvalidCity,
    },

    #[error("invalid {field}: {source}")]
    Time {
        field: &'static str,
        source: TimeError,
    },

    #[error("invalid {field}: {source}")]
    Fare {
        field: &'static str,
        source: InvalidFare,
    },
}

/// Optional criteria for an itinerary search.
///
/// An absent attribute field imposes no constraint. An absent endpoint city
/// matches no city, so a search needs both endpoints to find anything. A
/// fare ceiling of zero is stored as absent, so it never means "free".
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{City, Fare};
/// use trip_planner::planner::SearchFilter;
///
/// let filter = SearchFilter::between(City::parse("Paris").unwrap(), City::parse("Nice").unwrap())
///     .with_max_first_class(Fare::from_units(40))
///     .with_max_second_class(Fare::ZERO);
///
/// assert_eq!(filter.max_first_class(), Some(Fare::from_units(40)));
/// assert_eq!(filter.max_second_class(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    departure_city: Option<City>,
    arrival_city: Option<City>,
    earliest_departure: Option<ClockTime>,
    latest_arrival: Option<ClockTime>,
    train_type: Option<String>,
    days: Option<String>,
    max_first_class: Option<Fare>,
    max_second_class: Option<Fare>,
}

impl SearchFilter {
    /// A filter with no criteria. Every leg passes [`accepts`](Self::accepts),
    /// but no city is an endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter on the two endpoints only.
    pub fn between(from: City, to: City) -> Self {
        Self::new().with_departure_city(from).with_arrival_city(to)
    }

    pub fn with_departure_city(mut self, city: City) -> Self {
        self.departure_city = Some(city);
        self
    }

    pub fn with_arrival_city(mut self, city: City) -> Self {
        self.arrival_city = Some(city);
        self
    }

    /// Legs must not depart before `time`.
    pub fn with_earliest_departure(mut self, time: ClockTime) -> Self {
        self.earliest_departure = Some(time);
        self
    }

    /// Legs must not arrive after `time`.
    pub fn with_latest_arrival(mut self, time: ClockTime) -> Self {
        self.latest_arrival = Some(time);
        self
    }

    /// Legs must run this train category (compared case-insensitively).
    pub fn with_train_type(mut self, train_type: impl Into<String>) -> Self {
        self.train_type = Some(train_type.into());
        self
    }

    /// Legs' days of operation must contain `days` as literal text.
    pub fn with_days(mut self, days: impl Into<String>) -> Self {
        self.days = Some(days.into());
        self
    }

    /// Legs must not cost more than `ceiling` in first class. Zero clears it.
    pub fn with_max_first_class(mut self, ceiling: Fare) -> Self {
        self.max_first_class = non_zero(ceiling);
        self
    }

    /// Legs must not cost more than `ceiling` in second class. Zero clears it.
    pub fn with_max_second_class(mut self, ceiling: Fare) -> Self {
        self.max_second_class = non_zero(ceiling);
        self
    }

    pub fn departure_city(&self) -> Option<&City> {
        self.departure_city.as_ref()
    }

    pub fn arrival_city(&self) -> Option<&City> {
        self.arrival_city.as_ref()
    }

    pub fn earliest_departure(&self) -> Option<ClockTime> {
        self.earliest_departure
    }

    pub fn latest_arrival(&self) -> Option<ClockTime> {
        self.latest_arrival
    }

    pub fn train_type(&self) -> Option<&str> {
        self.train_type.as_deref()
    }

    pub fn days(&self) -> Option<&str> {
        self.days.as_deref()
    }

    pub fn max_first_class(&self) -> Option<Fare> {
        self.max_first_class
    }

    pub fn max_second_class(&self) -> Option<Fare> {
        self.max_second_class
    }

    /// Returns true if `city` can start an itinerary.
    ///
    /// A filter without a departure city starts nowhere.
    pub fn starts_at(&self, city: &City) -> bool {
        self.departure_city.as_ref().is_some_and(|c| c == city)
    }

    /// Returns true if `city` can end an itinerary.
    ///
    /// A filter without an arrival city ends nowhere.
    pub fn ends_at(&self, city: &City) -> bool {
        self.arrival_city.as_ref().is_some_and(|c| c == city)
    }

    /// Returns true if `leg` passes every attribute filter.
    ///
    /// Endpoint cities are not considered here; see [`starts_at`](Self::starts_at)
    /// and [`ends_at`](Self::ends_at).
    pub fn accepts(&self, leg: &ConnectionRecord) -> bool {
        self.earliest_departure
            .is_none_or(|earliest| leg.departure_time() >= earliest)
            && self
                .latest_arrival
                .is_none_or(|latest| leg.arrival_time() <= latest)
            && self
                .train_type
                .as_ref()
                .is_none_or(|t| leg.train_type().to_lowercase() == t.to_lowercase())
            && self.days.as_ref().is_none_or(|d| leg.days().contains(d))
            && self
                .max_first_class
                .is_none_or(|ceiling| leg.first_class() <= ceiling)
            && self
                .max_second_class
                .is_none_or(|ceiling| leg.second_class() <= ceiling)
    }
}

fn non_zero(fare: Fare) -> Option<Fare> {
    (!fare.is_zero()).then_some(fare)
}

/// Raw, unvalidated filter values as typed by a user or sent in a query
/// string. Empty or whitespace-only values mean "absent".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterInput {
    pub from: Option<String>,
    pub to: Option<String>,
    pub depart_after: Option<String>,
    pub arrive_before: Option<String>,
    pub train: Option<String>,
    pub days: Option<String>,
    pub max_first: Option<String>,
    pub max_second: Option<String>,
}

impl FilterInput {
    /// Validate every field and build a `SearchFilter`.
    ///
    /// # Errors
    ///
    /// Returns the first malformed time or fare.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::planner::FilterInput;
    ///
    /// let input = FilterInput {
    ///     from: Some("Paris".into()),
    ///     depart_after: Some("07:30".into()),
    ///     max_first: Some("".into()),
    ///     ..Default::default()
    /// };
    /// let filter = input.parse().unwrap();
    /// assert_eq!(filter.departure_city().unwrap().as_str(), "Paris");
    /// assert!(filter.max_first_class().is_none());
    /// ```
    pub fn parse(&self) -> Result<SearchFilter, FilterError> {
        let mut filter = SearchFilter::new();

        if let Some(from) = present(&self.from) {
            let city = City::parse(from).map_err(|source| FilterError::City {
                field: "departure city",
                source,
            })?;
            filter = filter.with_departure_city(city);
        }
        if let Some(to) = present(&self.to) {
            let city = City::parse(to).map_err(|source| FilterError::City {
                field: "arrival city",
                source,
            })?;
            filter = filter.with_arrival_city(city);
        }
        if let Some(time) = present(&self.depart_after) {
            let time = ClockTime::parse(time).map_err(|source| FilterError::Time {
                field: "departure time",
                source,
            })?;
            filter = filter.with_earliest_departure(time);
        }
        if let Some(time) = present(&self.arrive_before) {
            let time = ClockTime::parse(time).map_err(|source| FilterError::Time {
                field: "arrival time",
                source,
            })?;
            filter = filter.with_latest_arrival(time);
        }
        if let Some(train) = present(&self.train) {
            filter = filter.with_train_type(train);
        }
        if let Some(days) = present(&self.days) {
            filter = filter.with_days(days);
        }
        if let Some(fare) = present(&self.max_first) {
            let fare = Fare::parse(fare).map_err(|source| FilterError::Fare {
                field: "first-class rate",
                source,
            })?;
            filter = filter.with_max_first_class(fare);
        }
        if let Some(fare) = present(&self.max_second) {
            let fare = Fare::parse(fare).map_err(|source| FilterError::Fare {
                field: "second-class rate",
                source,
            })?;
            filter = filter.with_max_second_class(fare);
        }

        Ok(filter)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
