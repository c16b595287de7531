//! Itinerary types.
//!
//! An `Itinerary` is one to three connected legs with aggregated duration
//! and fares. The `ItineraryBuilder` validates leg sequences and issues
//! itinerary identifiers.

use std::fmt;
use std::sync::Arc;

use chrono::Duration;

use super::{
    City, ClockTime, ConnectionRecord, DomainError, Fare, IdSequence, MAX_LEGS, RouteId,
    format_hms, wrap_day,
};

/// Identifier of an itinerary within a planning session (e.g. "TRIP0007").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItineraryId(String);

impl ItineraryId {
    /// Wrap an existing identifier, such as one restored from storage.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A planned trip over one to three connections.
///
/// # Invariants
///
/// - Between 1 and `MAX_LEGS` legs
/// - Consecutive legs connect (arrival city of one = departure city of next)
///
/// Equality compares the legs' route IDs in order and ignores the
/// itinerary's own identifier, so the same path found twice is equal.
#[derive(Debug, Clone)]
pub struct Itinerary {
    id: ItineraryId,
    legs: Vec<Arc<ConnectionRecord>>,
    total_duration: Duration,
    total_first_class: Fare,
    total_second_class: Fare,
}

impl Itinerary {
    /// Construct an itinerary with an explicit identifier.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `legs` is empty or longer than `MAX_LEGS`
    /// - Consecutive legs don't connect
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::domain::{City, ClockTime, ConnectionRecord, Itinerary, ItineraryId, RouteId};
    /// use std::sync::Arc;
    ///
    /// let leg = ConnectionRecord::new(
    ///     RouteId::new("R1").unwrap(),
    ///     City::parse("Paris").unwrap(),
    ///     City::parse("Lyon").unwrap(),
    ///     ClockTime::parse("08:00").unwrap(),
    ///     ClockTime::parse("10:00").unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let itinerary = Itinerary::new(ItineraryId::new("TRIP0001"), vec![Arc::new(leg)]).unwrap();
    /// assert!(itinerary.is_direct());
    /// ```
    pub fn new(id: ItineraryId, legs: Vec<Arc<ConnectionRecord>>) -> Result<Self, DomainError> {
        validate_legs(&legs)?;

        let travel = legs
            .iter()
            .fold(Duration::zero(), |acc, leg| acc + leg.duration());
        let total_first_class = legs.iter().map(|leg| leg.first_class()).sum();
        let total_second_class = legs.iter().map(|leg| leg.second_class()).sum();

        Ok(Self {
            id,
            legs,
            total_duration: wrap_day(travel),
            total_first_class,
            total_second_class,
        })
    }

    pub fn id(&self) -> &ItineraryId {
        &self.id
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Arc<ConnectionRecord>] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Number of intermediate stops (legs - 1).
    pub fn change_count(&self) -> usize {
        self.legs.len() - 1
    }

    /// Returns true for a single-leg itinerary.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Returns the route IDs of the legs in order.
    pub fn route_ids(&self) -> impl Iterator<Item = &RouteId> {
        self.legs.iter().map(|leg| leg.route_id())
    }

    /// Returns true if this itinerary travels over exactly `legs`, in order.
    pub fn has_legs(&self, legs: &[Arc<ConnectionRecord>]) -> bool {
        self.legs.len() == legs.len()
            && self
                .legs
                .iter()
                .zip(legs)
                .all(|(a, b)| a.route_id() == b.route_id())
    }

    pub fn origin(&self) -> &City {
        self.first_leg().departure_city()
    }

    pub fn destination(&self) -> &City {
        self.last_leg().arrival_city()
    }

    pub fn departure_time(&self) -> ClockTime {
        self.first_leg().departure_time()
    }

    pub fn arrival_time(&self) -> ClockTime {
        self.last_leg().arrival_time()
    }

    /// Sum of leg travel times, reduced modulo 24 hours.
    ///
    /// Layovers between legs are not counted.
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn total_first_class(&self) -> Fare {
        self.total_first_class
    }

    pub fn total_second_class(&self) -> Fare {
        self.total_second_class
    }

    fn first_leg(&self) -> &ConnectionRecord {
        // Validated non-empty at construction
        &self.legs[0]
    }

    fn last_leg(&self) -> &ConnectionRecord {
        &self.legs[self.legs.len() - 1]
    }
}

impl PartialEq for Itinerary {
    fn eq(&self, other: &Self) -> bool {
        self.has_legs(&other.legs)
    }
}

impl Eq for Itinerary {}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trip ID: {}", self.id)?;
        writeln!(f, "Total Time: {}", format_hms(self.total_duration))?;
        writeln!(f, "Total First Class Rate: EUR {}", self.total_first_class)?;
        writeln!(f, "Total Second Class Rate: EUR {}", self.total_second_class)?;
        writeln!(f, "Connections:")?;
        for leg in &self.legs {
            writeln!(f, "  {leg}")?;
        }
        Ok(())
    }
}

/// Check that a leg sequence can form an itinerary.
fn validate_legs(legs: &[Arc<ConnectionRecord>]) -> Result<(), DomainError> {
    if legs.is_empty() {
        return Err(DomainError::EmptyItinerary);
    }
    if legs.len() > MAX_LEGS {
        return Err(DomainError::TooManyLegs(legs.len()));
    }

    for window in legs.windows(2) {
        let arrived = window[0].arrival_city();
        let departing = window[1].departure_city();
        if arrived != departing {
            return Err(DomainError::LegsNotConnected(
                arrived.clone(),
                departing.clone(),
            ));
        }
    }

    Ok(())
}

/// Builds itineraries and issues their identifiers.
///
/// Identifiers are `TRIP` followed by a zero-padded counter owned by the
/// builder, so each planning session numbers its itineraries independently.
#[derive(Debug, Clone)]
pub struct ItineraryBuilder {
    ids: IdSequence,
}

impl ItineraryBuilder {
    pub fn new() -> Self {
        Self {
            ids: IdSequence::new("TRIP"),
        }
    }

    /// Aggregate `legs` into a new itinerary with a fresh identifier.
    ///
    /// Rejected leg sequences do not consume an identifier.
    pub fn build(&mut self, legs: Vec<Arc<ConnectionRecord>>) -> Result<Itinerary, DomainError> {
        validate_legs(&legs)?;
        let id = ItineraryId(self.ids.next_id());
        Itinerary::new(id, legs)
    }

    /// Number of itineraries built so far.
    pub fn issued(&self) -> u32 {
        self.ids.issued()
    }
}

impl Default for ItineraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DaysOfOperation;

    fn leg(id: &str, from: &str, to: &str, dep: &str, arr: &str, first: u64, second: u64) -> Arc<ConnectionRecord> {
        Arc::new(
            ConnectionRecord::new(
                RouteId::new(id).unwrap(),
                City::parse(from).unwrap(),
                City::parse(to).unwrap(),
                ClockTime::parse(dep).unwrap(),
                ClockTime::parse(arr).unwrap(),
            )
            .unwrap()
            .with_train_type("TGV")
            .with_days(DaysOfOperation::parse("Daily"))
            .with_fares(Fare::from_units(first), Fare::from_units(second)),
        )
    }

    #[test]
    fn single_leg_aggregates() {
        let mut builder = ItineraryBuilder::new();
        let it = builder
            .build(vec![leg("R1", "Paris", "Lyon", "08:00", "10:00", 50, 30)])
            .unwrap();

        assert_eq!(it.id().as_str(), "TRIP0001");
        assert_eq!(it.total_duration(), Duration::hours(2));
        assert_eq!(it.total_first_class(), Fare::from_units(50));
        assert_eq!(it.total_second_class(), Fare::from_units(30));
        assert!(it.is_direct());
        assert_eq!(it.change_count(), 0);
    }

    #[test]
    fn multi_leg_sums_travel_not_layover() {
        let mut builder = ItineraryBuilder::new();
        let it = builder
            .build(vec![
                leg("R1", "Paris", "Lyon", "08:00", "10:00", 50, 30),
                leg("R2", "Lyon", "Nice", "11:00", "13:00", 40, 20),
            ])
            .unwrap();

        assert_eq!(it.total_duration(), Duration::hours(4));
        assert_eq!(it.total_first_class(), Fare::from_units(90));
        assert_eq!(it.total_second_class(), Fare::from_units(50));
        assert_eq!(it.origin(), &City::parse("Paris").unwrap());
        assert_eq!(it.destination(), &City::parse("Nice").unwrap());
        assert_eq!(it.departure_time(), ClockTime::parse("08:00").unwrap());
        assert_eq!(it.arrival_time(), ClockTime::parse("13:00").unwrap());
    }

    #[test]
    fn total_duration_wraps_modulo_day() {
        let mut builder = ItineraryBuilder::new();
        let it = builder
            .build(vec![
                leg("R1", "A", "B", "08:00", "20:00", 1, 1),
                leg("R2", "B", "C", "21:00", "09:00", 1, 1),
                leg("R3", "C", "D", "10:00", "13:00", 1, 1),
            ])
            .unwrap();

        // 12h + 12h + 3h = 27h, reported as 3h
        assert_eq!(it.total_duration(), Duration::hours(3));
    }

    #[test]
    fn ids_are_sequential_per_builder() {
        let mut builder = ItineraryBuilder::new();
        let a = builder.build(vec![leg("R1", "A", "B", "08:00", "09:00", 1, 1)]).unwrap();
        let b = builder.build(vec![leg("R2", "A", "B", "10:00", "11:00", 1, 1)]).unwrap();
        assert_eq!(a.id().as_str(), "TRIP0001");
        assert_eq!(b.id().as_str(), "TRIP0002");
        assert_eq!(builder.issued(), 2);

        let mut other = ItineraryBuilder::new();
        let c = other.build(vec![leg("R3", "A", "B", "12:00", "13:00", 1, 1)]).unwrap();
        assert_eq!(c.id().as_str(), "TRIP0001");
    }

    #[test]
    fn rejects_empty() {
        let mut builder = ItineraryBuilder::new();
        assert_eq!(builder.build(vec![]).unwrap_err(), DomainError::EmptyItinerary);
        assert_eq!(builder.issued(), 0);
    }

    #[test]
    fn rejects_too_many_legs() {
        let mut builder = ItineraryBuilder::new();
        let result = builder.build(vec![
            leg("R1", "A", "B", "08:00", "09:00", 1, 1),
            leg("R2", "B", "C", "09:00", "10:00", 1, 1),
            leg("R3", "C", "D", "10:00", "11:00", 1, 1),
            leg("R4", "D", "E", "11:00", "12:00", 1, 1),
        ]);
        assert_eq!(result.unwrap_err(), DomainError::TooManyLegs(4));
    }

    #[test]
    fn rejects_discontinuous_legs() {
        let mut builder = ItineraryBuilder::new();
        let result = builder.build(vec![
            leg("R1", "Paris", "Lyon", "08:00", "10:00", 1, 1),
            leg("R2", "Marseille", "Nice", "11:00", "13:00", 1, 1),
        ]);
        assert!(matches!(result, Err(DomainError::LegsNotConnected(_, _))));
        assert_eq!(builder.issued(), 0);
    }

    #[test]
    fn continuity_is_case_insensitive() {
        let mut builder = ItineraryBuilder::new();
        let result = builder.build(vec![
            leg("R1", "Paris", "Lyon", "08:00", "10:00", 1, 1),
            leg("R2", "LYON", "Nice", "11:00", "13:00", 1, 1),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn equality_ignores_id() {
        let l1 = leg("R1", "Paris", "Lyon", "08:00", "10:00", 1, 1);
        let l2 = leg("R2", "Lyon", "Nice", "11:00", "13:00", 1, 1);

        let a = Itinerary::new(ItineraryId::new("TRIP0001"), vec![l1.clone(), l2.clone()]).unwrap();
        let b = Itinerary::new(ItineraryId::new("TRIP0099"), vec![l1.clone(), l2]).unwrap();
        let c = Itinerary::new(ItineraryId::new("TRIP0001"), vec![l1]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn route_ids_in_order() {
        let mut builder = ItineraryBuilder::new();
        let it = builder
            .build(vec![
                leg("R7", "A", "B", "08:00", "09:00", 1, 1),
                leg("R3", "B", "C", "09:30", "10:00", 1, 1),
            ])
            .unwrap();
        let ids: Vec<&str> = it.route_ids().map(|r| r.as_str()).collect();
        assert_eq!(ids, vec!["R7", "R3"]);
    }

    #[test]
    fn display_lists_totals_and_legs() {
        let mut builder = ItineraryBuilder::new();
        let it = builder
            .build(vec![
                leg("R1", "Paris", "Lyon", "08:00", "10:00", 50, 30),
                leg("R2", "Lyon", "Nice", "11:00", "13:00", 40, 20),
            ])
            .unwrap();

        let text = it.to_string();
        assert!(text.starts_with("Trip ID: TRIP0001\n"));
        assert!(text.contains("Total Time: 04:00:00\n"));
        assert!(text.contains("Total First Class Rate: EUR 90.00\n"));
        assert!(text.contains("Total Second Class Rate: EUR 50.00\n"));
        assert!(text.contains("  [R1] Paris -> Lyon"));
        assert!(text.contains("  [R2] Lyon -> Nice"));
    }
}
