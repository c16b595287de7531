//! Booking records.

use chrono::Weekday;

use crate::domain::{DaysOfOperation, Fare, ItineraryId, RouteId};

use super::{FareClass, Passenger};

/// Proof of travel issued with a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: String,
}

impl Ticket {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// One passenger's seat on an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: String,
    passenger: Passenger,
    ticket: Ticket,
}

impl Reservation {
    pub fn new(id: impl Into<String>, passenger: Passenger, ticket: Ticket) -> Self {
        Self {
            id: id.into(),
            passenger,
            ticket,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }
}

/// A confirmed booking of one passenger on one itinerary.
///
/// The itinerary's legs are recorded by route ID, so a booking stays
/// meaningful after the search results that produced it are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: String,
    itinerary_id: ItineraryId,
    route_ids: Vec<RouteId>,
    days: DaysOfOperation,
    fare_class: FareClass,
    fare: Fare,
    reservation: Reservation,
}

impl Booking {
    pub fn new(
        id: impl Into<String>,
        itinerary_id: ItineraryId,
        route_ids: Vec<RouteId>,
        days: DaysOfOperation,
        fare_class: FareClass,
        fare: Fare,
        reservation: Reservation,
    ) -> Self {
        Self {
            id: id.into(),
            itinerary_id,
            route_ids,
            days,
            fare_class,
            fare,
            reservation,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn itinerary_id(&self) -> &ItineraryId {
        &self.itinerary_id
    }

    /// Route IDs of the booked legs, in travel order.
    pub fn route_ids(&self) -> &[RouteId] {
        &self.route_ids
    }

    /// Days of operation of the first booked leg.
    pub fn days(&self) -> &DaysOfOperation {
        &self.days
    }

    /// Returns true if the trip's first leg runs on `today`.
    pub fn is_current(&self, today: Weekday) -> bool {
        self.days.runs_on(today)
    }

    pub fn fare_class(&self) -> FareClass {
        self.fare_class
    }

    /// Total fare for this passenger in the booked class.
    pub fn fare(&self) -> Fare {
        self.fare
    }

    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    pub fn passenger(&self) -> &Passenger {
        self.reservation.passenger()
    }
}
