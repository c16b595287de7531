//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::booking::{Booking, BookingError, Passenger, PassengerTrips};
use crate::domain::{ConnectionRecord, Itinerary, format_hms};
use crate::planner::{FilterInput, ResultSet, SortOrder};

/// Query string for an itinerary search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(flatten)]
    pub filter: FilterInput,

    /// One of duration_asc, duration_desc, price_asc, price_desc
    pub sort: Option<String>,
}

/// Request to book passengers on an itinerary from the latest search.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    /// Itinerary ID (e.g., "TRIP0003")
    pub itinerary_id: String,

    pub passengers: Vec<PassengerRequest>,

    /// "first" or "second" (defaults to second)
    pub fare_class: Option<String>,
}

/// Passenger details in a booking request.
#[derive(Debug, Deserialize)]
pub struct PassengerRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub id_document: String,
}

impl PassengerRequest {
    pub fn to_passenger(&self) -> Result<Passenger, BookingError> {
        Passenger::new(&self.first_name, &self.last_name, self.age, &self.id_document)
    }
}

/// Query string for listing a passenger's bookings.
#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    pub first_name: String,
    pub last_name: String,
}

/// Query string for a document holder's trips.
#[derive(Debug, Deserialize)]
pub struct TripsQuery {
    /// Whole or partial last name
    #[serde(default)]
    pub last_name: String,

    pub id_document: String,
}

/// A timetable connection.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub route_id: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: String,
    pub arrival_time: String,

    /// True if the connection arrives on the following day
    pub overnight: bool,

    pub duration_mins: i64,
    pub train_type: String,
    pub days: String,
    pub first_class: f64,
    pub second_class: f64,
}

/// The full timetable.
#[derive(Debug, Serialize)]
pub struct ConnectionsResponse {
    pub connections: Vec<ConnectionResult>,

    /// Cities served, in order of first appearance
    pub cities: Vec<String>,
}

/// An itinerary in search results.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub changes: usize,

    /// Total travel time as HH:MM:SS
    pub total_time: String,

    pub total_duration_mins: i64,
    pub total_first_class: f64,
    pub total_second_class: f64,
    pub legs: Vec<ConnectionResult>,
}

/// Response for an itinerary search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub sort: String,
    pub direct: Vec<ItineraryResult>,
    pub indirect: Vec<ItineraryResult>,
}

/// A confirmed booking.
#[derive(Debug, Serialize)]
pub struct BookingResult {
    pub booking_id: String,
    pub reservation_id: String,
    pub ticket_id: String,
    pub itinerary_id: String,
    pub route_ids: Vec<String>,

    /// Days of operation of the first leg
    pub days: String,

    pub passenger: String,
    pub fare_class: String,
    pub fare: f64,
}

/// Response listing bookings.
#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingResult>,
}

/// A document holder's bookings, split by whether the trip runs today.
#[derive(Debug, Serialize)]
pub struct TripsResponse {
    pub current: Vec<BookingResult>,
    pub past: Vec<BookingResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl ConnectionResult {
    /// Create from a timetable connection.
    pub fn from_connection(conn: &ConnectionRecord) -> Self {
        Self {
            route_id: conn.route_id().to_string(),
            departure_city: conn.departure_city().to_string(),
            arrival_city: conn.arrival_city().to_string(),
            departure_time: conn.departure_time().to_string(),
            arrival_time: conn.arrival_time().to_string(),
            overnight: conn.is_overnight(),
            duration_mins: conn.duration().num_minutes(),
            train_type: conn.train_type().to_string(),
            days: conn.days().to_string(),
            first_class: conn.first_class().as_f64(),
            second_class: conn.second_class().as_f64(),
        }
    }
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id().to_string(),
            origin: itinerary.origin().to_string(),
            destination: itinerary.destination().to_string(),
            departure_time: itinerary.departure_time().to_string(),
            arrival_time: itinerary.arrival_time().to_string(),
            changes: itinerary.change_count(),
            total_time: format_hms(itinerary.total_duration()),
            total_duration_mins: itinerary.total_duration().num_minutes(),
            total_first_class: itinerary.total_first_class().as_f64(),
            total_second_class: itinerary.total_second_class().as_f64(),
            legs: itinerary
                .legs()
                .iter()
                .map(|leg| ConnectionResult::from_connection(leg))
                .collect(),
        }
    }
}

impl SearchResponse {
    pub fn from_results(results: &ResultSet, sort: SortOrder) -> Self {
        Self {
            sort: sort.to_string(),
            direct: results.direct().iter().map(ItineraryResult::from_itinerary).collect(),
            indirect: results.indirect().iter().map(ItineraryResult::from_itinerary).collect(),
        }
    }
}

impl BookingResult {
    /// Create from a domain Booking.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id().to_string(),
            reservation_id: booking.reservation().id().to_string(),
            ticket_id: booking.reservation().ticket().id().to_string(),
            itinerary_id: booking.itinerary_id().to_string(),
            route_ids: booking.route_ids().iter().map(|r| r.to_string()).collect(),
            days: booking.days().to_string(),
            passenger: booking.passenger().full_name(),
            fare_class: booking.fare_class().to_string(),
            fare: booking.fare().as_f64(),
        }
    }
}

impl BookingsResponse {
    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        Self {
            bookings: bookings.into_iter().map(BookingResult::from_booking).collect(),
        }
    }
}

impl TripsResponse {
    pub fn from_trips(trips: &PassengerTrips<'_>) -> Self {
        Self {
            current: trips.current.iter().map(|b| BookingResult::from_booking(b)).collect(),
            past: trips.past.iter().map(|b| BookingResult::from_booking(b)).collect(),
        }
    }
}
