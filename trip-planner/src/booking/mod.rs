//! Seat booking on planned itineraries.
//!
//! A booking is made per passenger: each `Booking` holds one `Reservation`,
//! which holds one `Ticket`. Bookings are persisted through a
//! [`BookingStore`]; the crate ships an in-memory store.

mod desk;
mod passenger;
mod record;
mod store;

pub use desk::{BookingDesk, PassengerTrips};
pub use passenger::{FareClass, InvalidFareClass, Passenger};
pub use record::{Booking, Reservation, Ticket};
pub use store::{BookingStore, InMemoryBookingStore};

/// Error making or storing a booking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// A booking needs at least one passenger
    #[error("no passengers given")]
    NoPassengers,

    /// Passenger details failed validation
    #[error("invalid passenger: {0}")]
    InvalidPassenger(&'static str),

    /// The store already holds a booking with this identifier
    #[error("booking {0} already exists")]
    DuplicateBooking(String),
}
