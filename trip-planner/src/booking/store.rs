//! Booking persistence.

use super::{Booking, BookingError};

/// Storage for confirmed bookings.
///
/// This abstraction allows the booking desk to run against different
/// backends and to be tested in memory.
pub trait BookingStore {
    /// Persist a booking.
    ///
    /// Returns `Err` if a booking with the same identifier is already stored.
    fn save(&mut self, booking: Booking) -> Result<(), BookingError>;

    /// Persist a batch of bookings, all or none.
    ///
    /// Returns `Err` without storing anything if any identifier is already
    /// stored or repeats within the batch.
    fn save_all(&mut self, bookings: Vec<Booking>) -> Result<(), BookingError>;

    /// Bookings whose passenger has this name, compared case-insensitively.
    fn find_by_passenger(&self, first_name: &str, last_name: &str) -> Vec<&Booking>;

    /// Bookings whose passenger holds `id_document` and whose last name
    /// contains `last_name`, ignoring case.
    fn find_by_document(&self, last_name: &str, id_document: &str) -> Vec<&Booking>;

    /// Every stored booking, in insertion order.
    fn all(&self) -> Vec<&Booking>;
}

/// Bookings held in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    bookings: Vec<Booking>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.bookings.iter().any(|b| b.id() == id)
    }
}

impl BookingStore for InMemoryBookingStore {
    fn save(&mut self, booking: Booking) -> Result<(), BookingError> {
        if self.contains(booking.id()) {
            return Err(BookingError::DuplicateBooking(booking.id().to_string()));
        }
        self.bookings.push(booking);
        Ok(())
    }

    fn save_all(&mut self, bookings: Vec<Booking>) -> Result<(), BookingError> {
        for (i, booking) in bookings.iter().enumerate() {
            if self.contains(booking.id()) || bookings[..i].iter().any(|b| b.id() == booking.id()) {
                return Err(BookingError::DuplicateBooking(booking.id().to_string()));
            }
        }
        self.bookings.extend(bookings);
        Ok(())
    }

    fn find_by_passenger(&self, first_name: &str, last_name: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.passenger().is_named(first_name, last_name))
            .collect()
    }

    fn find_by_document(&self, last_name: &str, id_document: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.passenger().holds_document(last_name, id_document))
            .collect()
    }

    fn all(&self) -> Vec<&Booking> {
        self.bookings.iter().collect()
    }
}
