//! The booking desk.

use chrono::Weekday;
use tracing::info;

use crate::domain::{DaysOfOperation, Fare, IdSequence, Itinerary};

use super::{
    Booking, BookingError, BookingStore, FareClass, InMemoryBookingStore, Passenger, Reservation,
    Ticket,
};

/// A passenger's bookings split by whether the trip runs today.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassengerTrips<'a> {
    /// First leg runs today
    pub current: Vec<&'a Booking>,
    pub past: Vec<&'a Booking>,
}

/// Issues bookings on itineraries and records them in a store.
///
/// The desk owns the `BOOK`, `RES` and `TICK` identifier sequences, so
/// identifiers are unique per desk.
#[derive(Debug)]
pub struct BookingDesk<S: BookingStore = InMemoryBookingStore> {
    store: S,
    booking_ids: IdSequence,
    reservation_ids: IdSequence,
    ticket_ids: IdSequence,
}

impl<S: BookingStore> BookingDesk<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            booking_ids: IdSequence::new("BOOK"),
            reservation_ids: IdSequence::new("RES"),
            ticket_ids: IdSequence::new("TICK"),
        }
    }

    /// Book every passenger on `itinerary` in `class`.
    ///
    /// Each passenger gets their own booking, reservation and ticket. The
    /// booking records the itinerary's route IDs and the itinerary's total
    /// fare for the chosen class. The bookings are saved as one batch, and
    /// identifiers are only consumed once the store accepts it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `passengers` is empty or the store rejects the batch.
    /// Nothing is stored in either case.
    pub fn book(
        &mut self,
        itinerary: &Itinerary,
        passengers: Vec<Passenger>,
        class: FareClass,
    ) -> Result<Vec<Booking>, BookingError> {
        if passengers.is_empty() {
            return Err(BookingError::NoPassengers);
        }

        let fare = fare_for(itinerary, class);
        let route_ids: Vec<_> = itinerary.route_ids().cloned().collect();
        let days = itinerary
            .legs()
            .first()
            .map(|leg| leg.days().clone())
            .unwrap_or_else(|| DaysOfOperation::parse(""));

        let mut booking_ids = self.booking_ids.clone();
        let mut reservation_ids = self.reservation_ids.clone();
        let mut ticket_ids = self.ticket_ids.clone();

        let bookings: Vec<Booking> = passengers
            .into_iter()
            .map(|passenger| {
                let ticket = Ticket::new(ticket_ids.next_id());
                Booking::new(
                    booking_ids.next_id(),
                    itinerary.id().clone(),
                    route_ids.clone(),
                    days.clone(),
                    class,
                    fare,
                    Reservation::new(reservation_ids.next_id(), passenger, ticket),
                )
            })
            .collect();

        self.store.save_all(bookings.clone())?;
        self.booking_ids = booking_ids;
        self.reservation_ids = reservation_ids;
        self.ticket_ids = ticket_ids;

        for booking in &bookings {
            info!(
                booking = booking.id(),
                itinerary = %itinerary.id(),
                passenger = %booking.passenger().full_name(),
                %class,
                "booking confirmed"
            );
        }

        Ok(bookings)
    }

    /// Bookings for the named passenger, compared case-insensitively.
    pub fn reservations_for(&self, first_name: &str, last_name: &str) -> Vec<&Booking> {
        self.store.find_by_passenger(first_name, last_name)
    }

    /// Bookings for the holder of `id_document`, split into trips whose
    /// first leg runs on `today` and the rest.
    ///
    /// `last_name` may be part of the passenger's last name; see
    /// [`Passenger::holds_document`].
    pub fn trips_for(&self, last_name: &str, id_document: &str, today: Weekday) -> PassengerTrips<'_> {
        let (current, past): (Vec<&Booking>, Vec<&Booking>) = self
            .store
            .find_by_document(last_name, id_document)
            .into_iter()
            .partition(|b| b.is_current(today));
        PassengerTrips { current, past }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl Default for BookingDesk<InMemoryBookingStore> {
    fn default() -> Self {
        Self::new(InMemoryBookingStore::new())
    }
}

fn fare_for(itinerary: &Itinerary, class: FareClass) -> Fare {
    match class {
        FareClass::First => itinerary.total_first_class(),
        FareClass::Second => itinerary.total_second_class(),
    }
}
