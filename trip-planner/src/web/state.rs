//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::booking::BookingDesk;
use crate::planner::PlannerSession;
use crate::timetable::Timetable;

/// Shared application state.
///
/// The timetable is read-only. The planner session and booking desk are
/// each behind a mutex, so searches and bookings are applied one at a time.
#[derive(Clone)]
pub struct AppState {
    /// Loaded timetable
    pub timetable: Arc<Timetable>,

    /// Itinerary counter and latest search results
    pub session: Arc<Mutex<PlannerSession>>,

    /// Bookings made so far
    pub bookings: Arc<Mutex<BookingDesk>>,
}

impl AppState {
    /// Create a new app state with a fresh session and an empty booking desk.
    pub fn new(timetable: Timetable) -> Self {
        Self {
            timetable: Arc::new(timetable),
            session: Arc::new(Mutex::new(PlannerSession::new())),
            bookings: Arc::new(Mutex::new(BookingDesk::default())),
        }
    }
}
