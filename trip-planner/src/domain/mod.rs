//! Domain types for the trip planner.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod city;
mod connection;
mod days;
mod error;
mod fare;
mod itinerary;
mod route_id;
mod sequence;
mod time;

pub use city::{City, InvalidCity};
pub use connection::ConnectionRecord;
pub use days::DaysOfOperation;
pub use error::DomainError;
pub use fare::{Fare, InvalidFare};
pub use itinerary::{Itinerary, ItineraryBuilder, ItineraryId};
pub use route_id::{InvalidRouteId, RouteId};
pub use sequence::IdSequence;
pub use time::{ClockTime, TimeError, format_hms, wrap_day};

/// Maximum number of legs in one itinerary.
pub const MAX_LEGS: usize = 3;
