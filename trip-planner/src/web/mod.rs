//! Web layer for the trip planner.
//!
//! Provides JSON endpoints for browsing the timetable, searching
//! itineraries and booking them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
