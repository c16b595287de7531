//! Itinerary planning.
//!
//! Given a timetable and a filter, the planner enumerates every direct,
//! two-leg and three-leg itinerary whose legs all pass the filter, then
//! exposes the results for sorting and lookup.

mod filter;
mod results;
mod search;
mod session;


pub use filter::{FilterError, FilterInput, SearchFilter};
pub use results::{InvalidSortOrder, ResultSet, SortOrder};
pub use search::search;
pub use session::PlannerSession;
