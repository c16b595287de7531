//! Planning sessions.

use tracing::info;

use crate::domain::{Itinerary, ItineraryBuilder, ItineraryId};
use crate::timetable::Timetable;

use super::filter::SearchFilter;
use super::results::{ResultSet, SortOrder};
use super::search::search;

/// One user's planning state: the identifier counter and the most recent
/// search results.
///
/// Itinerary identifiers keep increasing across searches in a session, so
/// an identifier from an earlier search never refers to a later itinerary.
#[derive(Debug, Clone, Default)]
pub struct PlannerSession {
    builder: ItineraryBuilder,
    latest: ResultSet,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a search and keep its results as the session's latest.
    pub fn search(&mut self, timetable: &Timetable, filter: &SearchFilter) -> &ResultSet {
        self.latest = search(timetable, filter, &mut self.builder);
        info!(
            results = self.latest.len(),
            issued = self.builder.issued(),
            "search results replaced"
        );
        &self.latest
    }

    /// Reorder the latest results.
    pub fn sort(&mut self, order: SortOrder) -> &ResultSet {
        self.latest.sort(order);
        &self.latest
    }

    pub fn latest(&self) -> &ResultSet {
        &self.latest
    }

    /// Look up an itinerary in the latest results.
    pub fn itinerary(&self, id: &ItineraryId) -> Option<&Itinerary> {
        self.latest.itinerary_by_id(id)
    }
}
