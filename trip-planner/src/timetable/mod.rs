//! The static timetable of connections.
//!
//! A `Timetable` is loaded once (see [`load_csv`]) and shared read-only
//! between searches.

mod loader;

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{City, ConnectionRecord, RouteId};

pub use loader::{LoadError, load_csv, load_csv_path};

/// Error building a timetable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// Two records share a route ID
    #[error("duplicate route ID: {0}")]
    DuplicateRoute(RouteId),
}

/// In-memory collection of connection records, in load order.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    connections: Vec<Arc<ConnectionRecord>>,
}

impl Timetable {
    /// Build a timetable from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if two records share a route ID.
    pub fn new(records: Vec<ConnectionRecord>) -> Result<Self, TimetableError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.route_id()) {
                return Err(TimetableError::DuplicateRoute(record.route_id().clone()));
            }
        }

        Ok(Self {
            connections: records.into_iter().map(Arc::new).collect(),
        })
    }

    /// Create an empty timetable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns every record in load order.
    pub fn all(&self) -> &[Arc<ConnectionRecord>] {
        &self.connections
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ConnectionRecord>> {
        self.connections.iter()
    }

    /// Returns true if any single record runs from `from` to `to`.
    ///
    /// City names match case-insensitively. No other filter applies.
    pub fn direct_exists(&self, from: &City, to: &City) -> bool {
        self.connections
            .iter()
            .any(|c| c.departure_city() == from && c.arrival_city() == to)
    }

    /// Look up a record by route ID.
    pub fn get(&self, route_id: &RouteId) -> Option<&Arc<ConnectionRecord>> {
        self.connections.iter().find(|c| c.route_id() == route_id)
    }

    /// Distinct cities served, in order of first appearance.
    pub fn cities(&self) -> Vec<&City> {
        let mut seen = HashSet::new();
        let mut cities = Vec::new();
        for conn in &self.connections {
            for city in [conn.departure_city(), conn.arrival_city()] {
                if seen.insert(city) {
                    cities.push(city);
                }
            }
        }
        cities
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
