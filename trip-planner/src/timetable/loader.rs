//! Timetable loading from CSV.
//!
//! The published timetable is a CSV file with a header row and nine
//! positional columns: route ID, departure city, arrival city, departure
//! time, arrival time, train type, days of operation, first-class rate and
//! second-class rate. Rows that fail validation are logged and skipped
//! rather than failing the whole load.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use crate::domain::{
    City, ClockTime, ConnectionRecord, DaysOfOperation, DomainError, Fare, InvalidCity,
    InvalidFare, InvalidRouteId, RouteId, TimeError,
};

use super::{Timetable, TimetableError};

/// Number of columns a timetable row must have.
const FIELD_COUNT: usize = 9;

/// Error loading a timetable.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or is not well-formed CSV
    #[error("failed to read timetable: {0}")]
    Csv(#[from] csv::Error),

    /// The loaded records do not form a valid timetable
    #[error(transparent)]
    Timetable(#[from] TimetableError),
}

/// Why a single row was rejected.
#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error("expected {FIELD_COUNT} fields, found {0}")]
    MissingFields(usize),

    #[error(transparent)]
    RouteId(#[from] InvalidRouteId),

    #[error(transparent)]
    City(#[from] InvalidCity),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Fare(#[from] InvalidFare),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Load a timetable from any CSV source.
///
/// # Examples
///
/// ```
/// use trip_planner::timetable::load_csv;
///
/// let data = "\
/// Route ID,Departure City,Arrival City,Departure Time,Arrival Time,Train Type,Days of Operation,First Class,Second Class
/// R1,Paris,Lyon,08:00,10:00,TGV,Mon-Fri,50,30
/// ";
/// let timetable = load_csv(data.as_bytes()).unwrap();
/// assert_eq!(timetable.len(), 1);
/// assert_eq!(timetable.all()[0].days().as_str(), "Mon, Tue, Wed, Thu, Fri");
/// ```
pub fn load_csv<R: io::Read>(reader: R) -> Result<Timetable, LoadError> {
    read_records(reader_builder().from_reader(reader))
}

/// Load a timetable from a CSV file.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<Timetable, LoadError> {
    let path = path.as_ref();
    let reader = reader_builder().from_path(path)?;
    info!(path = %path.display(), "loading timetable");
    read_records(reader)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Timetable, LoadError> {
    let mut records = Vec::new();
    let mut seen: HashSet<RouteId> = HashSet::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let fields = result?;
        let line = fields.position().map_or(0, |p| p.line());

        match parse_row(&fields) {
            Ok(record) => {
                if seen.insert(record.route_id().clone()) {
                    records.push(record);
                } else {
                    warn!(line, route_id = %record.route_id(), "skipping duplicate route");
                    skipped += 1;
                }
            }
            Err(e) => {
                warn!(line, error = %e, "skipping invalid timetable row");
                skipped += 1;
            }
        }
    }

    info!(connections = records.len(), skipped, "timetable loaded");

    Ok(Timetable::new(records)?)
}

fn parse_row(fields: &StringRecord) -> Result<ConnectionRecord, RowError> {
    if fields.len() < FIELD_COUNT {
        return Err(RowError::MissingFields(fields.len()));
    }

    let route_id = RouteId::new(field(fields, 0))?;
    let departure_city = City::parse(field(fields, 1))?;
    let arrival_city = City::parse(field(fields, 2))?;
    let departure_time = ClockTime::parse(field(fields, 3))?;
    // Arrival may carry a day offset, e.g. "08:15 (+1d)"
    let arrival = field(fields, 4).split_whitespace().next().unwrap_or("");
    let arrival_time = ClockTime::parse(arrival)?;
    let first_class = Fare::parse(field(fields, 7))?;
    let second_class = Fare::parse(field(fields, 8))?;

    let record = ConnectionRecord::new(
        route_id,
        departure_city,
        arrival_city,
        departure_time,
        arrival_time,
    )?
    .with_train_type(field(fields, 5))
    .with_days(DaysOfOperation::parse(field(fields, 6)))
    .with_fares(first_class, second_class);

    Ok(record)
}

fn field(fields: &StringRecord, index: usize) -> &str {
    fields.get(index).unwrap_or("")
}
