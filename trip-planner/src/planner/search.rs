//! Itinerary path search.
//!
//! Enumerates direct, two-leg and three-leg itineraries over the timetable
//! by nested scans. The timetable is small and static, so exhaustive
//! enumeration is fast enough and keeps result order deterministic
//! (timetable order of the first leg, then the second, then the third).

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ConnectionRecord, Itinerary, ItineraryBuilder};
use crate::timetable::Timetable;

use super::filter::SearchFilter;
use super::results::ResultSet;

/// Find every itinerary matching `filter`.
///
/// Each leg of every itinerary passes the filter's attribute criteria. The
/// first leg departs from the filter's departure city and the last leg
/// arrives at its arrival city. A filter missing either endpoint finds
/// nothing.
///
/// Multi-leg paths never return to the origin, and a three-leg path never
/// revisits the first intermediate city. Direct results are kept as found;
/// indirect results are deduplicated by their leg sequence before an
/// identifier is issued, so identifiers stay contiguous.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{City, ClockTime, ConnectionRecord, ItineraryBuilder, RouteId};
/// use trip_planner::planner::{SearchFilter, search};
/// use trip_planner::timetable::Timetable;
///
/// let conn = |id: &str, from: &str, to: &str| {
///     ConnectionRecord::new(
///         RouteId::new(id).unwrap(),
///         City::parse(from).unwrap(),
///         City::parse(to).unwrap(),
///         ClockTime::parse("08:00").unwrap(),
///         ClockTime::parse("10:00").unwrap(),
///     )
///     .unwrap()
/// };
/// let timetable = Timetable::new(vec![
///     conn("R1", "Paris", "Lyon"),
///     conn("R2", "Lyon", "Nice"),
/// ])
/// .unwrap();
///
/// let filter = SearchFilter::between(City::parse("Paris").unwrap(), City::parse("Nice").unwrap());
/// let results = search(&timetable, &filter, &mut ItineraryBuilder::new());
///
/// assert!(results.direct().is_empty());
/// assert_eq!(results.indirect().len(), 1);
/// ```
pub fn search(
    timetable: &Timetable,
    filter: &SearchFilter,
    builder: &mut ItineraryBuilder,
) -> ResultSet {
    let eligible: Vec<&Arc<ConnectionRecord>> =
        timetable.iter().filter(|leg| filter.accepts(leg)).collect();

    let mut direct = Vec::new();
    for &leg in &eligible {
        if filter.starts_at(leg.departure_city()) && filter.ends_at(leg.arrival_city()) {
            push_built(&mut direct, builder, vec![leg.clone()]);
        }
    }

    let mut indirect: Vec<Itinerary> = Vec::new();

    // Two legs
    for &l1 in &eligible {
        if !filter.starts_at(l1.departure_city()) {
            continue;
        }
        for &l2 in &eligible {
            if l2.departure_city() == l1.arrival_city()
                && filter.ends_at(l2.arrival_city())
                && l2.arrival_city() != l1.departure_city()
                && l2.departure_city() != l1.departure_city()
            {
                push_unique(&mut indirect, builder, vec![l1.clone(), l2.clone()]);
            }
        }
    }

    // Three legs
    for &l1 in &eligible {
        if !filter.starts_at(l1.departure_city()) {
            continue;
        }
        for &l2 in &eligible {
            if l2.departure_city() != l1.arrival_city()
                || l2.arrival_city() == l1.departure_city()
                || l2.departure_city() == l1.departure_city()
            {
                continue;
            }
            for &l3 in &eligible {
                if l3.departure_city() == l2.arrival_city()
                    && filter.ends_at(l3.arrival_city())
                    && l3.arrival_city() != l1.departure_city()
                    && l3.arrival_city() != l1.arrival_city()
                    && l3.departure_city() != l1.departure_city()
                {
                    push_unique(
                        &mut indirect,
                        builder,
                        vec![l1.clone(), l2.clone(), l3.clone()],
                    );
                }
            }
        }
    }

    debug!(
        eligible = eligible.len(),
        direct = direct.len(),
        indirect = indirect.len(),
        "itinerary search complete"
    );

    ResultSet::new(direct, indirect)
}

/// Append a multi-leg itinerary unless one over the same legs exists.
fn push_unique(
    found: &mut Vec<Itinerary>,
    builder: &mut ItineraryBuilder,
    legs: Vec<Arc<ConnectionRecord>>,
) {
    if found.iter().any(|it| it.has_legs(&legs)) {
        return;
    }
    push_built(found, builder, legs);
}

fn push_built(
    found: &mut Vec<Itinerary>,
    builder: &mut ItineraryBuilder,
    legs: Vec<Arc<ConnectionRecord>>,
) {
    let built = builder.build(legs);
    debug_assert!(
        built.is_ok(),
        "search produced an invalid leg sequence: {:?}",
        built.as_ref().err()
    );
    if let Ok(itinerary) = built {
        found.push(itinerary);
    }
}
