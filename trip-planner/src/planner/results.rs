//! Search results and their orderings.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Itinerary, ItineraryId};

/// Orderings offered for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    DurationAscending,
    DurationDescending,
    PriceAscending,
    PriceDescending,
}

/// Error parsing a `SortOrder`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}' (expected duration_asc, duration_desc, price_asc or price_desc)")]
pub struct InvalidSortOrder(String);

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duration_asc" | "duration" => Ok(SortOrder::DurationAscending),
            "duration_desc" => Ok(SortOrder::DurationDescending),
            "price_asc" | "price" => Ok(SortOrder::PriceAscending),
            "price_desc" => Ok(SortOrder::PriceDescending),
            _ => Err(InvalidSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::DurationAscending => "duration_asc",
            SortOrder::DurationDescending => "duration_desc",
            SortOrder::PriceAscending => "price_asc",
            SortOrder::PriceDescending => "price_desc",
        };
        f.write_str(s)
    }
}

/// Itineraries found by one search, split into direct and indirect.
///
/// Membership is fixed once the search completes; only the order changes.
/// All sorts are stable and reorder the two sequences independently.
/// "Price" always means the total second-class fare.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    direct: Vec<Itinerary>,
    indirect: Vec<Itinerary>,
}

impl ResultSet {
    pub fn new(direct: Vec<Itinerary>, indirect: Vec<Itinerary>) -> Self {
        Self { direct, indirect }
    }

    /// Single-leg itineraries.
    pub fn direct(&self) -> &[Itinerary] {
        &self.direct
    }

    /// Two- and three-leg itineraries.
    pub fn indirect(&self) -> &[Itinerary] {
        &self.indirect
    }

    /// Iterate over direct itineraries, then indirect ones.
    pub fn iter(&self) -> impl Iterator<Item = &Itinerary> {
        self.direct.iter().chain(self.indirect.iter())
    }

    pub fn len(&self) -> usize {
        self.direct.len() + self.indirect.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.indirect.is_empty()
    }

    /// Find an itinerary by identifier in either sequence.
    pub fn itinerary_by_id(&self, id: &ItineraryId) -> Option<&Itinerary> {
        self.iter().find(|it| it.id() == id)
    }

    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::DurationAscending => self.sort_by_duration_ascending(),
            SortOrder::DurationDescending => self.sort_by_duration_descending(),
            SortOrder::PriceAscending => self.sort_by_price_ascending(),
            SortOrder::PriceDescending => self.sort_by_price_descending(),
        }
    }

    pub fn sort_by_duration_ascending(&mut self) {
        for list in [&mut self.direct, &mut self.indirect] {
            list.sort_by_key(|it| it.total_duration());
        }
    }

    pub fn sort_by_duration_descending(&mut self) {
        for list in [&mut self.direct, &mut self.indirect] {
            list.sort_by(|a, b| b.total_duration().cmp(&a.total_duration()));
        }
    }

    pub fn sort_by_price_ascending(&mut self) {
        for list in [&mut self.direct, &mut self.indirect] {
            list.sort_by_key(|it| it.total_second_class());
        }
    }

    pub fn sort_by_price_descending(&mut self) {
        for list in [&mut self.direct, &mut self.indirect] {
            list.sort_by(|a, b| b.total_second_class().cmp(&a.total_second_class()));
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{City, ClockTime, ConnectionRecord, Fare, ItineraryBuilder, RouteId};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn build_set(specs: &[(u32, u32, u64)]) -> ResultSet {
        let mut builder = ItineraryBuilder::new();
        let direct = specs
            .iter()
            .enumerate()
            .map(|(i, &(dep_h, len_m, price))| {
                let dep = ClockTime::from_hm(dep_h, 0).unwrap();
                let arr_total = dep_h * 60 + len_m;
                let arr = ClockTime::from_hm((arr_total / 60) % 24, arr_total % 60).unwrap();
                let conn = ConnectionRecord::new(
                    RouteId::new(&format!("R{i}")).unwrap(),
                    City::parse("A").unwrap(),
                    City::parse("B").unwrap(),
                    dep,
                    arr,
                )
                .unwrap()
                .with_fares(Fare::ZERO, Fare::from_cents(price));
                builder.build(vec![Arc::new(conn)]).unwrap()
            })
            .collect();
        ResultSet::new(direct, vec![])
    }

    fn specs() -> impl Strategy<Value = Vec<(u32, u32, u64)>> {
        prop::collection::vec((0u32..24, 1u32..600, 0u64..5), 0..12)
    }

    proptest! {
        #[test]
        fn duration_sorts_are_ordered(specs in specs()) {
            let mut rs = build_set(&specs);

            rs.sort_by_duration_ascending();
            for w in rs.direct().windows(2) {
                prop_assert!(w[0].total_duration() <= w[1].total_duration());
            }

            rs.sort_by_duration_descending();
            for w in rs.direct().windows(2) {
                prop_assert!(w[0].total_duration() >= w[1].total_duration());
            }
        }

        /// Equal prices keep their relative order from before the sort
        #[test]
        fn price_sort_is_stable(specs in specs()) {
            let mut rs = build_set(&specs);
            let before: Vec<ItineraryId> = rs.direct().iter().map(|it| it.id().clone()).collect();

            rs.sort_by_price_ascending();

            for w in rs.direct().windows(2) {
                prop_assert!(w[0].total_second_class() <= w[1].total_second_class());
                if w[0].total_second_class() == w[1].total_second_class() {
                    let i = before.iter().position(|id| id == w[0].id());
                    let j = before.iter().position(|id| id == w[1].id());
                    prop_assert!(i < j);
                }
            }
        }

        #[test]
        fn sorting_keeps_membership(specs in specs()) {
            let mut rs = build_set(&specs);
            let mut before: Vec<ItineraryId> = rs.iter().map(|it| it.id().clone()).collect();

            rs.sort(SortOrder::PriceDescending);

            let mut after: Vec<ItineraryId> = rs.iter().map(|it| it.id().clone()).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
