//! Itinerary ranking.
//!
//! Each sort mode orders by one ascending key taken from the price and the
//! outbound leg. Sorting is stable: itineraries with equal keys keep their
//! incoming order.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Itinerary;

/// Weight applied to outbound duration (minutes) in the best score.
pub const DURATION_WEIGHT: f64 = 0.5;

/// Penalty added per outbound stop in the best score.
pub const STOP_PENALTY: f64 = 1000.0;

/// How to order a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Blend of price, duration and stops (see [`best_score`])
    #[default]
    Best,
    /// Lowest price first
    Cheapest,
    /// Shortest outbound leg first
    Fastest,
    /// Earliest outbound departure instant first
    Earliest,
}

impl SortMode {
    /// All modes.
    pub const ALL: [SortMode; 4] = [
        SortMode::Best,
        SortMode::Cheapest,
        SortMode::Fastest,
        SortMode::Earliest,
    ];

    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Best => "best",
            SortMode::Cheapest => "cheapest",
            SortMode::Fastest => "fastest",
            SortMode::Earliest => "earliest",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode: {0}")]
pub struct UnknownSortMode(String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownSortMode(s.to_string()))
    }
}

/// Composite score used by [`SortMode::Best`]; lower is better.
///
/// `price + 0.5 * duration_mins + 1000 * stop_count`, computed on the
/// outbound leg.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use flight_server::domain::{Airport, AirportCode, Itinerary, Leg, Price};
/// use flight_server::results::best_score;
///
/// let departure = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let leg = Leg {
///     id: "out".into(),
///     origin: Airport::new(AirportCode::parse("EZE").unwrap(), "Ezeiza"),
///     destination: Airport::new(AirportCode::parse("SCL").unwrap(), "Santiago"),
///     duration_mins: 200,
///     stop_count: 1,
///     departure,
///     departure_offset: None,
///     arrival: departure + chrono::Duration::minutes(200),
///     marketing_carriers: vec![],
///     segments: vec![],
/// };
/// let it = Itinerary::new("A", Price::new(300.0, "$300").unwrap(), vec![leg]).unwrap();
///
/// assert_eq!(best_score(&it), 1400.0);
/// ```
pub fn best_score(itinerary: &Itinerary) -> f64 {
    let leg = itinerary.outbound();
    itinerary.price().raw()
        + DURATION_WEIGHT * f64::from(leg.duration_mins)
        + STOP_PENALTY * f64::from(leg.stop_count)
}

fn get<T: Borrow<Itinerary>>(item: &T) -> &Itinerary {
    <T as Borrow<Itinerary>>::borrow(item)
}

/// Rank itineraries by the given mode.
///
/// Works on owned itineraries or references. Returns the same elements,
/// best first.
pub fn rank_itineraries<T: Borrow<Itinerary>>(mut itineraries: Vec<T>, mode: SortMode) -> Vec<T> {
    match mode {
        SortMode::Best => {
            itineraries.sort_by(|a, b| best_score(get(a)).total_cmp(&best_score(get(b))))
        }
        SortMode::Cheapest => itineraries.sort_by(|a, b| {
            get(a)
                .price()
                .raw()
                .total_cmp(&get(b).price().raw())
        }),
        SortMode::Fastest => itineraries.sort_by_key(|it| get(it).outbound().duration_mins),
        SortMode::Earliest => itineraries.sort_by_key(|it| get(it).outbound().departure_instant()),
    }

    itineraries
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::results::fixtures::{date, itinerary};
    use chrono::NaiveTime;
    use proptest::prelude::*;

    /// Coarse values so ties are common.
    fn itinerary_strategy() -> impl Strategy<Value = Itinerary> {
        (0u32..10_000, 0u32..6, 0u32..4, 0u32..3, 0u32..6, -2i32..3).prop_map(
            |(id, price, stops, duration, hour, offset)| {
                let when = date().and_time(NaiveTime::from_hms_opt(hour * 4, 0, 0).unwrap());
                itinerary(&format!("IT{id}"))
                    .price(f64::from(price) * 50.0)
                    .stops(stops)
                    .duration(60 + duration * 30)
                    .departs_at(when)
                    .offset_hours(offset * 2)
                    .build()
            },
        )
    }

    fn mode_strategy() -> impl Strategy<Value = SortMode> {
        prop::sample::select(SortMode::ALL.to_vec())
    }

    fn key(it: &Itinerary, mode: SortMode) -> f64 {
        match mode {
            SortMode::Best => best_score(it),
            SortMode::Cheapest => it.price().raw(),
            SortMode::Fastest => f64::from(it.outbound().duration_mins),
            SortMode::Earliest => it.outbound().departure_instant().and_utc().timestamp() as f64,
        }
    }

    proptest! {
        #[test]
        fn ranked_is_sorted(
            xs in prop::collection::vec(itinerary_strategy(), 0..20),
            mode in mode_strategy(),
        ) {
            let ranked = rank_itineraries(xs, mode);
            for window in ranked.windows(2) {
                prop_assert!(key(&window[0], mode) <= key(&window[1], mode));
            }
        }

        #[test]
        fn ranking_preserves_elements(
            xs in prop::collection::vec(itinerary_strategy(), 0..20),
            mode in mode_strategy(),
        ) {
            let mut before: Vec<String> = xs.iter().map(|it| it.id().to_string()).collect();
            let ranked = rank_itineraries(xs, mode);
            let mut after: Vec<String> = ranked.iter().map(|it| it.id().to_string()).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn ranking_twice_equals_once(
            xs in prop::collection::vec(itinerary_strategy(), 0..20),
            mode in mode_strategy(),
        ) {
            let once = rank_itineraries(xs, mode);
            let twice = rank_itineraries(once.clone(), mode);
            prop_assert_eq!(once, twice);
        }

        /// Equal keys keep their incoming relative order
        #[test]
        fn ranking_is_stable(
            xs in prop::collection::vec(itinerary_strategy(), 0..20),
            mode in mode_strategy(),
        ) {
            let refs: Vec<&Itinerary> = xs.iter().collect();
            let ranked = rank_itineraries(refs, mode);
            let index = |target: &Itinerary| {
                xs.iter().position(|x| std::ptr::eq(x, target)).unwrap()
            };
            for window in ranked.windows(2) {
                if key(window[0], mode) == key(window[1], mode) {
                    prop_assert!(index(window[0]) < index(window[1]));
                }
            }
        }
    }
}
