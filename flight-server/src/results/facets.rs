//! Facet derivation.
//!
//! Facets describe what the current itinerary set offers to filter on:
//! which airlines appear and how long the longest outbound leg is.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::Itinerary;

/// Duration ceiling used before any itineraries exist (24 hours).
pub const DEFAULT_MAX_DURATION_MINS: u32 = 1440;

/// Filterable dimensions derived from one itinerary set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct airline names, ascending
    pub airlines: Vec<String>,
    /// Longest outbound leg in minutes
    pub max_duration_mins: u32,
}

impl Facets {
    /// Derive facets for an itinerary set.
    pub fn derive(itineraries: &[Itinerary]) -> Self {
        Self {
            airlines: distinct_airlines(itineraries),
            max_duration_mins: max_observed_duration(itineraries),
        }
    }
}

impl Default for Facets {
    fn default() -> Self {
        Self {
            airlines: Vec::new(),
            max_duration_mins: DEFAULT_MAX_DURATION_MINS,
        }
    }
}

/// Collect the airline of every leg of every itinerary.
///
/// Unlike filtering, this scans all legs, so a return-only airline still
/// shows up. Carriers with an empty name are skipped. Returns names
/// deduplicated in ascending order.
pub fn distinct_airlines<'a, I>(itineraries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    let names: BTreeSet<&str> = itineraries
        .into_iter()
        .flat_map(|it| it.legs())
        .map(|leg| leg.airline_name())
        .filter(|name| !name.is_empty())
        .collect();

    names.into_iter().map(str::to_string).collect()
}

/// Longest outbound-leg duration in minutes.
///
/// Returns [`DEFAULT_MAX_DURATION_MINS`] for an empty set.
pub fn max_observed_duration<'a, I>(itineraries: I) -> u32
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    itineraries
        .into_iter()
        .map(|it| it.outbound().duration_mins)
        .max()
        .unwrap_or(DEFAULT_MAX_DURATION_MINS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::fixtures::itinerary;

    #[test]
    fn empty_input() {
        let none: Vec<Itinerary> = vec![];
        assert!(distinct_airlines(&none).is_empty());
        assert_eq!(max_observed_duration(&none), 1440);
        assert_eq!(Facets::derive(&none), Facets::default());
    }

    #[test]
    fn airlines_sorted_and_deduplicated() {
        let xs = vec![
            itinerary("a").airline("LATAM").build(),
            itinerary("b").airline("Iberia").build(),
            itinerary("c").airline("LATAM").build(),
            itinerary("d").airline("Aerolineas Argentinas").build(),
        ];

        assert_eq!(
            distinct_airlines(&xs),
            vec!["Aerolineas Argentinas", "Iberia", "LATAM"]
        );
    }

    #[test]
    fn airlines_include_return_legs() {
        let xs = vec![itinerary("a").airline("Iberia").returning_with("Air Europa").build()];

        assert_eq!(distinct_airlines(&xs), vec!["Air Europa", "Iberia"]);
    }

    #[test]
    fn unnamed_carriers_skipped() {
        let xs = vec![
            itinerary("a").airline("").build(),
            itinerary("b").airline("Iberia").build(),
        ];

        assert_eq!(distinct_airlines(&xs), vec!["Iberia"]);
    }

    #[test]
    fn max_duration_uses_outbound_leg() {
        let xs = vec![
            itinerary("a").duration(300).build(),
            itinerary("b").duration(845).build(),
            itinerary("c").duration(90).build(),
        ];

        assert_eq!(max_observed_duration(&xs), 845);
    }

    #[test]
    fn max_duration_may_exceed_default() {
        let xs = vec![itinerary("a").duration(1900).build()];
        assert_eq!(max_observed_duration(&xs), 1900);
    }

    #[test]
    fn derive_combines_both() {
        let xs = vec![
            itinerary("a").airline("LATAM").duration(200).build(),
            itinerary("b").airline("Iberia").duration(600).build(),
        ];

        let facets = Facets::derive(&xs);
        assert_eq!(facets.airlines, vec!["Iberia", "LATAM"]);
        assert_eq!(facets.max_duration_mins, 600);
    }
}
