//! Itinerary filtering.
//!
//! Every clause looks at the outbound leg only; return legs are carried
//! through unexamined.

use std::collections::BTreeSet;

use super::spec::FilterSpec;
use crate::domain::{Itinerary, Leg, StopClass};

fn stop_clause(leg: &Leg, stops: &BTreeSet<StopClass>) -> bool {
    stops.contains(&leg.stop_class())
}

fn airline_clause(leg: &Leg, spec: &FilterSpec) -> bool {
    !spec.restricts_airlines() || spec.airlines().contains(leg.airline_name())
}

fn window_clause(leg: &Leg, spec: &FilterSpec) -> bool {
    spec.windows().iter().any(|w| leg.departs_in(*w))
}

fn duration_clause(leg: &Leg, spec: &FilterSpec) -> bool {
    leg.duration_mins <= spec.max_duration_mins()
}

/// Returns true if the itinerary passes every clause of the filter.
pub fn matches(itinerary: &Itinerary, spec: &FilterSpec) -> bool {
    let leg = itinerary.outbound();

    stop_clause(leg, spec.stops())
        && airline_clause(leg, spec)
        && window_clause(leg, spec)
        && duration_clause(leg, spec)
}

/// Filter itineraries, preserving their relative order.
pub fn apply<'a, I>(itineraries: I, spec: &FilterSpec) -> Vec<&'a Itinerary>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    itineraries
        .into_iter()
        .filter(|it| matches(it, spec))
        .collect()
}

/// Filter on stop class alone, preserving relative order.
pub fn filter_by_stops<'a, I>(itineraries: I, stops: &BTreeSet<StopClass>) -> Vec<&'a Itinerary>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    itineraries
        .into_iter()
        .filter(|it| stop_clause(it.outbound(), stops))
        .collect()
}
