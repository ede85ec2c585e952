//! Result pipeline for flight searches.
//!
//! Given an itinerary set from one search, this module derives the facets
//! used to populate filter controls, filters the set against the user's
//! current selection, and ranks what survives.
//!
//! Everything here is a pure function of its inputs. The caller owns the
//! current `FilterSpec` and `SortMode` and passes them in on every call.

mod facets;
mod filter;
mod rank;
mod spec;
mod view;

#[cfg(test)]
pub(crate) mod fixtures;

pub use facets::{DEFAULT_MAX_DURATION_MINS, Facets, distinct_airlines, max_observed_duration};
pub use filter::{apply, filter_by_stops, matches};
pub use rank::{DURATION_WEIGHT, STOP_PENALTY, SortMode, UnknownSortMode, best_score, rank_itineraries};
pub use spec::{FilterError, FilterSpec};
pub use view::{ResultView, Snapshot};
