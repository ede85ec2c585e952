//! Derived result views.
//!
//! A `Snapshot` is one search's itinerary set together with the facets
//! derived from it. A `ResultView` is what the caller renders for the
//! current filter selection and sort mode.

use tracing::debug;

use super::facets::Facets;
use super::filter::apply;
use super::rank::{SortMode, rank_itineraries};
use super::spec::FilterSpec;
use crate::domain::Itinerary;

/// An immutable itinerary set and its facets.
#[derive(Debug, Clone)]
pub struct Snapshot {
    itineraries: Vec<Itinerary>,
    facets: Facets,
}

impl Snapshot {
    /// Take ownership of a search's itineraries and derive their facets.
    pub fn new(itineraries: Vec<Itinerary>) -> Self {
        let facets = Facets::derive(&itineraries);
        Self {
            itineraries,
            facets,
        }
    }

    /// Returns the itineraries in upstream order.
    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// Returns the facets derived at construction.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Returns the number of itineraries.
    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    /// Returns true if the search found nothing.
    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    /// Derive the view for a filter selection and sort mode.
    pub fn view(&self, spec: &FilterSpec, sort: SortMode) -> ResultView<'_> {
        ResultView::derive(&self.itineraries, &self.facets, spec, sort)
    }
}

/// Filtered and ranked results for one filter selection.
#[derive(Debug, Clone)]
pub struct ResultView<'a> {
    /// Sort mode the itineraries are ranked by
    pub sort: SortMode,
    /// The selection actually applied, resolved against the facets
    pub spec: FilterSpec,
    /// Number of itineraries before filtering
    pub total: usize,
    /// Matching itineraries, best first
    pub itineraries: Vec<&'a Itinerary>,
    /// Lowest price among the matches
    pub cheapest_price: Option<f64>,
}

impl<'a> ResultView<'a> {
    /// Filter then rank an itinerary set.
    ///
    /// The selection is first resolved with [`FilterSpec::effective`], so
    /// the duration ceiling never exceeds the longest observed leg.
    pub fn derive(
        itineraries: &'a [Itinerary],
        facets: &Facets,
        spec: &FilterSpec,
        sort: SortMode,
    ) -> Self {
        let spec = spec.effective(facets);

        let matched = if itineraries.is_empty() {
            Vec::new()
        } else {
            rank_itineraries(apply(itineraries, &spec), sort)
        };

        let cheapest_price = matched
            .iter()
            .map(|it| it.price().raw())
            .min_by(f64::total_cmp);

        debug!(
            total = itineraries.len(),
            matched = matched.len(),
            %sort,
            "derived result view"
        );

        Self {
            sort,
            spec,
            total: itineraries.len(),
            itineraries: matched,
            cheapest_price,
        }
    }

    /// Returns the number of matching itineraries.
    pub fn matched(&self) -> usize {
        self.itineraries.len()
    }
}
