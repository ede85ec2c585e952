//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DepartureWindow, Itinerary, Leg, StopClass};
use crate::results::{DEFAULT_MAX_DURATION_MINS, Facets, FilterError, FilterSpec, ResultView, SortMode};

/// A filter selection as sent by the client.
///
/// Omitted fields take the same defaults as [`FilterSpec::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterRequest {
    /// Allowed stop classes (0, 1, 2)
    pub stops: Vec<StopClass>,

    /// Allowed airlines; empty allows all
    pub airlines: Vec<String>,

    /// Allowed departure windows
    pub times: Vec<DepartureWindow>,

    /// Duration ceiling in minutes
    pub max_duration_mins: u32,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            stops: StopClass::ALL.to_vec(),
            airlines: Vec::new(),
            times: DepartureWindow::ALL.to_vec(),
            max_duration_mins: DEFAULT_MAX_DURATION_MINS,
        }
    }
}

impl TryFrom<FilterRequest> for FilterSpec {
    type Error = FilterError;

    fn try_from(req: FilterRequest) -> Result<Self, Self::Error> {
        FilterSpec::new(req.stops, req.airlines, req.times, req.max_duration_mins)
    }
}

/// Request to derive results for a registered search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsRequest {
    /// Filter selection (defaults to everything)
    #[serde(default)]
    pub filters: Option<FilterRequest>,

    /// Sort mode (defaults to best)
    #[serde(default)]
    pub sort: Option<SortMode>,
}

/// Response to registering a search.
#[derive(Debug, Serialize)]
pub struct CreateSearchResponse {
    /// Id to query results by
    pub search_id: Uuid,

    /// Number of itineraries registered
    pub itinerary_count: usize,

    /// Facets for populating filter controls
    pub facets: Facets,
}

/// Filtered and ranked results.
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    /// Sort mode applied
    pub sort: SortMode,

    /// Itineraries before filtering
    pub total: usize,

    /// Itineraries after filtering
    pub matched: usize,

    /// Lowest matching price
    pub cheapest_price: Option<f64>,

    /// Facets of the whole search
    pub facets: Facets,

    /// Matching itineraries in rank order
    pub itineraries: Vec<ItineraryResult>,
}

impl ResultsResponse {
    /// Build from a derived view and the search's facets.
    pub fn from_view(view: &ResultView<'_>, facets: &Facets) -> Self {
        Self {
            sort: view.sort,
            total: view.total,
            matched: view.matched(),
            cheapest_price: view.cheapest_price,
            facets: facets.clone(),
            itineraries: view
                .itineraries
                .iter()
                .map(|it| ItineraryResult::from_itinerary(it))
                .collect(),
        }
    }
}

/// An itinerary in results.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Upstream itinerary id
    pub id: String,

    /// Price as a number
    pub price: f64,

    /// Price as displayed
    pub formatted_price: String,

    /// Whether a return leg follows the outbound one
    pub round_trip: bool,

    /// Legs in order; outbound first
    pub legs: Vec<LegResult>,
}

impl ItineraryResult {
    /// Convert from a domain itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id().to_string(),
            price: itinerary.price().raw(),
            formatted_price: itinerary.price().formatted().to_string(),
            round_trip: itinerary.is_round_trip(),
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
        }
    }
}

/// A leg in results.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Origin display code
    pub origin: String,

    /// Origin city
    pub origin_city: String,

    /// Destination display code
    pub destination: String,

    /// Destination city
    pub destination_city: String,

    /// Local departure time (YYYY-MM-DDTHH:MM:SS)
    pub departure: String,

    /// Local arrival time
    pub arrival: String,

    /// Duration in minutes
    pub duration_mins: u32,

    /// Number of stops
    pub stop_count: u32,

    /// Airline of the leg
    pub airline: Option<String>,

    /// Airline logo
    pub logo_url: Option<String>,
}

impl LegResult {
    /// Convert from a domain leg.
    pub fn from_leg(leg: &Leg) -> Self {
        let carrier = leg.primary_carrier();
        Self {
            origin: leg.origin.code.to_string(),
            origin_city: leg.origin.city.clone(),
            destination: leg.destination.code.to_string(),
            destination_city: leg.destination.city.clone(),
            departure: leg.departure.format("%Y-%m-%dT%H:%M:%S").to_string(),
            arrival: leg.arrival.format("%Y-%m-%dT%H:%M:%S").to_string(),
            duration_mins: leg.duration_mins,
            stop_count: leg.stop_count,
            airline: carrier.map(|c| c.name.clone()),
            logo_url: carrier.and_then(|c| c.logo_url.clone()),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
