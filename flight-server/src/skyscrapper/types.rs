//! Sky Scrapper response DTOs.
//!
//! These types map directly to the `searchFlights` JSON response. Fields the
//! upstream sometimes omits are `Option` or defaulted; counts and durations
//! are unsigned so negative values fail deserialization.

use serde::Deserialize;

/// Response from `/flights/searchFlights`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    /// Whether the upstream search succeeded.
    pub status: bool,

    /// Upstream message; a string or a structured error depending on version.
    #[serde(default)]
    pub message: Option<serde_json::Value>,

    /// When the response was generated (epoch millis).
    #[serde(default)]
    pub timestamp: Option<i64>,

    /// Search results. Absent when the search produced nothing.
    #[serde(default)]
    pub data: Option<SearchData>,
}

/// The `data` object of a search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    #[serde(default)]
    pub itineraries: Vec<ItineraryDto>,
}

/// One priced itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDto {
    pub id: String,
    pub price: PriceDto,
    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// Price in the requested currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    /// Numeric amount.
    pub raw: f64,
    /// Display string, e.g. "$1,234".
    #[serde(default)]
    pub formatted: String,
}

/// One direction of travel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub id: String,
    pub origin: PlaceDto,
    pub destination: PlaceDto,
    pub duration_in_minutes: u32,
    pub stop_count: u32,
    /// Local departure time, ISO 8601 without offset.
    pub departure: String,
    /// Local arrival time, ISO 8601 without offset.
    pub arrival: String,
    pub carriers: CarriersDto,
    #[serde(default)]
    pub segments: Vec<SegmentDto>,
}

/// An airport at either end of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    pub id: String,
    #[serde(default)]
    pub entity_id: String,
    pub name: String,
    pub display_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

/// Carriers of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarriersDto {
    #[serde(default)]
    pub marketing: Vec<CarrierDto>,
}

/// An airline descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierDto {
    pub id: i64,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// A flown hop within a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    pub id: String,
    pub origin: SegmentPlaceDto,
    pub destination: SegmentPlaceDto,
    pub departure: String,
    pub arrival: String,
    pub duration_in_minutes: u32,
    pub marketing_carrier: CarrierDto,
    pub operating_carrier: CarrierDto,
}

/// An airport at either end of a segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPlaceDto {
    pub flight_place_id: String,
    pub display_code: String,
    #[serde(default)]
    pub name: String,
}
