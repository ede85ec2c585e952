//! Sky Scrapper flight search payloads.
//!
//! The upstream search returns itineraries as camelCase JSON. This module
//! holds the wire types and the conversion into validated domain types.
//! Fetching is someone else's job; we only receive payloads.

mod convert;
mod types;

#[cfg(test)]
pub(crate) mod sample;

pub use convert::{ConversionError, convert_itinerary, convert_search_response};
pub use types::{
    CarrierDto, CarriersDto, FlightSearchResponse, ItineraryDto, LegDto, PlaceDto, PriceDto,
    SearchData, SegmentDto, SegmentPlaceDto,
};
