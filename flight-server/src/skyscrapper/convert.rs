//! Conversion from Sky Scrapper DTOs to domain types.
//!
//! A payload converts completely or not at all: the first malformed
//! itinerary fails the whole response, naming the itinerary and the problem.

use tracing::debug;

use crate::domain::{
    Airport, AirportCode, Carrier, DomainError, FlightSegment, Itinerary, Leg, Price,
    SegmentPlace, TimestampError, parse_timestamp, parse_timestamp_with_offset,
};

use super::types::{
    CarrierDto, FlightSearchResponse, ItineraryDto, LegDto, PlaceDto, SegmentDto, SegmentPlaceDto,
};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Upstream reported a failed search
    #[error("upstream search failed: {0}")]
    Upstream(String),

    /// Itinerary violates a domain invariant
    #[error("itinerary {itinerary}: {source}")]
    Domain {
        itinerary: String,
        source: DomainError,
    },

    /// Airport display code is not a valid code
    #[error("itinerary {itinerary}: invalid airport code {code:?}")]
    InvalidAirportCode { itinerary: String, code: String },

    /// Departure or arrival can't be parsed
    #[error("itinerary {itinerary}: {source}")]
    InvalidTimestamp {
        itinerary: String,
        source: TimestampError,
    },
}

/// Convert a search response to domain itineraries, in upstream order.
///
/// A successful response without `data` is an empty result, not an error.
pub fn convert_search_response(
    response: &FlightSearchResponse,
) -> Result<Vec<Itinerary>, ConversionError> {
    if !response.status {
        let message = match &response.message {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "no message".to_string(),
        };
        return Err(ConversionError::Upstream(message));
    }

    let dtos = response
        .data
        .as_ref()
        .map(|d| d.itineraries.as_slice())
        .unwrap_or(&[]);

    let itineraries = dtos
        .iter()
        .map(convert_itinerary)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = itineraries.len(), "converted search response");

    Ok(itineraries)
}

/// Convert a single itinerary.
pub fn convert_itinerary(dto: &ItineraryDto) -> Result<Itinerary, ConversionError> {
    let ctx = Ctx(&dto.id);

    let price = Price::new(dto.price.raw, dto.price.formatted.clone()).map_err(|e| ctx.domain(e))?;

    let legs = dto
        .legs
        .iter()
        .map(|leg| convert_leg(ctx, leg))
        .collect::<Result<Vec<_>, _>>()?;

    Itinerary::new(dto.id.clone(), price, legs).map_err(|e| ctx.domain(e))
}

/// The itinerary being converted, for error reporting.
#[derive(Clone, Copy)]
struct Ctx<'a>(&'a str);

impl Ctx<'_> {
    fn domain(self, source: DomainError) -> ConversionError {
        ConversionError::Domain {
            itinerary: self.0.to_string(),
            source,
        }
    }

    fn code(self, code: &str) -> Result<AirportCode, ConversionError> {
        AirportCode::parse(code).map_err(|_| ConversionError::InvalidAirportCode {
            itinerary: self.0.to_string(),
            code: code.to_string(),
        })
    }

    fn timestamp(self, s: &str) -> Result<chrono::NaiveDateTime, ConversionError> {
        parse_timestamp(s).map_err(|source| self.invalid_timestamp(source))
    }

    fn timestamp_with_offset(
        self,
        s: &str,
    ) -> Result<(chrono::NaiveDateTime, Option<chrono::FixedOffset>), ConversionError> {
        parse_timestamp_with_offset(s).map_err(|source| self.invalid_timestamp(source))
    }

    fn invalid_timestamp(self, source: TimestampError) -> ConversionError {
        ConversionError::InvalidTimestamp {
            itinerary: self.0.to_string(),
            source,
        }
    }
}

fn convert_leg(ctx: Ctx<'_>, dto: &LegDto) -> Result<Leg, ConversionError> {
    let segments = dto
        .segments
        .iter()
        .map(|s| convert_segment(ctx, s))
        .collect::<Result<Vec<_>, _>>()?;
    let (departure, departure_offset) = ctx.timestamp_with_offset(&dto.departure)?;

    Ok(Leg {
        id: dto.id.clone(),
        origin: convert_place(ctx, &dto.origin)?,
        destination: convert_place(ctx, &dto.destination)?,
        duration_mins: dto.duration_in_minutes,
        stop_count: dto.stop_count,
        departure,
        departure_offset,
        arrival: ctx.timestamp(&dto.arrival)?,
        marketing_carriers: dto.carriers.marketing.iter().map(convert_carrier).collect(),
        segments,
    })
}

fn convert_place(ctx: Ctx<'_>, dto: &PlaceDto) -> Result<Airport, ConversionError> {
    Ok(Airport {
        id: dto.id.clone(),
        entity_id: dto.entity_id.clone(),
        name: dto.name.clone(),
        code: ctx.code(&dto.display_code)?,
        city: dto.city.clone(),
        country: dto.country.clone(),
    })
}

fn convert_segment_place(
    ctx: Ctx<'_>,
    dto: &SegmentPlaceDto,
) -> Result<SegmentPlace, ConversionError> {
    Ok(SegmentPlace {
        place_id: dto.flight_place_id.clone(),
        code: ctx.code(&dto.display_code)?,
        name: dto.name.clone(),
    })
}

fn convert_segment(ctx: Ctx<'_>, dto: &SegmentDto) -> Result<FlightSegment, ConversionError> {
    Ok(FlightSegment {
        id: dto.id.clone(),
        origin: convert_segment_place(ctx, &dto.origin)?,
        destination: convert_segment_place(ctx, &dto.destination)?,
        departure: ctx.timestamp(&dto.departure)?,
        arrival: ctx.timestamp(&dto.arrival)?,
        duration_mins: dto.duration_in_minutes,
        marketing_carrier: convert_carrier(&dto.marketing_carrier),
        operating_carrier: convert_carrier(&dto.operating_carrier),
    })
}

fn convert_carrier(dto: &CarrierDto) -> Carrier {
    Carrier {
        id: dto.id,
        name: dto.name.clone(),
        logo_url: dto.logo_url.clone().filter(|url| !url.is_empty()),
    }
}
