//! Domain types for flight search results.
//!
//! This module contains the validated model the result pipeline works on.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod airport;
mod carrier;
mod error;
mod itinerary;
mod leg;
mod price;
mod time;

pub use airport::{Airport, AirportCode, InvalidAirportCode};
pub use carrier::Carrier;
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::{FlightSegment, InvalidStopClass, Leg, SegmentPlace, StopClass};
pub use price::Price;
pub use time::{DepartureWindow, TimestampError, parse_timestamp, parse_timestamp_with_offset};
