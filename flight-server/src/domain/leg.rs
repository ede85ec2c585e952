//! Flight leg type.
//!
//! A `Leg` is one direction of travel in an itinerary (outbound or return),
//! possibly made up of several flown segments with stops in between.

use std::fmt;

use chrono::{Duration, FixedOffset, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{Airport, AirportCode, Carrier, DepartureWindow};

/// Stop-count bucket used by the stops filter.
///
/// On the wire the classes are the numbers 0, 1 and 2, where 2 means
/// "two or more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StopClass {
    Nonstop,
    OneStop,
    TwoOrMore,
}

impl StopClass {
    /// All classes, fewest stops first.
    pub const ALL: [StopClass; 3] = [StopClass::Nonstop, StopClass::OneStop, StopClass::TwoOrMore];

    /// Bucket a raw stop count.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::StopClass;
    ///
    /// assert_eq!(StopClass::from_stop_count(0), StopClass::Nonstop);
    /// assert_eq!(StopClass::from_stop_count(1), StopClass::OneStop);
    /// assert_eq!(StopClass::from_stop_count(4), StopClass::TwoOrMore);
    /// ```
    pub fn from_stop_count(stops: u32) -> Self {
        match stops {
            0 => StopClass::Nonstop,
            1 => StopClass::OneStop,
            _ => StopClass::TwoOrMore,
        }
    }

    /// Returns the wire value (0, 1 or 2).
    pub fn as_u8(self) -> u8 {
        match self {
            StopClass::Nonstop => 0,
            StopClass::OneStop => 1,
            StopClass::TwoOrMore => 2,
        }
    }
}

/// Error returned when a stop class wire value is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop class {0}: must be 0, 1 or 2")]
pub struct InvalidStopClass(u8);

impl TryFrom<u8> for StopClass {
    type Error = InvalidStopClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StopClass::Nonstop),
            1 => Ok(StopClass::OneStop),
            2 => Ok(StopClass::TwoOrMore),
            other => Err(InvalidStopClass(other)),
        }
    }
}

impl From<StopClass> for u8 {
    fn from(class: StopClass) -> u8 {
        class.as_u8()
    }
}

impl fmt::Display for StopClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopClass::Nonstop => f.write_str("nonstop"),
            StopClass::OneStop => f.write_str("1 stop"),
            StopClass::TwoOrMore => f.write_str("2+ stops"),
        }
    }
}

/// One end of a flown segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPlace {
    /// Upstream place id
    pub place_id: String,
    /// Display code
    pub code: AirportCode,
    /// Airport name
    pub name: String,
}

/// A single flown hop within a leg.
///
/// Segments are carried through for display; the result pipeline never
/// looks at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSegment {
    pub id: String,
    pub origin: SegmentPlace,
    pub destination: SegmentPlace,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_mins: u32,
    pub marketing_carrier: Carrier,
    pub operating_carrier: Carrier,
}

/// A leg of an itinerary.
///
/// Departure and arrival are local wall-clock times at their respective
/// airports, so arrival may read earlier than departure on westbound
/// flights. `duration_mins` is the authoritative length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    /// Upstream leg id
    pub id: String,
    pub origin: Airport,
    pub destination: Airport,
    /// Total time in the air and at stops
    pub duration_mins: u32,
    /// Number of intermediate stops
    pub stop_count: u32,
    pub departure: NaiveDateTime,
    /// UTC offset of `departure`, when the upstream supplied one
    pub departure_offset: Option<FixedOffset>,
    pub arrival: NaiveDateTime,
    /// Marketing carriers; the first is the airline of the leg
    pub marketing_carriers: Vec<Carrier>,
    pub segments: Vec<FlightSegment>,
}

impl Leg {
    /// Returns the stop class for this leg.
    pub fn stop_class(&self) -> StopClass {
        StopClass::from_stop_count(self.stop_count)
    }

    /// Returns true if this leg has no stops.
    pub fn is_nonstop(&self) -> bool {
        self.stop_count == 0
    }

    /// Returns the first marketing carrier, if any.
    pub fn primary_carrier(&self) -> Option<&Carrier> {
        self.marketing_carriers.first()
    }

    /// Returns the name of the first marketing carrier, or "" if there is none.
    pub fn airline_name(&self) -> &str {
        self.primary_carrier().map_or("", |c| c.name.as_str())
    }

    /// Returns the local departure hour (0-23).
    pub fn departure_hour(&self) -> u32 {
        self.departure.hour()
    }

    /// Returns true if this leg departs within the given window.
    pub fn departs_in(&self, window: DepartureWindow) -> bool {
        window.contains(&self.departure)
    }

    /// Returns the departure as a UTC instant.
    ///
    /// A departure without an offset is taken to already be UTC.
    pub fn departure_instant(&self) -> NaiveDateTime {
        match self.departure_offset {
            Some(offset) => {
                self.departure - Duration::seconds(i64::from(offset.local_minus_utc()))
            }
            None => self.departure,
        }
    }
}
