//! Departure timestamps and departure-time windows.
//!
//! Upstream timestamps are local wall-clock times at the airport
//! (e.g. "2024-03-15T07:45:00"). Windows are decided on the local hour
//! of departure only.

use std::fmt;
use std::ops::Range;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Error returned when a timestamp can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimestampError {
    input: String,
}

/// Parse an upstream timestamp into a local wall-clock date-time.
///
/// Fractional seconds are accepted. If the string carries a UTC offset the
/// local wall-clock part is kept; use [`parse_timestamp_with_offset`] when
/// the offset matters.
///
/// # Examples
///
/// ```
/// use chrono::Timelike;
/// use flight_server::domain::parse_timestamp;
///
/// let t = parse_timestamp("2024-03-15T07:45:00").unwrap();
/// assert_eq!(t.hour(), 7);
///
/// let t = parse_timestamp("2024-03-15T21:10:00-03:00").unwrap();
/// assert_eq!(t.hour(), 21);
///
/// assert!(parse_timestamp("15/03/2024 07:45").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimestampError> {
    parse_timestamp_with_offset(s).map(|(local, _)| local)
}

/// Parse an upstream timestamp into its local wall-clock part and the UTC
/// offset it carried, if any.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use flight_server::domain::parse_timestamp_with_offset;
///
/// let (_, offset) = parse_timestamp_with_offset("2024-03-15T10:00:00+05:00").unwrap();
/// assert_eq!(offset, FixedOffset::east_opt(5 * 3600));
///
/// let (_, offset) = parse_timestamp_with_offset("2024-03-15T10:00:00").unwrap();
/// assert_eq!(offset, None);
/// ```
pub fn parse_timestamp_with_offset(
    s: &str,
) -> Result<(NaiveDateTime, Option<FixedOffset>), TimestampError> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok((dt, None));
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| (dt.naive_local(), Some(*dt.offset())))
        .map_err(|_| TimestampError {
            input: s.to_string(),
        })
}

/// A departure-time bucket.
///
/// Boundaries are half-open local hours:
///
/// | window | hours |
/// |---|---|
/// | `EarlyMorning` | `[0, 8)` |
/// | `Morning` | `[8, 12)` |
/// | `Afternoon` | `[12, 18)` |
/// | `Evening` | `[18, 24)` |
///
/// # Examples
///
/// ```
/// use flight_server::domain::DepartureWindow;
///
/// assert_eq!(DepartureWindow::for_hour(7), Some(DepartureWindow::EarlyMorning));
/// assert_eq!(DepartureWindow::for_hour(8), Some(DepartureWindow::Morning));
/// assert_eq!(DepartureWindow::for_hour(24), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DepartureWindow {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
}

impl DepartureWindow {
    /// All windows, in order of the day.
    pub const ALL: [DepartureWindow; 4] = [
        DepartureWindow::EarlyMorning,
        DepartureWindow::Morning,
        DepartureWindow::Afternoon,
        DepartureWindow::Evening,
    ];

    /// Returns the half-open range of local hours this window covers.
    pub fn hours(self) -> Range<u32> {
        match self {
            DepartureWindow::EarlyMorning => 0..8,
            DepartureWindow::Morning => 8..12,
            DepartureWindow::Afternoon => 12..18,
            DepartureWindow::Evening => 18..24,
        }
    }

    /// Returns true if the given local hour falls in this window.
    pub fn contains_hour(self, hour: u32) -> bool {
        self.hours().contains(&hour)
    }

    /// Returns true if the timestamp's local hour falls in this window.
    pub fn contains(self, time: &NaiveDateTime) -> bool {
        self.contains_hour(time.hour())
    }

    /// Returns the window containing the given hour, if the hour is valid.
    pub fn for_hour(hour: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.contains_hour(hour))
    }

    /// Returns the wire name (e.g. "early-morning").
    pub fn as_str(self) -> &'static str {
        match self {
            DepartureWindow::EarlyMorning => "early-morning",
            DepartureWindow::Morning => "morning",
            DepartureWindow::Afternoon => "afternoon",
            DepartureWindow::Evening => "evening",
        }
    }
}

impl fmt::Display for DepartureWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
