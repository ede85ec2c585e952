//! Airport code and place types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport display code.
///
/// Display codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_server::domain::AirportCode;
///
/// let eze = AirportCode::parse("EZE").unwrap();
/// assert_eq!(eze.as_str(), "EZE");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("eze").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("EZ").is_err());
/// assert!(AirportCode::parse("EZEE").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An airport at either end of a leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    /// Upstream place identifier (e.g. "EZE")
    pub id: String,
    /// Upstream entity identifier
    pub entity_id: String,
    /// Airport name
    pub name: String,
    /// Display code
    pub code: AirportCode,
    /// City the airport serves
    pub city: String,
    /// Country name
    pub country: String,
}

impl Airport {
    /// Creates an airport with only a code and name; other fields are empty.
    pub fn new(code: AirportCode, name: impl Into<String>) -> Self {
        Self {
            id: code.as_str().to_string(),
            entity_id: String::new(),
            name: name.into(),
            code,
            city: String::new(),
            country: String::new(),
        }
    }
}
