//! Itinerary price.

use super::DomainError;

/// A price in the search's reference currency.
///
/// Only `raw` takes part in ranking; `formatted` is the upstream's display
/// string and is carried through untouched.
///
/// # Invariants
///
/// - `raw` is finite and not negative
/// - `raw` is never `-0.0`
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    raw: f64,
    formatted: String,
}

impl Price {
    /// Construct a price, validating the raw amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::Price;
    ///
    /// let price = Price::new(452.5, "$453").unwrap();
    /// assert_eq!(price.raw(), 452.5);
    ///
    /// assert!(Price::new(f64::NAN, "").is_err());
    /// assert!(Price::new(-1.0, "").is_err());
    /// ```
    pub fn new(raw: f64, formatted: impl Into<String>) -> Result<Self, DomainError> {
        if !raw.is_finite() {
            return Err(DomainError::NonFinitePrice(raw));
        }
        if raw < 0.0 {
            return Err(DomainError::NegativePrice(raw));
        }
        Ok(Self {
            // -0.0 + 0.0 == +0.0
            raw: raw + 0.0,
            formatted: formatted.into(),
        })
    }

    /// Returns the numeric amount.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Returns the display string.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}
