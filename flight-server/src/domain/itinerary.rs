//! Itinerary type.
//!
//! An `Itinerary` is one priced option in a search response: an outbound leg
//! and, for round trips, a return leg.

use super::{DomainError, Leg, Price};

/// One priced travel option.
///
/// # Invariants
///
/// - At least one leg
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    id: String,
    price: Price,
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Construct an itinerary from its legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty.
    pub fn new(id: impl Into<String>, price: Price, legs: Vec<Leg>) -> Result<Self, DomainError> {
        let id = id.into();
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary(id));
        }
        Ok(Itinerary { id, price, legs })
    }

    /// Returns the upstream itinerary id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the price.
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the first (outbound) leg.
    ///
    /// This is the leg every filter, ranking and duration facet looks at.
    pub fn outbound(&self) -> &Leg {
        // Safe: validated non-empty at construction
        &self.legs[0]
    }

    /// Returns the return leg for round trips.
    pub fn inbound(&self) -> Option<&Leg> {
        self.legs.get(1)
    }

    /// Returns true if this itinerary has a return leg.
    pub fn is_round_trip(&self) -> bool {
        self.inbound().is_some()
    }
}
