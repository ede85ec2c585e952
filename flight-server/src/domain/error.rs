//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from wire-format and HTTP errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no legs
    #[error("itinerary {0} must have at least one leg")]
    EmptyItinerary(String),

    /// Price amount is NaN or infinite
    #[error("price must be a finite amount, got {0}")]
    NonFinitePrice(f64),

    /// Price amount is below zero
    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),
}
