//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from loading and web errors.

use super::City;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A connection record failed validation
    #[error("invalid connection: {0}")]
    InvalidConnection(&'static str),

    /// Consecutive legs don't share a city
    #[error("legs do not connect: arrival at {0} but next departure from {1}")]
    LegsNotConnected(City, City),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Itinerary has more legs than the planner supports
    #[error("itinerary has {0} legs (at most {max} supported)", max = super::MAX_LEGS)]
    TooManyLegs(usize),
}
