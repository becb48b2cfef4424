//! Domain error types.
//!
//! These errors represent invariant violations caught when assembling
//! domain values. They are distinct from load/IO errors.

use super::Iata;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// An itinerary needs at least an outbound and a return flight
    #[error("itinerary must contain at least two flights")]
    TooFewFlights,

    /// First flight does not leave from, or last flight does not return to,
    /// the trip origin
    #[error("itinerary does not start and end at {0}")]
    NotRoundTrip(Iata),

    /// Consecutive flights don't share an airport
    #[error("flights do not connect: arrived at {0} but next departs from {1}")]
    Disconnected(Iata, Iata),

    /// A flight departs at or before the previous flight's arrival
    #[error("flight {key} departs before the previous arrival")]
    OutOfOrder { key: String },

    /// An intermediate stop appears twice, or coincides with the origin
    #[error("airport {0} is visited more than once")]
    RevisitedAirport(Iata),
}
