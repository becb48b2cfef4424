//! Search configuration.

use crate::domain::Iata;

/// Configuration parameters for a round-trip search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Airport every itinerary must start from and return to.
    pub origin: Iata,

    /// Minimum nights per intermediate stop. Zero switches the stay rule
    /// to connection mode (a 2-hour minimum gap instead of a nights range).
    pub min_nights: u32,

    /// Maximum nights per intermediate stop. Ignored when `min_nights`
    /// is zero.
    pub max_nights: u32,

    /// Maximum number of flights in one itinerary. Values below 2 admit
    /// no itinerary at all (a trip must leave and come back).
    pub max_flights: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(origin: Iata, min_nights: u32, max_nights: u32, max_flights: usize) -> Self {
        Self {
            origin,
            min_nights,
            max_nights,
            max_flights,
        }
    }
}
