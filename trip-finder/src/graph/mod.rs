//! Flight graph: airports and the one-way flights between them.
//!
//! The graph is an adjacency structure built once at load time and never
//! mutated afterwards, so it can be shared across concurrent searches
//! behind an `Arc` without locking.

mod loader;

pub use loader::{LoadError, load_graph};

use std::collections::HashMap;

use crate::domain::{Flight, Iata};

/// Immutable adjacency structure: origin airport to its outgoing flights.
///
/// Within each origin, flights keep the order they were supplied in.
/// The search walks outgoing lists in stored order, which makes
/// enumeration deterministic for a fixed input.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    flights_by_origin: HashMap<Iata, Vec<Flight>>,
}

impl FlightGraph {
    /// Build a graph from a collection of flights, grouping by origin and
    /// preserving input order within each group.
    pub fn from_flights<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        let mut flights_by_origin: HashMap<Iata, Vec<Flight>> = HashMap::new();
        for flight in flights {
            flights_by_origin
                .entry(flight.origin)
                .or_default()
                .push(flight);
        }
        FlightGraph { flights_by_origin }
    }

    /// Returns the outgoing flights of an airport, in stored order.
    ///
    /// Unknown airports have no outgoing flights.
    pub fn outgoing(&self, airport: &Iata) -> &[Flight] {
        self.flights_by_origin
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of airports with at least one outgoing flight.
    pub fn airport_count(&self) -> usize {
        self.flights_by_origin.len()
    }

    /// Returns the total number of flights.
    pub fn flight_count(&self) -> usize {
        self.flights_by_origin.values().map(Vec::len).sum()
    }

    /// Returns true if the graph holds no flights at all.
    pub fn is_empty(&self) -> bool {
        self.flights_by_origin.is_empty()
    }
}
