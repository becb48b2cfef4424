//! Round-trip search engine.
//!
//! Depth-bounded backtracking over the flight graph. From every outgoing
//! flight of the origin, the engine grows a branch one flight at a time;
//! at each position it tries every flight that closes the trip back to the
//! origin (emitting a finished itinerary) and every flight that extends the
//! trip to an unvisited airport (recursing). A branch dies by running out
//! of candidates or hitting the flight cutoff.
//!
//! Branch state (path and visited set) is copied on extension, never
//! shared, so backtracking needs no undo step and branches could run on
//! independent workers without touching each other. The only shared state
//! is the cancellation flag and the delivery lock.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::cancel::CancellationToken;
use super::config::SearchConfig;
use super::sink::{Delivery, ResultSink};
use super::stay::is_valid_stay;
use crate::domain::{Flight, Iata, Itinerary};
use crate::graph::FlightGraph;

/// Error from a round-trip search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Invalid search configuration
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// The worker running the search died before reporting a result
    #[error("search worker terminated abnormally")]
    WorkerLost,
}

/// Enumerates all valid round-trip itineraries from a fixed origin.
///
/// The search streams each itinerary to a [`ResultSink`] the moment it is
/// found; nothing is ranked, deduplicated, or held back. Enumeration
/// order follows the graph's stored edge order and is deterministic for a
/// fixed graph.
///
/// The graph is shared read-only, so any number of searches can run
/// against it concurrently.
pub struct ItinerarySearch {
    graph: Arc<FlightGraph>,
    config: SearchConfig,
    cancel: CancellationToken,
}

impl ItinerarySearch {
    /// Create a search over `graph` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRequest`] if `min_nights > 0` and
    /// `max_nights < min_nights`.
    pub fn new(graph: Arc<FlightGraph>, config: SearchConfig) -> Result<Self, SearchError> {
        if config.min_nights > 0 && config.max_nights < config.min_nights {
            return Err(SearchError::InvalidRequest(format!(
                "max_nights ({}) must be at least min_nights ({})",
                config.max_nights, config.min_nights
            )));
        }

        Ok(Self {
            graph,
            config,
            cancel: CancellationToken::new(),
        })
    }

    /// Returns a token that can stop this search from another thread.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Request that the search stop at its next poll point.
    pub fn request_stop(&self) {
        self.cancel.request_stop();
    }

    /// Returns the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search to exhaustion or cancellation, streaming every
    /// itinerary to `sink`. Returns the number of itineraries delivered.
    ///
    /// Deliveries are serialized; `sink` never sees concurrent calls. A
    /// sink failure loses that one result and the run continues.
    pub fn run<S: ResultSink>(&self, sink: &mut S) -> usize {
        let delivery = Delivery::new(sink);
        let origin = self.config.origin;
        let first_flights = self.graph.outgoing(&origin);

        info!(
            %origin,
            first_flights = first_flights.len(),
            max_flights = self.config.max_flights,
            "starting round-trip search"
        );

        for first in first_flights {
            if self.cancel.is_stopped() {
                break;
            }
            // A trip opening with a self-loop could never close without
            // revisiting the origin.
            if first.is_self_loop() {
                continue;
            }

            let path = vec![first.clone()];
            let visited = HashSet::from([origin, first.destination]);
            let before = delivery.delivered();
            self.explore(&path, &visited, &delivery);
            debug!(
                via = %first.destination,
                found = delivery.delivered() - before,
                "explored branches for first flight"
            );
        }

        let total = delivery.delivered();
        if self.cancel.is_stopped() {
            info!(total, "search stopped on request");
        } else {
            info!(total, "search complete");
        }
        total
    }

    /// Explore one branch: try every closing flight, then recurse into
    /// every extension. `path` always holds at least the first flight.
    fn explore<S: ResultSink>(
        &self,
        path: &[Flight],
        visited: &HashSet<Iata>,
        delivery: &Delivery<'_, S>,
    ) {
        if self.cancel.is_stopped() || path.len() >= self.config.max_flights {
            return;
        }

        // Safe: every branch starts with one flight
        let last = path.last().unwrap();
        let here = last.destination;

        // Closing moves. Completing a trip does not end the branch:
        // longer itineraries through further stops are still explored.
        if here != self.config.origin {
            for candidate in self.graph.outgoing(&here) {
                if self.cancel.is_stopped() {
                    return;
                }
                if candidate.destination == self.config.origin
                    && candidate.departure > last.arrival
                    && self.stay_ok(last.arrival, candidate.departure)
                {
                    let mut complete = path.to_vec();
                    complete.push(candidate.clone());
                    self.emit(complete, delivery);
                }
            }
        }

        // Extension moves: one more unvisited stop, on a fresh copy of
        // the branch state.
        if path.len() + 1 < self.config.max_flights {
            for next in self.graph.outgoing(&here) {
                if self.cancel.is_stopped() {
                    return;
                }
                if next.destination != self.config.origin
                    && !visited.contains(&next.destination)
                    && next.departure > last.arrival
                    && self.stay_ok(last.arrival, next.departure)
                {
                    let mut extended = path.to_vec();
                    extended.push(next.clone());
                    let mut extended_visited = visited.clone();
                    extended_visited.insert(next.destination);
                    self.explore(&extended, &extended_visited, delivery);
                }
            }
        }
    }

    fn stay_ok(&self, arrival: i64, next_departure: i64) -> bool {
        is_valid_stay(
            arrival,
            next_departure,
            self.config.min_nights,
            self.config.max_nights,
        )
    }

    /// Assemble and deliver one finished path.
    fn emit<S: ResultSink>(&self, flights: Vec<Flight>, delivery: &Delivery<'_, S>) {
        if self.cancel.is_stopped() {
            return;
        }
        match Itinerary::new(self.config.origin, flights) {
            Ok(itinerary) => delivery.deliver(&itinerary),
            Err(error) => debug!(%error, "discarding malformed candidate path"),
        }
    }
}
