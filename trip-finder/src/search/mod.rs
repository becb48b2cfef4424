//! Round-trip itinerary search.
//!
//! This module implements the core of the system: a depth-bounded
//! backtracking search over the flight graph that enumerates every valid
//! round trip from a fixed origin, streaming each one to a sink as soon
//! as it is found.
//!
//! The search is bounded by a maximum flight count, orders flights
//! chronologically, never revisits an intermediate airport, and applies
//! the stay rule (2-hour connections, or a whole-nights stopover window)
//! between every pair of consecutive flights. It can be stopped
//! cooperatively at any time through a [`CancellationToken`].

mod cancel;
mod config;
mod engine;
mod runner;
mod sink;
mod stay;

pub use cancel::CancellationToken;
pub use config::SearchConfig;
pub use engine::{ItinerarySearch, SearchError};
pub use runner::SearchJob;
pub use sink::{CollectSink, ResultSink, SinkError};
pub use stay::is_valid_stay;
