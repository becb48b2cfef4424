//! Graph file loading.
//!
//! The graph arrives as a JSON object mapping each origin airport to an
//! array of edge records:
//!
//! ```json
//! {
//!   "BGY": [
//!     {"to": "STN", "key": "FR123-0", "departure": 1700000000,
//!      "arrival": 1700007200, "weight": 19.99, "currency": "EUR"}
//!   ]
//! }
//! ```
//!
//! A load either yields a complete graph or fails as a whole: the first
//! unreadable byte, malformed record, or missing field aborts it. No
//! partially loaded graph is ever returned.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use super::FlightGraph;
use crate::domain::{Flight, Iata, InvalidIata};

/// Errors from loading a graph file. All of them are fatal to the load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON is malformed or an edge record is missing a field
    #[error("malformed graph file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An origin key is not a valid IATA code
    #[error("invalid origin airport {code:?}: {source}")]
    InvalidOrigin {
        code: String,
        #[source]
        source: InvalidIata,
    },
}

/// One edge record as stored in the graph file. The record's origin is the
/// enclosing map key.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    to: Iata,
    key: String,
    departure: i64,
    arrival: i64,
    weight: f64,
    currency: String,
}

impl EdgeRecord {
    fn into_flight(self, origin: Iata) -> Flight {
        Flight {
            origin,
            destination: self.to,
            key: self.key,
            departure: self.departure,
            arrival: self.arrival,
            cost: self.weight,
            currency: self.currency,
        }
    }
}

/// Load a flight graph from a JSON file.
///
/// # Errors
///
/// Fails on the first problem encountered: unreadable file, malformed
/// JSON, an edge record missing a required field, or an invalid airport
/// code. See [`LoadError`].
pub fn load_graph(path: &Path) -> Result<FlightGraph, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: HashMap<String, Vec<EdgeRecord>> = serde_json::from_slice(&bytes)?;

    let mut flights = Vec::new();
    for (code, edges) in records {
        let origin = Iata::parse(&code).map_err(|source| LoadError::InvalidOrigin {
            code: code.clone(),
            source,
        })?;
        flights.extend(edges.into_iter().map(|edge| edge.into_flight(origin)));
    }

    let graph = FlightGraph::from_flights(flights);
    info!(
        airports = graph.airport_count(),
        flights = graph.flight_count(),
        "loaded flight graph from {}",
        path.display()
    );
    Ok(graph)
}
