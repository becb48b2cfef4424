//! Serialized views of search results.
//!
//! A delivered itinerary is turned into a [`TripRecord`]: the ordered leg
//! records (a structural echo of the graph file's edge records) plus the
//! derived trip detail a consumer usually wants alongside them.

use serde::{Deserialize, Serialize};

use crate::domain::{Flight, Itinerary, Stay};

/// One flight of a result, with the same fields as a graph edge record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    pub key: String,
    pub departure: i64,
    pub arrival: i64,
    pub cost: f64,
    pub currency: String,
}

impl From<&Flight> for FlightRecord {
    fn from(flight: &Flight) -> Self {
        Self {
            origin: flight.origin.to_string(),
            destination: flight.destination.to_string(),
            key: flight.key.clone(),
            departure: flight.departure,
            arrival: flight.arrival,
            cost: flight.cost,
            currency: flight.currency.clone(),
        }
    }
}

/// Ground time at one intermediate stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayRecord {
    pub location: String,
    pub seconds: i64,
    pub nights: i64,
}

impl From<&Stay> for StayRecord {
    fn from(stay: &Stay) -> Self {
        Self {
            location: stay.location.to_string(),
            seconds: stay.seconds,
            nights: stay.nights(),
        }
    }
}

/// A complete round trip with derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub flights: Vec<FlightRecord>,
    pub stays: Vec<StayRecord>,
    pub total_cost: f64,
    pub total_duration_seconds: i64,
}

impl From<&Itinerary> for TripRecord {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            flights: itinerary.flights().iter().map(FlightRecord::from).collect(),
            stays: itinerary.stays().iter().map(StayRecord::from).collect(),
            total_cost: itinerary.total_cost(),
            total_duration_seconds: itinerary.total_duration().num_seconds(),
        }
    }
}
