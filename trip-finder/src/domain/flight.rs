//! Flight leg type.
//!
//! A `Flight` is one timed, priced directed edge of the route graph.
//! Flights are plain values: the search copies them freely into
//! branch-local paths, so they carry no shared state.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::Iata;

/// A single one-way flight between two airports.
///
/// Timestamps are integer seconds since the Unix epoch, exactly as they
/// appear in the graph file. `arrival >= departure` is assumed valid input
/// and not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    /// Departure airport
    pub origin: Iata,

    /// Arrival airport
    pub destination: Iata,

    /// Unique leg identifier (e.g. flight number plus departure date)
    pub key: String,

    /// Departure time, epoch seconds
    pub departure: i64,

    /// Arrival time, epoch seconds
    pub arrival: i64,

    /// Fare for this leg
    pub cost: f64,

    /// Currency code for `cost`
    pub currency: String,
}

impl Flight {
    /// Returns the flight duration.
    pub fn duration(&self) -> Duration {
        Duration::seconds(self.arrival - self.departure)
    }

    /// Returns the departure time as a UTC datetime, if representable.
    pub fn departure_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.departure, 0)
    }

    /// Returns the arrival time as a UTC datetime, if representable.
    pub fn arrival_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.arrival, 0)
    }

    /// Returns true if this leg starts and ends at the same airport.
    ///
    /// Self-loops can appear in scraped data; the search never includes
    /// them in an itinerary.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn flight(origin: &str, destination: &str, departure: i64, arrival: i64) -> Flight {
        Flight {
            origin: iata(origin),
            destination: iata(destination),
            key: format!("FR-{origin}-{destination}-{departure}"),
            departure,
            arrival,
            cost: 19.99,
            currency: "EUR".into(),
        }
    }

    #[test]
    fn duration_in_seconds() {
        let f = flight("BGY", "STN", 1_000, 8_200);
        assert_eq!(f.duration(), Duration::seconds(7_200));
    }

    #[test]
    fn datetime_views() {
        let f = flight("BGY", "STN", 0, 3_600);
        assert_eq!(
            f.departure_time().unwrap().to_rfc3339(),
            "1970-01-01T00:00:00+00:00"
        );
        assert_eq!(
            f.arrival_time().unwrap().to_rfc3339(),
            "1970-01-01T01:00:00+00:00"
        );
    }

    #[test]
    fn self_loop_detection() {
        assert!(flight("BGY", "BGY", 0, 100).is_self_loop());
        assert!(!flight("BGY", "STN", 0, 100).is_self_loop());
    }

    #[test]
    fn serializes_all_leg_fields() {
        let f = flight("BGY", "STN", 100, 200);
        let json = serde_json::to_value(&f).unwrap();

        assert_eq!(json["origin"], "BGY");
        assert_eq!(json["destination"], "STN");
        assert_eq!(json["key"], "FR-BGY-STN-100");
        assert_eq!(json["departure"], 100);
        assert_eq!(json["arrival"], 200);
        assert_eq!(json["currency"], "EUR");
    }
}
