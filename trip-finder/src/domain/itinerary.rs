//! Round-trip itinerary types.
//!
//! An `Itinerary` is a complete round trip: a closed walk of flights that
//! leaves the origin, visits zero or more other airports, and returns.
//! The constructor checks every structural invariant, so code that receives
//! an `Itinerary` can trust it without re-validating.

use chrono::Duration;
use std::collections::HashSet;

use super::{DomainError, Flight, Iata};

/// Seconds in one night, used to express stop durations in whole nights.
const SECONDS_PER_NIGHT: i64 = 86_400;

/// Time spent on the ground between two flights of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    /// Airport where the traveller waits
    pub location: Iata,

    /// Gap between the inbound arrival and the outbound departure, seconds
    pub seconds: i64,
}

impl Stay {
    /// Returns the stay length in whole nights (floor division).
    ///
    /// A 47-hour stay counts as 1 night, matching the stay-validity rule
    /// applied during the search.
    pub fn nights(&self) -> i64 {
        self.seconds / SECONDS_PER_NIGHT
    }
}

/// A complete round-trip itinerary.
///
/// # Invariants
///
/// - At least two flights (out and back)
/// - First flight departs from the trip origin; last flight returns to it
/// - Consecutive flights connect (destination of one = origin of the next)
/// - Chronological: each flight departs strictly after the previous arrival
/// - No revisits: intermediate destinations are pairwise distinct and none
///   equals the origin
///
/// The stay-duration rule is a search constraint, not a structural one, so
/// it is enforced by the engine rather than here.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    origin: Iata,
    flights: Vec<Flight>,
}

impl Itinerary {
    /// Construct an itinerary, validating the closed-walk invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Fewer than two flights are given
    /// - The walk does not start and end at `origin`
    /// - Consecutive flights don't connect
    /// - A flight departs at or before the previous arrival
    /// - An intermediate destination repeats or equals the origin
    pub fn new(origin: Iata, flights: Vec<Flight>) -> Result<Self, DomainError> {
        if flights.len() < 2 {
            return Err(DomainError::TooFewFlights);
        }

        // Safe: checked non-empty above
        let first = flights.first().unwrap();
        let last = flights.last().unwrap();
        if first.origin != origin || last.destination != origin {
            return Err(DomainError::NotRoundTrip(origin));
        }

        for window in flights.windows(2) {
            let prev = &window[0];
            let next = &window[1];

            if prev.destination != next.origin {
                return Err(DomainError::Disconnected(prev.destination, next.origin));
            }
            if next.departure <= prev.arrival {
                return Err(DomainError::OutOfOrder {
                    key: next.key.clone(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(flights.len());
        for flight in &flights[..flights.len() - 1] {
            let stop = flight.destination;
            if stop == origin || !seen.insert(stop) {
                return Err(DomainError::RevisitedAirport(stop));
            }
        }

        Ok(Itinerary { origin, flights })
    }

    /// Returns the trip origin.
    pub fn origin(&self) -> Iata {
        self.origin
    }

    /// Returns all flights in travel order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Returns the number of flights (always at least 2).
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Returns the intermediate stops in visit order (excludes the origin).
    pub fn stops(&self) -> impl Iterator<Item = Iata> + '_ {
        self.flights[..self.flights.len() - 1]
            .iter()
            .map(|f| f.destination)
    }

    /// Returns the departure time of the first flight, epoch seconds.
    pub fn departure(&self) -> i64 {
        // Safe: validated non-empty at construction
        self.flights.first().unwrap().departure
    }

    /// Returns the arrival time of the final flight, epoch seconds.
    pub fn arrival(&self) -> i64 {
        // Safe: validated non-empty at construction
        self.flights.last().unwrap().arrival
    }

    /// Returns the total trip duration, first departure to last arrival.
    pub fn total_duration(&self) -> Duration {
        Duration::seconds(self.arrival() - self.departure())
    }

    /// Returns the sum of the individual leg fares.
    ///
    /// Fares are summed as-is; mixing currencies is the caller's problem.
    pub fn total_cost(&self) -> f64 {
        self.flights.iter().map(|f| f.cost).sum()
    }

    /// Returns the ground time at each intermediate stop, in travel order.
    pub fn stays(&self) -> Vec<Stay> {
        self.flights
            .windows(2)
            .map(|window| Stay {
                location: window[0].destination,
                seconds: window[1].departure - window[0].arrival,
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn iata_from_idx(i: usize) -> Iata {
        let c1 = b'A' + ((i / 676) % 26) as u8;
        let c2 = b'A' + ((i / 26) % 26) as u8;
        let c3 = b'A' + (i % 26) as u8;
        let s = format!("{}{}{}", c1 as char, c2 as char, c3 as char);
        Iata::parse(&s).unwrap()
    }

    /// Build a valid closed walk visiting `stops` distinct airports, with
    /// the given gap (seconds) between every arrival and the next departure.
    fn closed_walk(stops: usize, gap: i64, leg_secs: i64) -> (Iata, Vec<Flight>) {
        let origin = iata_from_idx(0);
        let mut flights = Vec::with_capacity(stops + 1);
        let mut clock = 0i64;
        let mut from = origin;

        for i in 1..=stops {
            let to = iata_from_idx(i);
            flights.push(Flight {
                origin: from,
                destination: to,
                key: format!("LEG-{i}"),
                departure: clock,
                arrival: clock + leg_secs,
                cost: 10.0,
                currency: "EUR".into(),
            });
            clock += leg_secs + gap;
            from = to;
        }
        flights.push(Flight {
            origin: from,
            destination: origin,
            key: "LEG-RET".into(),
            departure: clock,
            arrival: clock + leg_secs,
            cost: 10.0,
            currency: "EUR".into(),
        });

        (origin, flights)
    }

    proptest! {
        /// Any well-formed closed walk is accepted and reports consistent
        /// derived values.
        #[test]
        fn valid_walks_accepted(
            stops in 1usize..6,
            gap in 1i64..500_000,
            leg_secs in 600i64..36_000,
        ) {
            let (origin, flights) = closed_walk(stops, gap, leg_secs);
            let count = flights.len();
            let itin = Itinerary::new(origin, flights).unwrap();

            prop_assert_eq!(itin.flight_count(), count);
            prop_assert_eq!(itin.stays().len(), count - 1);
            prop_assert!(itin.stays().iter().all(|s| s.seconds == gap));
            prop_assert_eq!(
                itin.total_duration(),
                Duration::seconds(itin.arrival() - itin.departure())
            );
            prop_assert_eq!(itin.stops().count(), count - 1);
        }

        /// Reversing any single adjacent pair breaks chronology and is
        /// rejected.
        #[test]
        fn shuffled_walks_rejected(
            stops in 2usize..6,
            gap in 1i64..500_000,
            swap_at in 0usize..5,
        ) {
            let (origin, mut flights) = closed_walk(stops, gap, 3_600);
            let swap_at = swap_at % (flights.len() - 1);
            flights.swap(swap_at, swap_at + 1);

            prop_assert!(Itinerary::new(origin, flights).is_err());
        }
    }
}
