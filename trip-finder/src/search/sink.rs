//! Result delivery.
//!
//! Discovered itineraries are streamed out through a [`ResultSink`] as
//! soon as they are found. The sink is an external collaborator and is
//! not assumed to tolerate concurrent calls, so the search routes every
//! delivery through [`Delivery`], which serializes `accept` invocations
//! behind a mutex and keeps the running count.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{info, warn};

use crate::domain::Itinerary;

/// How many successful deliveries between progress log lines.
const PROGRESS_INTERVAL: usize = 1000;

/// Errors a sink can signal while accepting a result.
///
/// A delivery failure is recoverable: the search logs it, drops that one
/// result, and carries on. It is never retried and never aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Writing the result out failed
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the result failed
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Any other consumer-side failure
    #[error("{0}")]
    Other(String),
}

impl SinkError {
    /// Build an [`SinkError::Other`] from any message.
    pub fn other(message: impl Into<String>) -> Self {
        SinkError::Other(message.into())
    }
}

/// Consumer of discovered itineraries.
///
/// `accept` is called once per result, one call at a time. Implementations
/// need no internal synchronization.
pub trait ResultSink {
    /// Receive one completed itinerary.
    fn accept(&mut self, itinerary: &Itinerary) -> Result<(), SinkError>;
}

/// Sink that collects every itinerary into a vector.
///
/// Useful for tests and for small searches where materializing the whole
/// result set is fine.
#[derive(Debug, Default)]
pub struct CollectSink {
    /// Everything accepted so far, in delivery order.
    pub itineraries: Vec<Itinerary>,
}

impl CollectSink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for CollectSink {
    fn accept(&mut self, itinerary: &Itinerary) -> Result<(), SinkError> {
        self.itineraries.push(itinerary.clone());
        Ok(())
    }
}

/// Serialized delivery wrapper around a sink.
///
/// Guarantees at-most-one `accept` call in flight, counts successes, logs
/// and drops failures, and emits a progress line every
/// `PROGRESS_INTERVAL` successful deliveries. The counter and the lock are
/// the only state shared between exploration branches.
pub(crate) struct Delivery<'a, S> {
    sink: Mutex<&'a mut S>,
    delivered: AtomicUsize,
}

impl<'a, S: ResultSink> Delivery<'a, S> {
    pub(crate) fn new(sink: &'a mut S) -> Self {
        Self {
            sink: Mutex::new(sink),
            delivered: AtomicUsize::new(0),
        }
    }

    /// Hand one itinerary to the sink.
    ///
    /// A failed delivery is logged at WARN and does not count toward the
    /// total.
    pub(crate) fn deliver(&self, itinerary: &Itinerary) {
        let result = {
            let mut sink = self.sink.lock().expect("sink lock poisoned");
            sink.accept(itinerary)
        };

        match result {
            Ok(()) => {
                let delivered = self.delivered.fetch_add(1, Ordering::Relaxed) + 1;
                if delivered % PROGRESS_INTERVAL == 0 {
                    info!(delivered, "itineraries found so far");
                }
            }
            Err(error) => {
                warn!(%error, "sink rejected an itinerary, dropping it");
            }
        }
    }

    /// Returns the number of successful deliveries so far.
    pub(crate) fn delivered(&self) -> usize {
        self.delivered.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Flight, Iata, Itinerary};

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn round_trip() -> Itinerary {
        let out = Flight {
            origin: iata("BGY"),
            destination: iata("STN"),
            key: "OUT".into(),
            departure: 0,
            arrival: 3_600,
            cost: 10.0,
            currency: "EUR".into(),
        };
        let back = Flight {
            origin: iata("STN"),
            destination: iata("BGY"),
            key: "BACK".into(),
            departure: 4 * 3_600,
            arrival: 5 * 3_600,
            cost: 10.0,
            currency: "EUR".into(),
        };
        Itinerary::new(iata("BGY"), vec![out, back]).unwrap()
    }

    /// Sink that fails every other delivery.
    struct FlakySink {
        calls: usize,
        accepted: usize,
    }

    impl ResultSink for FlakySink {
        fn accept(&mut self, _itinerary: &Itinerary) -> Result<(), SinkError> {
            self.calls += 1;
            if self.calls % 2 == 0 {
                return Err(SinkError::other("consumer hiccup"));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    #[test]
    fn counts_successful_deliveries() {
        let mut sink = CollectSink::new();
        let delivery = Delivery::new(&mut sink);
        let itinerary = round_trip();

        delivery.deliver(&itinerary);
        delivery.deliver(&itinerary);
        assert_eq!(delivery.delivered(), 2);
        assert_eq!(sink.itineraries.len(), 2);
    }

    #[test]
    fn failed_deliveries_are_dropped_not_counted() {
        let mut sink = FlakySink {
            calls: 0,
            accepted: 0,
        };
        let delivery = Delivery::new(&mut sink);
        let itinerary = round_trip();

        for _ in 0..4 {
            delivery.deliver(&itinerary);
        }

        assert_eq!(delivery.delivered(), 2);
        assert_eq!(sink.calls, 4);
        assert_eq!(sink.accepted, 2);
    }
}
