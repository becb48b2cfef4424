//! Result output: serialized trip records and the JSON-lines writer.

mod dto;
mod writer;

pub use dto::{FlightRecord, StayRecord, TripRecord};
pub use writer::JsonLinesSink;
