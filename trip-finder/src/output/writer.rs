//! Streaming results to disk.
//!
//! [`JsonLinesSink`] persists each itinerary the moment it is delivered,
//! one JSON object per line, so a cancelled or crashed run still leaves
//! everything found so far on disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Itinerary;
use crate::output::dto::TripRecord;
use crate::search::{ResultSink, SinkError};

/// Sink that appends one JSON line per itinerary to a writer.
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl JsonLinesSink<File> {
    /// Create (or truncate) a file at `path` and write results to it.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap any writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    /// Returns the number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered records and return the underlying writer.
    pub fn finish(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}

impl<W: Write> ResultSink for JsonLinesSink<W> {
    fn accept(&mut self, itinerary: &Itinerary) -> Result<(), SinkError> {
        let record = TripRecord::from(itinerary);
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}
