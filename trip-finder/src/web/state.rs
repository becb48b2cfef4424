//! Application state for the web layer.

use std::sync::Arc;

use crate::output::TripRecord;

/// Shared state for the results server.
///
/// The server only ever shows the finished results of one search run, so
/// the state is immutable once built.
#[derive(Clone)]
pub struct AppState {
    /// Origin airport of the search, for the page heading
    pub origin: String,

    /// Every trip found, in delivery order
    pub trips: Arc<Vec<TripRecord>>,
}

impl AppState {
    /// Create state from the search origin and its results.
    pub fn new(origin: impl Into<String>, trips: Vec<TripRecord>) -> Self {
        Self {
            origin: origin.into(),
            trips: Arc::new(trips),
        }
    }
}
