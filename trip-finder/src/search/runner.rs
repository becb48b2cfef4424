//! Running a search off the caller's thread.
//!
//! The engine itself is a synchronous, CPU-bound walk. [`SearchJob`] moves
//! it onto a tokio blocking worker so the control thread stays free; the
//! caller keeps a [`CancellationToken`] to stop the run and awaits the job
//! for the final count.

use tokio::task::JoinHandle;

use super::cancel::CancellationToken;
use super::engine::{ItinerarySearch, SearchError};
use super::sink::ResultSink;

/// A search running on a background worker.
///
/// The job owns the sink for the duration of the run and hands it back,
/// together with the delivered count, when awaited.
pub struct SearchJob<S> {
    cancel: CancellationToken,
    handle: JoinHandle<(usize, S)>,
}

impl<S> SearchJob<S>
where
    S: ResultSink + Send + 'static,
{
    /// Start `search` on a blocking worker, streaming results into `sink`.
    pub fn spawn(search: ItinerarySearch, mut sink: S) -> Self {
        let cancel = search.cancellation_token();
        let handle = tokio::task::spawn_blocking(move || {
            let total = search.run(&mut sink);
            (total, sink)
        });

        Self { cancel, handle }
    }

    /// Request that the running search stop at its next poll point.
    pub fn request_stop(&self) {
        self.cancel.request_stop();
    }

    /// Returns a token tied to this job's search.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Wait for the search to finish.
    ///
    /// Returns the number of itineraries delivered and the sink.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::WorkerLost`] if the worker panicked or was
    /// aborted before completing.
    pub async fn join(self) -> Result<(usize, S), SearchError> {
        self.handle.await.map_err(|_| SearchError::WorkerLost)
    }
}
