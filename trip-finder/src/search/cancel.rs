//! Cooperative cancellation.
//!
//! A search polls its token at the entry of every branch and before each
//! candidate flight. Cancellation is therefore best-effort: a stop request
//! takes effect at the next poll point, never mid-candidate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag used to request early termination of a search.
///
/// Cloning is cheap and every clone observes the same flag, so one end can
/// be kept by the caller while another travels into the search worker.
///
/// # Examples
///
/// ```
/// use trip_finder::search::CancellationToken;
///
/// let token = CancellationToken::new();
/// let shared = token.clone();
///
/// assert!(!token.is_stopped());
/// shared.request_stop();
/// assert!(token.is_stopped());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stopped: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token in the not-stopped state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the search stop.
    ///
    /// Idempotent, and valid at any time: calling before the run starts
    /// pre-arms cancellation so the run stops at its first poll.
    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Returns true once a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unstopped() {
        assert!(!CancellationToken::new().is_stopped());
    }

    #[test]
    fn stop_is_visible_to_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();

        token.request_stop();
        assert!(clone.is_stopped());
    }

    #[test]
    fn stop_is_idempotent() {
        let token = CancellationToken::new();
        token.request_stop();
        token.request_stop();
        assert!(token.is_stopped());
    }

    #[test]
    fn stop_is_visible_across_threads() {
        let token = CancellationToken::new();
        let remote = token.clone();

        std::thread::spawn(move || remote.request_stop())
            .join()
            .unwrap();
        assert!(token.is_stopped());
    }
}
