//! # One-shot stop signal shared by a ticker and its cancellers.
//!
//! [`StopState`] pairs an `AtomicBool` with a [`CancellationToken`]:
//! - the flag guarantees the stop path runs **exactly once**, however many
//!   callers race on it;
//! - the token wakes the scheduling task wherever it is parked.
//!
//! A token derived from a parent may also be cancelled from outside; that is
//! observed through [`StopState::is_stopped`] as well.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub(crate) struct StopState {
    stopped: AtomicBool,
    token: CancellationToken,
}

impl StopState {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self {
            stopped: AtomicBool::new(false),
            token,
        }
    }

    /// Requests stop. Returns `true` only for the call that performed it.
    pub(crate) fn stop(&self) -> bool {
        if self.stopped.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.token.cancel();
        true
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire) || self.token.is_cancelled()
    }

    pub(crate) fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Cloneable handle that cancels a [`RetryTicker`](crate::RetryTicker).
///
/// Obtained from [`RetryTicker::canceller`](crate::RetryTicker::canceller). Useful
/// when the ticker itself is borrowed by a consumer loop and another task
/// decides that retrying should end.
///
/// ### Rules
/// - `cancel()` is idempotent and never blocks.
/// - Any number of clones may call it concurrently; only the first has effect.
#[derive(Clone, Debug)]
pub struct Canceller {
    pub(crate) state: Arc<StopState>,
}

impl Canceller {
    /// Stops the ticker: no further ticks, stream closes.
    pub fn cancel(&self) {
        self.state.stop();
    }

    /// Returns `true` once the ticker was cancelled or its policy was exhausted.
    pub fn is_cancelled(&self) -> bool {
        self.state.is_stopped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_runs_once() {
        let state = StopState::new(CancellationToken::new());
        assert!(!state.is_stopped());
        assert!(state.stop());
        assert!(!state.stop());
        assert!(state.is_stopped());
        assert!(state.token().is_cancelled());
    }

    #[test]
    fn test_parent_cancel_is_observed() {
        let parent = CancellationToken::new();
        let state = StopState::new(parent.child_token());
        parent.cancel();
        assert!(state.is_stopped());
        // the flag is still free, so the stop path can run once more
        assert!(state.stop());
    }

    #[test]
    fn test_concurrent_stop_has_one_winner() {
        let state = Arc::new(StopState::new(CancellationToken::new()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let s = Arc::clone(&state);
                std::thread::spawn(move || s.stop())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
    }
}
