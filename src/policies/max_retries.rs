//! # Retry cap for any backoff policy.
//!
//! [`MaxRetries`] wraps another [`Backoff`] and returns the stop sentinel once
//! the inner policy has produced `max` delays. A ticker driven by
//! `MaxRetries { max: n, .. }` therefore delivers at most `n + 1` ticks: the
//! guaranteed first one plus `n` retries.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use retry_ticker::{Backoff, BackoffExt};
//!
//! let mut b = Duration::from_millis(10).with_max_retries(2);
//! b.reset();
//! assert_eq!(b.next_delay(), Some(Duration::from_millis(10)));
//! assert_eq!(b.next_delay(), Some(Duration::from_millis(10)));
//! assert_eq!(b.next_delay(), None);
//! ```

use std::time::Duration;

use crate::policies::backoff::Backoff;

/// Stops the wrapped policy after a fixed number of retries.
#[derive(Clone, Debug)]
pub struct MaxRetries<B> {
    inner: B,
    max: u64,
    used: u64,
}

impl<B: Backoff> MaxRetries<B> {
    /// Wraps `inner`, allowing at most `max` delays before stopping.
    pub fn new(inner: B, max: u64) -> Self {
        Self {
            inner,
            max,
            used: 0,
        }
    }

    /// Number of delays handed out since the last [`Backoff::reset`].
    pub fn used(&self) -> u64 {
        self.used
    }
}

impl<B: Backoff> Backoff for MaxRetries<B> {
    fn next_delay(&mut self) -> Option<Duration> {
        if self.used >= self.max {
            return None;
        }
        let next = self.inner.next_delay()?;
        self.used += 1;
        Some(next)
    }

    fn reset(&mut self) {
        self.used = 0;
        self.inner.reset();
    }
}

/// Combinators available on every [`Backoff`].
pub trait BackoffExt: Backoff + Sized {
    /// Caps the policy at `max` retries. See [`MaxRetries`].
    fn with_max_retries(self, max: u64) -> MaxRetries<Self> {
        MaxRetries::new(self, max)
    }
}

impl<B: Backoff> BackoffExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::backoff::StopBackoff;

    #[test]
    fn test_stops_after_max() {
        let mut b = MaxRetries::new(Duration::from_millis(1), 3);
        b.reset();
        for _ in 0..3 {
            assert_eq!(b.next_delay(), Some(Duration::from_millis(1)));
        }
        assert_eq!(b.next_delay(), None);
        assert_eq!(b.next_delay(), None);
        assert_eq!(b.used(), 3);
    }

    #[test]
    fn test_zero_max_stops_immediately() {
        let mut b = Duration::from_secs(1).with_max_retries(0);
        assert_eq!(b.next_delay(), None);
    }

    #[test]
    fn test_reset_restores_budget() {
        let mut b = Duration::from_millis(1).with_max_retries(1);
        assert!(b.next_delay().is_some());
        assert!(b.next_delay().is_none());

        b.reset();
        assert_eq!(b.used(), 0);
        assert!(b.next_delay().is_some());
    }

    #[test]
    fn test_inner_stop_wins() {
        let mut b = StopBackoff.with_max_retries(10);
        assert_eq!(b.next_delay(), None);
        assert_eq!(b.used(), 0);
    }
}
