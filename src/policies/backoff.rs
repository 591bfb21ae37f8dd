//! # Backoff capability consumed by the ticker.
//!
//! [`Backoff`] is the narrow interface a [`RetryTicker`](crate::RetryTicker) uses
//! to decide **when** the next tick is due. The ticker never inspects a policy
//! beyond these two calls:
//! - [`Backoff::reset`] once, before the first tick;
//! - [`Backoff::next_delay`] once per accepted tick.
//!
//! `next_delay` returning `None` is the stop sentinel: the ticker closes its
//! stream and never calls the policy again.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use retry_ticker::Backoff;
//!
//! /// Doubles the delay on every call, gives up after one second.
//! struct Doubling {
//!     next: Duration,
//! }
//!
//! impl Backoff for Doubling {
//!     fn next_delay(&mut self) -> Option<Duration> {
//!         if self.next > Duration::from_secs(1) {
//!             return None;
//!         }
//!         let d = self.next;
//!         self.next *= 2;
//!         Some(d)
//!     }
//!
//!     fn reset(&mut self) {
//!         self.next = Duration::from_millis(100);
//!     }
//! }
//!
//! let mut b = Doubling { next: Duration::ZERO };
//! b.reset();
//! assert_eq!(b.next_delay(), Some(Duration::from_millis(100)));
//! assert_eq!(b.next_delay(), Some(Duration::from_millis(200)));
//! ```

use std::time::Duration;

/// Retry delay policy driving a [`RetryTicker`](crate::RetryTicker).
///
/// ### Contract
/// - `next_delay` must not block and must be safe to call repeatedly.
/// - `None` means "stop permanently"; it is not an error.
/// - The ticker owns the policy and calls it from one task, sequentially,
///   so implementations need no internal synchronization.
pub trait Backoff {
    /// Returns the delay before the next tick, or `None` to stop.
    fn next_delay(&mut self) -> Option<Duration>;

    /// Reinitializes internal counters (attempts, elapsed time).
    fn reset(&mut self);
}

/// Constant delay, never stops.
impl Backoff for Duration {
    fn next_delay(&mut self) -> Option<Duration> {
        Some(*self)
    }

    fn reset(&mut self) {}
}

/// Zero delay, never stops.
impl Backoff for () {
    fn next_delay(&mut self) -> Option<Duration> {
        Some(Duration::ZERO)
    }

    fn reset(&mut self) {}
}

impl<B: Backoff + ?Sized> Backoff for Box<B> {
    fn next_delay(&mut self) -> Option<Duration> {
        (**self).next_delay()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<B: Backoff + ?Sized> Backoff for &mut B {
    fn next_delay(&mut self) -> Option<Duration> {
        (**self).next_delay()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Policy that stops immediately.
///
/// A ticker driven by `StopBackoff` delivers exactly one tick (the guaranteed
/// first one) and then closes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StopBackoff;

impl Backoff for StopBackoff {
    fn next_delay(&mut self) -> Option<Duration> {
        None
    }

    fn reset(&mut self) {}
}
