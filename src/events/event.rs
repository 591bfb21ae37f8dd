//! # Lifecycle events emitted by a ticker.
//!
//! The [`EventKind`] enum classifies what the scheduling task did; the
//! [`Event`] struct carries the timestamp, ticker name, attempt number and
//! scheduled delay where they apply.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events from several tickers interleave.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retry_ticker::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::BackoffScheduled)
//!     .with_ticker("fetch")
//!     .with_attempt(2)
//!     .with_delay(Duration::from_millis(200));
//!
//! assert_eq!(ev.kind, EventKind::BackoffScheduled);
//! assert_eq!(ev.ticker.as_deref(), Some("fetch"));
//! assert_eq!(ev.delay, Some(Duration::from_millis(200)));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of ticker events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Scheduling task started; the policy has been reset.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    TickerStarted,

    /// A tick was accepted by the consumer.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `attempt`: tick number (1-based)
    TickDelivered,

    /// The policy returned a delay; the next tick is due after it.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `attempt`: number of the tick that was just accepted
    /// - `delay`: delay before the next tick
    BackoffScheduled,

    /// The policy returned the stop sentinel.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `attempt`: number of ticks delivered
    PolicyExhausted,

    /// The ticker was cancelled (explicitly, by its parent token, or by dropping the handle).
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `attempt`: number of ticks delivered
    TickerCancelled,

    /// Scheduling task finished; the stream is closed.
    ///
    /// Always the last event of a ticker.
    TickerStopped,
}

/// Ticker event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the ticker.
    pub ticker: Option<Arc<str>>,
    /// Tick count (starting from 1).
    pub attempt: Option<u64>,
    /// Delay before the next tick.
    pub delay: Option<Duration>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            ticker: None,
            attempt: None,
            delay: None,
        }
    }

    /// Attaches a ticker name.
    #[inline]
    pub fn with_ticker(mut self, ticker: impl Into<Arc<str>>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Attaches a tick count.
    #[inline]
    pub fn with_attempt(mut self, n: u64) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a scheduled delay.
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        self.delay = Some(d);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::TickerStarted);
        let b = Event::new(EventKind::TickerStopped);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_fill_fields() {
        let ev = Event::new(EventKind::TickDelivered)
            .with_ticker("t")
            .with_attempt(4);
        assert_eq!(ev.ticker.as_deref(), Some("t"));
        assert_eq!(ev.attempt, Some(4));
        assert_eq!(ev.delay, None);
    }
}
