//! # Shared event bus for tickers.
//!
//! A [`Bus`] fans ticker lifecycle [`Event`]s out to any number of receivers.
//! One bus can be handed to many tickers through
//! [`TickerBuilder::with_bus`](crate::TickerBuilder::with_bus); the `ticker` field
//! and the global `seq` tell their events apart and put them back in order.
//!
//! ```text
//!  ticker "fetch" ──┐
//!  ticker "auth"  ──┼──► Bus ──► rx (metrics)
//!  ticker "db"    ──┘           └► rx (tests)
//! ```
//!
//! A scheduling task never waits on the bus: when a receiver lags it skips the
//! oldest events (`RecvError::Lagged`), and with no receiver events are gone.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel shared by one or more tickers.
///
/// Clones publish into the same channel.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a bus that keeps the last `capacity` events (at least 1).
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self { tx }
    }

    /// Hands `ev` to every current receiver; drops it if there are none.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Returns a receiver for events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
