//! # TickActor: the ticker's scheduling task.
//!
//! Drives one [`Backoff`] policy and hands ticks to the consumer one at a time.
//!
//! ## Architecture
//! ```text
//! TickerBuilder::spawn()
//!   ├─► policy.reset()
//!   ├─► first tick placed in the slot (capacity 1)
//!   └─► TickActor::run()
//!
//! loop {
//!   ├─► wait for slot to free up  ◄── consumer received tick   (cancellable)
//!   ├─► policy.next_delay()
//!   │     ├─► None    → PolicyExhausted, exit
//!   │     └─► Some(d) → BackoffScheduled
//!   ├─► sleep(d)                                               (cancellable)
//!   └─► hand off tick = now
//! }
//! stop state set, TickerStopped, sender dropped → stream closes
//! ```
//!
//! ## Rules
//! - The first tick is in the slot **before** the task starts, so the policy is never consulted first.
//! - `next_delay()` is called only after the previous tick was received (never prefetched).
//! - At most one tick is in flight: the slot must free up before the next one is produced.
//! - Both waits race against the cancellation token in a single `select!`.

use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc::{self, OwnedPermit},
    time::{self, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{
    core::stop::StopState,
    events::{Bus, Event, EventKind},
    policies::Backoff,
};

/// Why the scheduling loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    /// Stop requested (explicit cancel, parent token, or handle dropped).
    Cancelled,
    /// Policy returned the stop sentinel.
    Exhausted,
    /// Receiver went away without cancelling.
    Closed,
}

/// Owns the policy and the sending half of the tick slot.
///
/// Expects the policy already reset and the first tick already in the slot.
pub(crate) struct TickActor<B> {
    backoff: B,
    tx: mpsc::Sender<Instant>,
    stop: Arc<StopState>,
    name: Arc<str>,
    bus: Option<Bus>,
    delivered: u64,
}

impl<B: Backoff> TickActor<B> {
    pub(crate) fn new(
        backoff: B,
        tx: mpsc::Sender<Instant>,
        stop: Arc<StopState>,
        name: Arc<str>,
        bus: Option<Bus>,
    ) -> Self {
        Self {
            backoff,
            tx,
            stop,
            name,
            bus,
            delivered: 0,
        }
    }

    /// Runs until the policy is exhausted or the ticker is cancelled.
    ///
    /// On return the sender is dropped, which closes the consumer's stream.
    pub(crate) async fn run(mut self) {
        debug!(ticker = %self.name, "ticker started");
        self.publish(Event::new(EventKind::TickerStarted));

        match self.schedule().await {
            Exit::Exhausted => {
                debug!(ticker = %self.name, ticks = self.delivered, "backoff policy exhausted");
                self.stop.stop();
                self.publish(Event::new(EventKind::PolicyExhausted).with_attempt(self.delivered));
            }
            exit @ (Exit::Cancelled | Exit::Closed) => {
                debug!(ticker = %self.name, ticks = self.delivered, ?exit, "ticker cancelled");
                self.stop.stop();
                self.publish(Event::new(EventKind::TickerCancelled).with_attempt(self.delivered));
            }
        }

        self.publish(Event::new(EventKind::TickerStopped));
        debug!(ticker = %self.name, "ticker stopped");
    }

    async fn schedule(&mut self) -> Exit {
        let token = self.stop.token().clone();

        loop {
            // The slot frees up only once the consumer has taken the last tick.
            let permit = match Self::acquire(&self.tx, &token).await {
                Ok(permit) => permit,
                Err(exit) => return exit,
            };
            self.delivered += 1;
            trace!(ticker = %self.name, attempt = self.delivered, "tick delivered");
            self.publish(Event::new(EventKind::TickDelivered).with_attempt(self.delivered));

            let Some(delay) = self.backoff.next_delay() else {
                return Exit::Exhausted;
            };
            trace!(ticker = %self.name, attempt = self.delivered, ?delay, "next tick scheduled");
            self.publish(
                Event::new(EventKind::BackoffScheduled)
                    .with_attempt(self.delivered)
                    .with_delay(delay),
            );

            let sleep = time::sleep(delay);
            tokio::pin!(sleep);
            select! {
                biased;
                _ = token.cancelled() => return Exit::Cancelled,
                _ = &mut sleep => {}
            }
            permit.send(Instant::now());
        }
    }

    /// Waits for the tick slot to be free, or for cancellation.
    ///
    /// Takes the sender alone: the policy is `Send` but not necessarily `Sync`.
    async fn acquire(
        tx: &mpsc::Sender<Instant>,
        token: &CancellationToken,
    ) -> Result<OwnedPermit<Instant>, Exit> {
        select! {
            biased;
            _ = token.cancelled() => Err(Exit::Cancelled),
            res = tx.clone().reserve_owned() => res.map_err(|_| Exit::Closed),
        }
    }

    fn publish(&self, ev: Event) {
        if let Some(bus) = &self.bus {
            bus.publish(ev.with_ticker(Arc::clone(&self.name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn actor<B: Backoff>(backoff: B) -> (TickActor<B>, mpsc::Receiver<Instant>, Arc<StopState>) {
        let (tx, rx) = mpsc::channel(1);
        tx.try_send(Instant::now()).unwrap();
        let stop = Arc::new(StopState::new(CancellationToken::new()));
        let actor = TickActor::new(backoff, tx, Arc::clone(&stop), Arc::from("test"), None);
        (actor, rx, stop)
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_sets_stop_state_and_closes() {
        let (actor, mut rx, stop) = actor(crate::policies::StopBackoff);
        let task = tokio::spawn(actor.run());

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_none());
        assert!(stop.is_stopped());
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_ends_actor() {
        let (actor, rx, stop) = actor(Duration::from_secs(1));
        drop(rx);

        actor.run().await;
        assert!(stop.is_stopped());
    }
}
