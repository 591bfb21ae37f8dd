//! # RetryTicker: consumer-side handle.
//!
//! A [`RetryTicker`] yields one [`Instant`] per attempt. It implements
//! [`Stream`] and also offers [`RetryTicker::tick`] for plain `while let` loops.
//!
//! ## Termination
//! The stream ends (yields `None`) when:
//! - [`RetryTicker::cancel`] or a [`Canceller`] is called;
//! - the parent token given to [`TickerBuilder::with_parent`](crate::TickerBuilder::with_parent) is cancelled;
//! - the backoff policy returns its stop sentinel.
//!
//! Once `cancel()` has returned, no further tick is yielded. A tick is only
//! observed if the consumer received it before that point; a tick still
//! waiting in the hand-off slot is discarded. This departs from
//! "deliver if already in flight": a slot tick has not been received yet, and
//! handing it out would break "no tick after `cancel()` returns".
//!
//! ## Cleanup
//! Dropping a `RetryTicker` cancels it, so leaving a retry loop by `break`,
//! `?` or panic unwinding stops the scheduling task. A ticker that is kept alive
//! but neither read nor cancelled parks its task forever; that is on the caller.

use std::{
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use futures::{Stream, stream::FusedStream};
use tokio::{
    sync::{broadcast, mpsc},
    task::JoinHandle,
    time::Instant,
};
use tracing::debug;

use crate::{
    core::{
        builder::TickerBuilder,
        stop::{Canceller, StopState},
    },
    error::TickerError,
    events::{Bus, Event},
    policies::Backoff,
};

/// Delivers ticks at times chosen by a [`Backoff`] policy.
///
/// # Example
/// ```rust
/// use std::time::Duration;
/// use retry_ticker::{BackoffExt, RetryTicker};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut ticker = RetryTicker::new(Duration::from_millis(1).with_max_retries(4))?;
///
/// let mut attempts = 0;
/// let mut ok = false;
/// while let Some(_at) = ticker.tick().await {
///     attempts += 1;
///     if attempts == 3 {
///         ok = true;
///         ticker.cancel();
///         break;
///     }
/// }
/// assert!(ok);
/// assert_eq!(attempts, 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RetryTicker {
    rx: mpsc::Receiver<Instant>,
    state: Arc<StopState>,
    task: JoinHandle<()>,
    name: Arc<str>,
    bus: Option<Bus>,
    done: bool,
}

impl RetryTicker {
    /// Starts a ticker with default settings on the current tokio runtime.
    ///
    /// Equivalent to `RetryTicker::builder(backoff).spawn()`.
    pub fn new<B>(backoff: B) -> Result<Self, TickerError>
    where
        B: Backoff + Send + 'static,
    {
        Self::builder(backoff).spawn()
    }

    /// Returns a builder for a ticker driven by `backoff`.
    pub fn builder<B>(backoff: B) -> TickerBuilder<B>
    where
        B: Backoff + Send + 'static,
    {
        TickerBuilder::new(backoff)
    }

    pub(crate) fn from_parts(
        rx: mpsc::Receiver<Instant>,
        state: Arc<StopState>,
        task: JoinHandle<()>,
        name: Arc<str>,
        bus: Option<Bus>,
    ) -> Self {
        Self {
            rx,
            state,
            task,
            name,
            bus,
            done: false,
        }
    }

    /// Waits for the next tick.
    ///
    /// Returns `None` once the ticker is cancelled or its policy is exhausted.
    pub async fn tick(&mut self) -> Option<Instant> {
        std::future::poll_fn(|cx| self.poll_tick(cx)).await
    }

    /// Polls for the next tick.
    pub fn poll_tick(&mut self, cx: &mut Context<'_>) -> Poll<Option<Instant>> {
        if self.done {
            return Poll::Ready(None);
        }
        if self.state.is_stopped() {
            self.done = true;
            self.rx.close();
            return Poll::Ready(None);
        }
        match self.rx.poll_recv(cx) {
            Poll::Ready(None) => {
                self.done = true;
                Poll::Ready(None)
            }
            other => other,
        }
    }

    /// Stops the ticker.
    ///
    /// Idempotent and non-blocking: the first call wakes the scheduling task,
    /// later calls return immediately.
    pub fn cancel(&self) {
        if self.state.stop() {
            debug!(ticker = %self.name, "cancel requested");
        }
    }

    /// Returns a cloneable handle that can cancel this ticker from elsewhere.
    pub fn canceller(&self) -> Canceller {
        Canceller {
            state: Arc::clone(&self.state),
        }
    }

    /// Returns `true` once the ticker was cancelled or its policy was exhausted.
    pub fn is_cancelled(&self) -> bool {
        self.state.is_stopped()
    }

    /// Returns `true` once the scheduling task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Ticker name, as used in logs and events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscribes to this ticker's lifecycle events, if it has a bus.
    ///
    /// Only events published after the call are observed.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<Event>> {
        self.bus.as_ref().map(Bus::subscribe)
    }
}

impl Stream for RetryTicker {
    type Item = Instant;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().poll_tick(cx)
    }
}

impl FusedStream for RetryTicker {
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl Drop for RetryTicker {
    fn drop(&mut self) {
        self.state.stop();
    }
}
