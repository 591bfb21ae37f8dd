use std::{borrow::Cow, sync::Arc};

use tokio::{runtime::Handle, sync::mpsc, time::Instant};
use tokio_util::sync::CancellationToken;

use super::{actor::TickActor, config::TickerConfig, stop::StopState, ticker::RetryTicker};
use crate::{error::TickerError, events::Bus, policies::Backoff};

/// Builder for constructing a [`RetryTicker`] with optional features.
pub struct TickerBuilder<B> {
    backoff: B,
    cfg: TickerConfig,
    parent: Option<CancellationToken>,
    handle: Option<Handle>,
    bus: Option<Bus>,
}

impl<B> TickerBuilder<B>
where
    B: Backoff + Send + 'static,
{
    /// Creates a new builder driven by `backoff`, with [`TickerConfig::default`].
    pub fn new(backoff: B) -> Self {
        Self {
            backoff,
            cfg: TickerConfig::default(),
            parent: None,
            handle: None,
            bus: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, cfg: TickerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Sets the name used in logs and events.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.cfg.name = name.into();
        self
    }

    /// Ties the ticker to a parent token.
    ///
    /// Cancelling `parent` stops the ticker. Cancelling the ticker leaves
    /// `parent` untouched.
    pub fn with_parent(mut self, parent: &CancellationToken) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Spawns the scheduling task on `handle` instead of the ambient runtime.
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Publishes lifecycle events to `bus`.
    ///
    /// Takes precedence over [`TickerConfig::bus_capacity`].
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Spawns the scheduling task and returns the ticker handle.
    ///
    /// The policy is reset and the first tick is placed in the hand-off slot
    /// here, before the task is spawned: it is readable even if the task never
    /// gets to run.
    ///
    /// ### Errors
    /// [`TickerError::NoRuntime`] when no handle was given and the caller is
    /// not inside a tokio runtime.
    pub fn spawn(self) -> Result<RetryTicker, TickerError> {
        let handle = match self.handle {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| TickerError::NoRuntime {
                name: self.cfg.name.to_string(),
            })?,
        };

        let token = match &self.parent {
            Some(parent) => parent.child_token(),
            None => CancellationToken::new(),
        };
        let state = Arc::new(StopState::new(token));
        let bus = self.bus.or_else(|| self.cfg.bus_capacity().map(Bus::new));
        let name: Arc<str> = Arc::from(self.cfg.name.as_ref());

        let mut backoff = self.backoff;
        backoff.reset();

        let (tx, rx) = mpsc::channel(1);
        // fresh channel of capacity 1: neither full nor closed
        let _ = tx.try_send(Instant::now());

        let actor = TickActor::new(
            backoff,
            tx,
            Arc::clone(&state),
            Arc::clone(&name),
            bus.clone(),
        );
        let task = handle.spawn(actor.run());

        Ok(RetryTicker::from_parts(rx, state, task, name, bus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_owned_bus_from_config() {
        let ticker = RetryTicker::builder(Duration::from_secs(1))
            .with_config(TickerConfig {
                name: "owned".into(),
                bus_capacity: 8,
            })
            .spawn()
            .unwrap();

        let mut rx = ticker.subscribe().expect("bus configured");
        ticker.cancel();

        loop {
            let ev = rx.recv().await.unwrap();
            assert_eq!(ev.ticker.as_deref(), Some("owned"));
            if ev.kind == EventKind::TickerStopped {
                break;
            }
        }
    }

    #[tokio::test]
    async fn test_no_bus_by_default() {
        let ticker = RetryTicker::builder(()).with_name("quiet").spawn().unwrap();
        assert!(ticker.subscribe().is_none());
        assert_eq!(ticker.name(), "quiet");
    }

    #[test]
    fn test_explicit_handle_outside_runtime() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();

        let mut ticker = RetryTicker::builder(crate::policies::StopBackoff)
            .with_handle(rt.handle().clone())
            .spawn()
            .unwrap();

        let ticks = rt.block_on(async {
            let mut n = 0;
            while ticker.tick().await.is_some() {
                n += 1;
            }
            n
        });
        assert_eq!(ticks, 1);
    }

    #[test]
    fn test_first_tick_survives_dead_runtime() {
        let dead = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let handle = dead.handle().clone();
        drop(dead);

        let mut ticker = RetryTicker::builder(Duration::from_millis(1))
            .with_handle(handle)
            .spawn()
            .unwrap();

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let ticks = rt.block_on(async {
            let mut n = 0;
            while ticker.tick().await.is_some() {
                n += 1;
            }
            n
        });
        assert_eq!(ticks, 1);
    }
}
