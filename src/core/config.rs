//! # Ticker configuration.
//!
//! Provides [`TickerConfig`] settings applied by [`TickerBuilder`](crate::TickerBuilder).
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → no built-in event bus (events are only published to
//!   a bus passed via `with_bus`)

use std::borrow::Cow;

/// Configuration for a single [`RetryTicker`](crate::RetryTicker).
///
/// ## Field semantics
/// - `name`: label used in logs and events
/// - `bus_capacity`: capacity of the ticker's own event bus (`0` = none)
#[derive(Clone, Debug)]
pub struct TickerConfig {
    /// Ticker name carried in `tracing` fields and [`Event::ticker`](crate::Event::ticker).
    pub name: Cow<'static, str>,

    /// Capacity of a ticker-owned event bus.
    ///
    /// - `0` = no bus is created
    /// - `n > 0` = a [`Bus`](crate::Bus) of capacity `n` is created; receivers are
    ///   obtained with [`RetryTicker::subscribe`](crate::RetryTicker::subscribe)
    ///
    /// Ignored when an explicit bus is supplied.
    pub bus_capacity: usize,
}

impl TickerConfig {
    /// Returns the owned bus capacity as an `Option`.
    ///
    /// - `None` → no ticker-owned bus
    /// - `Some(n)` → bus with capacity `n`
    #[inline]
    pub fn bus_capacity(&self) -> Option<usize> {
        if self.bus_capacity == 0 {
            None
        } else {
            Some(self.bus_capacity)
        }
    }
}

impl Default for TickerConfig {
    /// Default configuration:
    ///
    /// - `name = "retry-ticker"`
    /// - `bus_capacity = 0` (no events)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("retry-ticker"),
            bus_capacity: 0,
        }
    }
}
