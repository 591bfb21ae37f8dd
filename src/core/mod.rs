//! Ticker core: scheduling and lifecycle.
//!
//! The public API from this module is [`RetryTicker`], its [`TickerBuilder`],
//! [`TickerConfig`] and the [`Canceller`] handle.
//!
//! Internal modules:
//! - [`actor`]: the scheduling task (policy calls, timer, tick hand-off);
//! - [`ticker`]: consumer-side handle, `Stream` impl, drop-cancels;
//! - [`builder`]: wiring of token, bus, runtime handle and channel;
//! - [`stop`]: one-shot stop state shared with cancellers;
//! - [`config`]: per-ticker settings.

mod actor;
mod builder;
mod config;
mod stop;
mod ticker;

pub use builder::TickerBuilder;
pub use config::TickerConfig;
pub use stop::Canceller;
pub use ticker::RetryTicker;
