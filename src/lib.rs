//! # retry-ticker
//!
//! **retry-ticker** schedules repeated attempts of an operation at times chosen
//! by a pluggable backoff policy. A [`RetryTicker`] delivers one tick per
//! attempt and closes when the policy gives up or when it is cancelled.
//!
//! The crate does not judge whether an attempt succeeded and does not compute
//! backoff curves: the caller decides when to stop consuming ticks, and the
//! policy is any type implementing [`Backoff`].
//!
//! ## Architecture
//! ```text
//!   caller                                  scheduling task (TickActor)
//! ┌────────────────────────┐              ┌───────────────────────────────┐
//! │ RetryTicker            │              │ (reset + first tick at spawn) │
//! │  ├─ tick() / Stream ◄──┼── slot(1) ◄──┼─ hand off tick                │
//! │  │                     │              │ wait until slot is free ◄─┐   │
//! │  ├─ cancel()  ─────────┼──► token ───►│ policy.next_delay()       │   │
//! │  └─ canceller() ───────┼──►   │       │   ├─ None    ─► close     │   │
//! │                        │      │       │   └─ Some(d) ─► sleep(d) ─┘   │
//! └────────────────────────┘      └──────►│ (both waits race the token)   │
//!                                         └──────────────┬────────────────┘
//!                                                        ▼
//!                                               Bus (optional events)
//! ```
//!
//! ### Lifecycle
//! ```text
//! RetryTicker::new(policy) ──► running ──► terminated
//!                                 │            ▲
//!                                 ├─ cancel() ─┤
//!                                 ├─ parent token cancelled
//!                                 ├─ handle dropped
//!                                 └─ next_delay() == None
//! ```
//!
//! ## Guarantees
//! - The first tick is delivered before the policy is consulted.
//! - `next_delay()` is called only after the previous tick was received.
//! - At most one tick is in flight; an unread tick parks the scheduling task.
//! - After `cancel()` returns, no further tick is yielded.
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                      |
//! |-------------------|----------------------------------------------------------|-----------------------------------------|
//! | **Ticker**        | Tick stream, cancellation, drop-cancels.                 | [`RetryTicker`], [`Canceller`]          |
//! | **Policies**      | Policy capability and trivial policies.                  | [`Backoff`], [`StopBackoff`], [`MaxRetries`] |
//! | **Configuration** | Name, event bus, parent token, runtime handle.           | [`TickerBuilder`], [`TickerConfig`]     |
//! | **Events**        | Lifecycle events over a broadcast bus.                   | [`Bus`], [`Event`], [`EventKind`]       |
//! | **Errors**        | Construction failures.                                   | [`TickerError`]                         |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retry_ticker::{BackoffExt, RetryTicker};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut ticker = RetryTicker::builder(Duration::from_millis(5).with_max_retries(3))
//!         .with_name("connect")
//!         .spawn()?;
//!
//!     let mut last_err = None;
//!     while let Some(_at) = ticker.tick().await {
//!         match connect() {
//!             Ok(()) => {
//!                 ticker.cancel();
//!                 last_err = None;
//!                 break;
//!             }
//!             Err(e) => last_err = Some(e),
//!         }
//!     }
//!
//!     // 1 first attempt + 3 retries, all failed
//!     assert_eq!(last_err, Some("refused"));
//!     Ok(())
//! }
//!
//! fn connect() -> Result<(), &'static str> {
//!     Err("refused")
//! }
//! ```
mod core;
mod error;
mod events;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{Canceller, RetryTicker, TickerBuilder, TickerConfig};
pub use error::TickerError;
pub use events::{Bus, Event, EventKind};
pub use policies::{Backoff, BackoffExt, MaxRetries, StopBackoff};
