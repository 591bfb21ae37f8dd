//! Backoff policies.
//!
//! The ticker only **consumes** policies; it does not compute backoff curves.
//!
//! ## Contents
//! - [`Backoff`] the capability a ticker consumes (`next_delay` / `reset`)
//! - [`StopBackoff`] stops right away (exactly one tick)
//! - [`MaxRetries`], [`BackoffExt`] caps any policy at `n` retries
//!
//! `Duration` implements [`Backoff`] as a constant delay and `()` as a zero delay.
//!
//! ## Quick wiring
//! ```text
//! RetryTicker::new(policy)
//!      └─► core::actor::TickActor
//!           - policy.reset()          once, before the first tick
//!           - policy.next_delay()     after each accepted tick
//!               ├─ Some(d) ─► sleep(d) (cancellable) ─► next tick
//!               └─ None    ─► close the stream
//! ```

mod backoff;
mod max_retries;

pub use backoff::{Backoff, StopBackoff};
pub use max_retries::{BackoffExt, MaxRetries};
