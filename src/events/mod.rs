//! Ticker events: types and broadcast bus.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publisher**: the ticker's scheduling task (`core::actor::TickActor`).
//! - **Consumers**: anything holding [`Bus::subscribe`] (tests, metrics, log sinks).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
