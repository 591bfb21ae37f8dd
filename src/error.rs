//! Error types used by the retry ticker.
//!
//! The ticker has almost no failure modes of its own: policy exhaustion and
//! cancellation are normal terminations surfaced as stream closure. The only
//! error is the inability to schedule the background task, reported by
//! [`TickerError`] at construction time.

use thiserror::Error;

/// # Errors produced when starting a ticker.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TickerError {
    /// No tokio runtime was available to spawn the scheduling task on.
    ///
    /// Raised by [`TickerBuilder::spawn`](crate::TickerBuilder::spawn) when called
    /// outside a runtime context without an explicit
    /// [`with_handle`](crate::TickerBuilder::with_handle).
    #[error("no tokio runtime available to schedule ticker {name:?}")]
    NoRuntime {
        /// Name of the ticker that failed to start.
        name: String,
    },
}

impl TickerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use retry_ticker::TickerError;
    ///
    /// let err = TickerError::NoRuntime { name: "fetch".into() };
    /// assert_eq!(err.as_label(), "ticker_no_runtime");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TickerError::NoRuntime { .. } => "ticker_no_runtime",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_ticker() {
        let err = TickerError::NoRuntime {
            name: "db-connect".into(),
        };
        assert_eq!(
            err.to_string(),
            "no tokio runtime available to schedule ticker \"db-connect\""
        );
    }
}
