//! Tracing integration for outcome-rail.
//!
//! This module logs failures flowing through an `Outcome` chain with the
//! `tracing` ecosystem. Logging never changes the outcome: every method
//! returns its receiver as-is.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::Span;

use crate::outcome::core::Outcome;

/// Extension trait that records outcomes as `tracing` events.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::OutcomeTracingExt;
///
/// fn load_user(id: u64) -> Outcome<User> {
///     fetch(id)
///         .then_with(decode)
///         .trace_failure("load_user")
/// }
/// ```
pub trait OutcomeTracingExt: Sized {
    /// Emits a `WARN` event if the outcome is a failure.
    fn trace_failure(self, operation: &str) -> Self;

    /// Emits a `DEBUG` event on success and a `WARN` event on failure.
    fn trace_outcome(self, operation: &str) -> Self;

    /// Like [`trace_failure`](Self::trace_failure), recorded inside `span`.
    fn trace_in_span(self, span: &Span, operation: &str) -> Self {
        span.in_scope(|| self.trace_failure(operation))
    }
}

impl<S, E: Display> OutcomeTracingExt for Outcome<S, E> {
    fn trace_failure(self, operation: &str) -> Self {
        if let Outcome::Failure(error) = &self {
            tracing::warn!(operation, error = %error, "operation failed");
        }
        self
    }

    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(_) => tracing::debug!(operation, "operation succeeded"),
            Outcome::Failure(error) => {
                tracing::warn!(operation, error = %error, "operation failed")
            }
        }
        self
    }
}
