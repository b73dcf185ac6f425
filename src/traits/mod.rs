//! Extension traits that bring foreign types into `Outcome` chains.
//!
//! - [`IntoOutcome`]: converts a `Result` into an [`Outcome`](crate::Outcome)
//!
//! Cause-chain inspection lives with the error type in
//! [`types::error`](crate::types::error).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! let outcome = Ok::<i32, &str>(41).into_outcome().then(|n| n + 1);
//! assert_eq!(outcome.get_success(), 42);
//! ```

pub mod into_outcome;

pub use into_outcome::IntoOutcome;
