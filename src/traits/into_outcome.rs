//! Extension trait for turning `Result` values into outcomes.
//!
//! This module provides [`IntoOutcome`], which lets a plain `Result` enter an
//! `Outcome` chain without naming the conversion function.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! fn load_port(raw: &str) -> Outcome<u16> {
//!     raw.trim().parse::<u16>().into_boxed_outcome()
//! }
//!
//! assert_eq!(load_port(" 8080 ").get_success(), 8080);
//! assert!(load_port("http").is_failure());
//! ```

use crate::outcome::core::Outcome;
use crate::outcome::ops::{attempt, attempt_boxed};
use crate::types::BoxError;

/// Extension trait for converting `Result` types into [`Outcome`]s.
///
/// # Examples
///
/// ## Keeping the Concrete Error
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
///
/// let parsed = "12".parse::<i32>().into_outcome().then(|n| n * 2);
/// assert_eq!(parsed.get_success(), 24);
/// ```
///
/// ## Boxing Into the Default Error Type
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
/// use outcome_rail::types::ErrorChainExt;
///
/// let parsed = "twelve".parse::<i32>().into_boxed_outcome();
/// let err = parsed.get_failure().unwrap();
/// assert!(err.is_caused_by::<std::num::ParseIntError>());
/// ```
pub trait IntoOutcome<T, E> {
    /// Converts into an `Outcome` with the same error type.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts into an `Outcome`, boxing the error into a [`BoxError`].
    fn into_boxed_outcome(self) -> Outcome<T, BoxError>
    where
        E: core::error::Error + Send + Sync + 'static;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        attempt(self)
    }

    #[inline]
    fn into_boxed_outcome(self) -> Outcome<T, BoxError>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        attempt_boxed(self)
    }
}
