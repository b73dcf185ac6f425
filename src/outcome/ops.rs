//! Free-function combinators that may change the success type.
//!
//! Every same-type method on [`Outcome`] is a thin wrapper over one of these
//! with `NS = S`. On failure the error value is moved into the new outcome
//! as-is, so a [`BoxError`](crate::types::BoxError) keeps its heap identity
//! and its `source()` chain across any number of type changes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::ops::{attempt, transform, transform_with};
//! use outcome_rail::Outcome;
//!
//! let parsed = attempt("42".parse::<i32>()).map_failure(|e| e.to_string());
//! let label = transform(parsed, |n| format!("#{n}"));
//! let checked = transform_with(label, |s| {
//!     if s.len() < 5 {
//!         Outcome::success(s)
//!     } else {
//!         Outcome::failure("label too long".to_string())
//!     }
//! });
//!
//! assert_eq!(checked.get_success(), "#42");
//! ```

use crate::outcome::core::Outcome;
use crate::types::alloc_type::Box;
use crate::types::BoxError;

/// Maps the success value of `outcome` with `f`, possibly changing its type.
///
/// On failure `f` is not called and the original error is carried over.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::ops::transform;
/// use outcome_rail::Outcome;
///
/// let r = Outcome::<i32, &str>::success(42);
/// let t = transform(r, |i| char::from(i as u8).to_string());
/// assert_eq!(t, Outcome::Success("*".to_string()));
///
/// let r = Outcome::<i32, &str>::failure("boom");
/// let t = transform(r, |i| i.to_string());
/// assert_eq!(t, Outcome::Failure("boom"));
/// ```
#[inline]
pub fn transform<S, NS, E, F>(outcome: Outcome<S, E>, f: F) -> Outcome<NS, E>
where
    F: FnOnce(S) -> NS,
{
    match outcome {
        Outcome::Success(value) => Outcome::Success(f(value)),
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Chains a step that returns its own outcome, possibly changing the success type.
///
/// On success the outcome produced by `f` is returned directly, so no nested
/// `Outcome<Outcome<..>>` is ever built. On failure `f` is not called.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::ops::transform_with;
/// use outcome_rail::Outcome;
///
/// let r = Outcome::<i32, &str>::success(42);
/// let t = transform_with(r, |i| Outcome::success(format!("value: {i}")));
/// assert_eq!(t.get_success(), "value: 42");
///
/// let r = Outcome::<i32, &str>::success(42);
/// let t: Outcome<String, &str> = transform_with(r, |_| Outcome::failure("function error"));
/// assert_eq!(t.get_failure(), Some(&"function error"));
/// ```
#[inline]
pub fn transform_with<S, NS, E, F>(outcome: Outcome<S, E>, f: F) -> Outcome<NS, E>
where
    F: FnOnce(S) -> Outcome<NS, E>,
{
    match outcome {
        Outcome::Success(value) => f(value),
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Builds an outcome from a value and an optional error.
///
/// `Some(error)` wins: the value is dropped and a failure is returned.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::ops::from_parts;
/// use outcome_rail::Outcome;
///
/// assert_eq!(from_parts::<_, &str>(42, None), Outcome::Success(42));
/// assert_eq!(from_parts(0, Some("test error")), Outcome::Failure("test error"));
/// ```
#[inline]
pub fn from_parts<S, E>(value: S, error: Option<E>) -> Outcome<S, E> {
    match error {
        Some(error) => Outcome::Failure(error),
        None => Outcome::Success(value),
    }
}

/// Adapts the result of a fallible call at the call site.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::ops::attempt;
///
/// let port = attempt("8080".parse::<u16>());
/// assert_eq!(port.get_success(), 8080);
///
/// let bad = attempt("http".parse::<u16>());
/// assert!(bad.is_failure());
/// ```
#[inline]
pub fn attempt<S, E>(result: Result<S, E>) -> Outcome<S, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error),
    }
}

/// Like [`attempt`], boxing a concrete error into a [`BoxError`].
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::ops::attempt_boxed;
/// use outcome_rail::types::ErrorChainExt;
/// use outcome_rail::Outcome;
///
/// let bad: Outcome<u16> = attempt_boxed("http".parse::<u16>());
/// let err = bad.get_failure().unwrap();
/// assert!(err.is_caused_by::<std::num::ParseIntError>());
/// ```
#[inline]
pub fn attempt_boxed<S, E>(result: Result<S, E>) -> Outcome<S, BoxError>
where
    E: core::error::Error + Send + Sync + 'static,
{
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(Box::new(error)),
    }
}
