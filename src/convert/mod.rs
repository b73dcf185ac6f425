//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the
//! edges of a codebase: wrap a legacy `Result` on the way in, hand a plain
//! `Result` back to APIs (and to the `?` operator) on the way out.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let missing: Outcome<i32, &str> = option_to_outcome(None, "not found");
//! assert_eq!(outcome_to_result(missing), Err("not found"));
//! ```

use crate::outcome::core::Outcome;
use crate::outcome::ops::attempt;

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if result is `Ok`
/// * `Outcome::Failure(error)` if result is `Err`
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    attempt(result)
}

/// Converts an `Outcome` to a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(7)), Ok(7));
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("boom")), Err("boom"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(error) => Err(error),
    }
}

/// Converts an `Option` to an `Outcome`, using `error` when the option is empty.
///
/// `error` is dropped unused when the option holds a value.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
///
/// assert!(option_to_outcome(Some(1), "missing").is_success());
/// assert!(option_to_outcome(None::<i32>, "missing").is_failure());
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error),
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome_to_result(outcome)
    }
}

impl<S, E> Outcome<S, E> {
    /// Wraps a `Result` into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::from_result(Ok::<_, &str>(42));
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn from_result(result: Result<S, E>) -> Self {
        result_to_outcome(result)
    }

    /// Converts into a `Result`, ready for the `?` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn double(o: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
    ///     let value = o.into_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::success(21)), Ok(42));
    /// assert_eq!(double(Outcome::failure("boom")), Err("boom"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, E> {
        outcome_to_result(self)
    }

    /// Discards the error, keeping the success value as an `Option`.
    #[inline]
    pub fn ok(self) -> Option<S> {
        self.into_success()
    }
}
