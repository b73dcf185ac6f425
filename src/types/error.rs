//! The default failure type and helpers for walking error chains.
//!
//! [`Outcome`](crate::Outcome) carries a [`BoxError`] unless told otherwise.
//! Wrapping an error with [`wrap`] keeps the original reachable through
//! [`Error::source`], so callers can still find it after any number of
//! layers with [`ErrorChainExt::find_cause`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::error::{wrap, ErrorChainExt};
//!
//! #[derive(Debug, PartialEq)]
//! struct NotFound;
//!
//! impl core::fmt::Display for NotFound {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str("not found")
//!     }
//! }
//!
//! impl core::error::Error for NotFound {}
//!
//! let err = wrap("loading user", NotFound);
//! assert_eq!(err.to_string(), "loading user: not found");
//! assert!(err.is_caused_by::<NotFound>());
//! ```

use core::error::Error;
use core::fmt;
use core::iter::FusedIterator;

use crate::types::alloc_type::{Box, Cow, String};

/// Type-erased, thread-safe error used as the default failure payload.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Builds a plain message error.
///
/// # Examples
///
/// ```
/// use outcome_rail::types::error::msg;
///
/// let err = msg("value too small");
/// assert_eq!(err.to_string(), "value too small");
/// ```
#[inline]
pub fn msg<M: Into<String>>(message: M) -> BoxError {
    let message: String = message.into();
    BoxError::from(message)
}

/// Wraps `cause` under `message`, returning the result as a [`BoxError`].
///
/// Shorthand for boxing a [`WrappedError`].
#[inline]
pub fn wrap<M, C>(message: M, cause: C) -> BoxError
where
    M: Into<Cow<'static, str>>,
    C: Into<BoxError>,
{
    Box::new(WrappedError::new(message, cause))
}

/// An error annotated with a message, keeping the original as its source.
///
/// Displays as `"{message}: {cause}"`.
#[derive(Debug)]
pub struct WrappedError {
    message: Cow<'static, str>,
    cause: BoxError,
}

impl WrappedError {
    /// Creates a new wrapper around `cause`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::error::Error;
    /// use outcome_rail::types::error::WrappedError;
    ///
    /// let err = WrappedError::new("reading config", "file missing");
    /// assert_eq!(err.message(), "reading config");
    /// assert_eq!(err.source().unwrap().to_string(), "file missing");
    /// ```
    pub fn new<M, C>(message: M, cause: C) -> Self
    where
        M: Into<Cow<'static, str>>,
        C: Into<BoxError>,
    {
        Self { message: message.into(), cause: cause.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Drops the message and returns the wrapped error.
    #[inline]
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.cause)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

/// Iterator over an error followed by each of its sources.
///
/// Created by [`ErrorChainExt::causes`].
#[derive(Clone)]
pub struct Causes<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Causes<'_> {}

/// Cause-chain inspection for errors, including the boxed default failure type.
pub trait ErrorChainExt {
    /// Views this error as a plain trait object.
    fn as_dyn_error(&self) -> &(dyn Error + 'static);

    /// Iterates over this error and then every error in its `source()` chain.
    fn causes(&self) -> Causes<'_> {
        Causes { next: Some(self.as_dyn_error()) }
    }

    /// Returns the first error in the chain that is a `T`.
    fn find_cause<T: Error + 'static>(&self) -> Option<&T> {
        self.causes().find_map(|err| err.downcast_ref::<T>())
    }

    /// Returns `true` if any error in the chain is a `T`.
    fn is_caused_by<T: Error + 'static>(&self) -> bool {
        self.find_cause::<T>().is_some()
    }

    /// The innermost error of the chain.
    fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut current = self.as_dyn_error();
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl<E: Error + 'static> ErrorChainExt for E {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChainExt for dyn Error + 'static {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChainExt for dyn Error + Send + Sync + 'static {
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}
