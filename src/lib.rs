//! A success/failure container with chainable, short-circuiting combinators.
//!
//! [`Outcome<S, E>`](Outcome) holds either a `Success(S)` or a `Failure(E)`.
//! Chains built from [`then`](Outcome::then), [`then_with`](Outcome::then_with)
//! and [`then_try`](Outcome::then_try) stop doing work at the first failure
//! and carry that exact error to the end. The error type defaults to
//! [`BoxError`], which keeps identity and `source()` chains intact across
//! type-changing steps such as [`transform`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Same-Type Steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let r: Outcome<i32> = Outcome::success(42);
//! let chained = r
//!     .then(|i| i + 1)
//!     .then_with(|i| {
//!         if i > 40 {
//!             Outcome::success(i * 2)
//!         } else {
//!             Outcome::failure("value too small".into())
//!         }
//!     })
//!     .then(|i| i - 10);
//!
//! assert_eq!(chained.get_success(), 76);
//! ```
//!
//! ## Adapting Fallible Calls
//!
//! ```
//! use outcome_rail::{attempt, Outcome};
//!
//! let r = Outcome::<u16, &str>::success(80).then_try(8080, None);
//! assert_eq!(r.get_success(), 8080);
//!
//! let parsed = attempt("443".parse::<u16>());
//! assert!(parsed.is_success());
//! ```
//!
//! ## Keeping Error Identity
//!
//! ```
//! use outcome_rail::{transform, wrap, ErrorChainExt, Outcome};
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl core::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl core::error::Error for Timeout {}
//!
//! let failed: Outcome<u32> = Outcome::failure(wrap("fetching quota", Timeout));
//! let as_text = transform(failed, |n| n.to_string());
//!
//! let err = as_text.get_failure().unwrap();
//! assert!(err.is_caused_by::<Timeout>());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result, and Option
pub mod convert;
/// The Outcome container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for foreign types
pub mod traits;
/// The default error type and cause-chain helpers
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use outcome::{
    attempt, attempt_boxed, from_parts, transform, transform_with, IntoIter, Iter, Outcome,
};
pub use traits::*;
pub use types::{msg, wrap, BoxError, Causes, ErrorChainExt, WrappedError};
