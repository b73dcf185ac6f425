//! The [`Outcome`] container and its combinators.
//!
//! An [`Outcome`] is either a `Success` carrying a value or a `Failure`
//! carrying an error, never both. Combinators consume the receiver and
//! return a fresh outcome; a failure flows through every later step
//! unchanged.
//!
//! # Key Components
//!
//! - [`Outcome`] - The container, with same-type chaining methods
//! - [`ops`] - Free functions that change the success type or adapt fallible calls
//! - Iterator adapters and short-circuiting `collect`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::{attempt, Outcome};
//!
//! let total = attempt("42".parse::<i32>().map_err(|_| "not a number"))
//!     .then(|n| n + 1)
//!     .then_with(|n| {
//!         if n > 40 {
//!             Outcome::success(n * 2)
//!         } else {
//!             Outcome::failure("value too small")
//!         }
//!     })
//!     .then(|n| n - 10);
//!
//! assert_eq!(total.get_success(), 76);
//! ```
pub mod core;
pub mod iter;
pub mod ops;

pub use self::core::*;
pub use self::iter::*;
pub use self::ops::*;
