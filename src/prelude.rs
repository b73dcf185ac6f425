//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     raw.parse::<u8>().into_boxed_outcome()
//! }
//!
//! let age = parse_age("30").then(|a| a + 2);
//! assert_eq!(age.get_success(), 32);
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`BoxError`], [`WrappedError`]
//! - **Functions**: [`attempt`], [`attempt_boxed`], [`from_parts`], [`transform`],
//!   [`transform_with`], [`msg`], [`wrap`]
//! - **Traits**: [`IntoOutcome`], [`ErrorChainExt`]

pub use crate::outcome::{attempt, attempt_boxed, from_parts, transform, transform_with, Outcome};
pub use crate::traits::IntoOutcome;
pub use crate::types::{msg, wrap, BoxError, ErrorChainExt, WrappedError};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTracingExt;
