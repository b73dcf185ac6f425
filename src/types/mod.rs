//! Supporting types: the default failure payload and allocation aliases.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{wrap, BoxError, ErrorChainExt};
//!
//! let root: BoxError = "connection refused".into();
//! let err = wrap("fetching profile", root);
//!
//! assert_eq!(err.causes().count(), 2);
//! assert_eq!(err.root_cause().to_string(), "connection refused");
//! ```

pub mod alloc_type;
pub mod error;

pub use error::*;
