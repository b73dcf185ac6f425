#[cfg(feature = "std")]
pub use std::borrow::Cow;
#[cfg(not(feature = "std"))]
pub use alloc::borrow::Cow;

#[cfg(feature = "std")]
pub use std::boxed::Box;
#[cfg(not(feature = "std"))]
pub use alloc::boxed::Box;

#[cfg(feature = "std")]
pub use std::string::String;
#[cfg(not(feature = "std"))]
pub use alloc::string::String;
