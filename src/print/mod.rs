//! A minimal formatted output engine in the style of `printf`.
//!
//! # Method
//! Instead of a variadic argument list, callers pass a slice of [`Arg`]s, one per conversion
//! specifier, so a mismatched argument is reported as an error rather than being reinterpreted.
//! The [`printf!`](crate::printf), [`dprintf!`](crate::dprintf) and [`sprintf!`](crate::sprintf)
//! macros build that slice from plain values.
//!
//! Output goes to any [`Sink`]: a file descriptor, a fixed buffer or a growable byte
//! [`Vector`](crate::collections::contiguous::Vector).

mod arg;
mod digits;
mod engine;
mod error;
mod macros;
mod sink;
mod tests;

pub use arg::*;
pub use digits::*;
pub use engine::*;
pub use error::*;
pub use sink::*;
