//! This crate is a small foundational library: hand-written replacements for the standard
//! library's memory primitives, two growable generic collections and a `printf`-style output
//! engine.
//!
//! # Purpose
//! The collections are the core of the crate. [`Vector`](collections::contiguous::Vector) is a
//! contiguous growable array, growing by 1.5x. [`Deque`](collections::circ::Deque) is a double
//! ended queue over a circular buffer, growing by 2x, with `O(1)` pushes and pops at both ends and
//! `O(1)` rotation. The [`print`] module renders format strings into any byte [`Sink`](print::Sink).
//!
//! # Error Handling
//! Every operation that can fail, because of an allocation, an out-of-bounds index or a failed
//! write, returns a strongly typed [`Result`], using small structs that implement
//! [`Error`](std::error::Error) aggregated into enums for static dispatch. The collections also
//! provide panicking versions of the growing operations, because handling a capacity overflow on
//! every push isn't ergonomic. Accessors that may find nothing return [`Option`]s.
//!
//! A failed operation never leaves a collection in a partially modified state. In particular, a
//! failed reallocation keeps the original buffer and its contents.
//!
//! # Logging
//! Reallocations and aborted writes are reported through [`tracing`] at the `trace` and `debug`
//! levels. The crate never installs a subscriber itself.
//!
//! # Dependencies
//! The collections are built directly on the global allocator; this library doesn't use [`Vec`]
//! internally. The file descriptor sink relies on `libc` for `write(2)` and is gated behind the
//! `io` feature.
#![feature(strict_overflow_ops)]
#![feature(extend_one)]
#![feature(debug_closure_helpers)]
#![feature(raw_os_error_ty)]
#![feature(doc_cfg)]

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod bytes;
#[cfg(feature = "collections")]
pub mod collections;
pub mod print;

pub(crate) mod util;
