//! Growable generic collection types.
//!
//! # Purpose
//! Both collections own exactly one allocation, obtained through the same fallible raw buffer.
//! Every operation that can fail has a `try_` form returning a [`Result`], alongside a panicking
//! form for callers that would rather not handle capacity overflow on every push.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which provides most read-only functionality. [`Deque`](circ::Deque) can't, because
//! its elements may wrap around the end of its buffer.

#[cfg(feature = "circ")]
#[doc(cfg(feature = "circ"))]
pub mod circ;
#[cfg(feature = "contiguous")]
#[doc(cfg(feature = "contiguous"))]
pub mod contiguous;

pub(crate) mod raw;

pub use crate::util::error::{
    AllocError, CapacityOverflow, IndexOutOfBounds, InsertError, ReserveError,
};
