//! Contiguous collections, storing their elements in a single allocation.

pub mod vector;

#[doc(inline)]
pub use vector::{DEFAULT_CAP, Vector, next_cap};
