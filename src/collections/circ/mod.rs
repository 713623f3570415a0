//! Circular collections, storing their elements in a ring buffer.
//!
//! [`Deque`] is the only type here so far. Borrowed and owned iteration are provided by [`Iter`]
//! and [`IntoIter`].

mod deque;
mod index;
mod iter;

pub use deque::*;
pub use iter::*;
