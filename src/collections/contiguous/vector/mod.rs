//! A module containing [`Vector`] and associated types.
//!
//! [`IntoIter`] provides owned iteration over a Vector. [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration, through the
//! Vector's [`Deref`](std::ops::Deref) implementation.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
