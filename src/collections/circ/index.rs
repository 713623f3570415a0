//! Modular index arithmetic for circular buffers.
//!
//! Both helpers require `index < cap` and `n <= cap`, and never overflow, even for capacities
//! close to [`usize::MAX`].

/// Returns `(index + n) % cap`.
pub(crate) const fn wrap_add(index: usize, n: usize, cap: usize) -> usize {
    debug_assert!(index < cap && n <= cap);
    let until_end = cap - index;
    if n < until_end {
        index + n
    } else {
        n - until_end
    }
}

/// Returns `(index - n) mod cap`, treating the buffer as a ring.
pub(crate) const fn wrap_sub(index: usize, n: usize, cap: usize) -> usize {
    debug_assert!(index < cap && n <= cap);
    if n <= index {
        index - n
    } else {
        cap - (n - index)
    }
}
