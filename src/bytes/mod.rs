//! Byte-level memory primitives.
//!
//! These are the slice-checked counterparts of `memcpy`, `memmove`, `memset`, `bzero`, `memcmp`
//! and `memchr`. Every function takes its bounds from the slices it is given, so none of them can
//! read or write outside of the memory the caller borrowed.


use std::cmp::{self, Ordering};
use std::ops::Range;
use std::ptr;

use crate::util::error::IndexOutOfBounds;

/// Copies as many bytes as fit from `src` into the start of `dst`, returning the number of bytes
/// copied. The two slices can't overlap, which the borrow checker already guarantees.
///
/// # Examples
/// ```
/// # use foundation_lib::bytes;
/// let mut dst = [0_u8; 4];
/// assert_eq!(bytes::copy(&mut dst, b"hello"), 4);
/// assert_eq!(&dst, b"hell");
/// ```
pub fn copy(dst: &mut [u8], src: &[u8]) -> usize {
    let count = cmp::min(dst.len(), src.len());
    // SAFETY: Both pointers are valid for count bytes and come from distinct borrows.
    unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr(), count); }
    count
}

/// Moves the bytes in `src` to start at `dest` within the same buffer. The ranges are allowed to
/// overlap.
///
/// # Errors
/// Returns [`IndexOutOfBounds`] if either `src` or the destination range falls outside of `buf`.
///
/// # Examples
/// ```
/// # use foundation_lib::bytes;
/// let mut buf = *b"abcdef";
/// bytes::move_within(&mut buf, 0..4, 2).unwrap();
/// assert_eq!(&buf, b"ababcd");
/// ```
pub fn move_within(buf: &mut [u8], src: Range<usize>, dest: usize) -> Result<(), IndexOutOfBounds> {
    let len = buf.len();
    if src.start > src.end || src.end > len {
        return Err(IndexOutOfBounds { index: src.end, len });
    }

    let count = src.end - src.start;
    match dest.checked_add(count) {
        Some(end) if end <= len => {},
        _ => return Err(IndexOutOfBounds { index: dest.saturating_add(count), len }),
    }

    // SAFETY: Both ranges have been checked to lie within buf, and ptr::copy handles overlap.
    unsafe {
        let base = buf.as_mut_ptr();
        ptr::copy(base.add(src.start), base.add(dest), count);
    }
    Ok(())
}

/// Sets every byte of `buf` to `byte`.
pub fn fill(buf: &mut [u8], byte: u8) {
    // SAFETY: buf is valid for writes of buf.len() bytes.
    unsafe { ptr::write_bytes(buf.as_mut_ptr(), byte, buf.len()); }
}

/// Sets every byte of `buf` to zero.
pub fn zero(buf: &mut [u8]) {
    fill(buf, 0);
}

/// Compares the first `n` bytes of `a` and `b` as unsigned values. Bytes past the end of the
/// shorter slice are never read, a slice that runs out first compares as less.
///
/// # Examples
/// ```
/// # use foundation_lib::bytes;
/// # use std::cmp::Ordering;
/// assert_eq!(bytes::compare(b"abcx", b"abcy", 3), Ordering::Equal);
/// assert_eq!(bytes::compare(b"ab\x80", b"ab\x01", 3), Ordering::Greater);
/// ```
pub fn compare(a: &[u8], b: &[u8], n: usize) -> Ordering {
    let a = &a[..cmp::min(n, a.len())];
    let b = &b[..cmp::min(n, b.len())];

    for (x, y) in a.iter().zip(b) {
        if x != y {
            return x.cmp(y);
        }
    }
    a.len().cmp(&b.len())
}

/// Returns the index of the first occurrence of `byte` within `buf`.
pub fn find(buf: &[u8], byte: u8) -> Option<usize> {
    buf.iter().position(|b| *b == byte)
}
