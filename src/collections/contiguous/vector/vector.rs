use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use tracing::trace;

use crate::collections::raw::RawBuf;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InsertError, ReserveError};
use crate::util::result::ResultExtension;

/// The capacity used when a Vector is created with a requested capacity of 0, and the capacity
/// that an unallocated Vector grows to.
pub const DEFAULT_CAP: usize = 8;

/// Beyond this capacity, 1.5x growth could wrap around, so growing is refused instead.
const MAX_GROWABLE_CAP: usize = usize::MAX / 2;

/// A variable size contiguous collection, backed by a single owned allocation.
///
/// The capacity is tracked separately from the length and grows by a factor of 1.5 whenever an
/// element is added to a full Vector.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `clear` | `O(n)`*** |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
///
/// \*** `O(1)` for types without drop glue.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated on the first
    /// push, which grows the Vector to [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, or [`DEFAULT_CAP`]
    /// if `cap` is 0.
    ///
    /// # Errors
    /// Fails if the allocation would exceed [`isize::MAX`] bytes or the allocator can't provide it.
    pub fn try_with_cap(cap: usize) -> Result<Vector<T>, ReserveError> {
        let cap = if cap == 0 { DEFAULT_CAP } else { cap };
        Ok(Vector {
            buf: RawBuf::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, or [`DEFAULT_CAP`]
    /// if `cap` is 0.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// assert_eq!(Vector::<u8>::with_cap(0).cap(), 8);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value provided to
    /// [`with_cap`](Vector::with_cap) or [`reserve`](Vector::reserve), or the result of the
    /// growth policy.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds. The
    /// borrow checker prevents the reference from outliving any reallocation.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.deref().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.deref_mut().get_mut(index)
    }

    /// Overwrites the element at `index` with `value`, returning the previous element. The length
    /// of the Vector is never changed.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, in which case `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.set(1, 10), Ok(1));
    /// assert!(vec.set(3, 30).is_err());
    /// assert_eq!(&*vec, &[0, 10, 2]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(IndexOutOfBounds { index, len }),
        }
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Errors
    /// Fails if growing is required and the new capacity overflows or can't be allocated. The
    /// Vector is left unchanged in that case.
    pub fn try_push(&mut self, value: T) -> Result<(), ReserveError> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the Vector needs to grow and can't.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`. Using this method on a full Vector is
    /// undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.buf.slot(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: The slot at the old last index is initialized and is now past len, so it is
            // read exactly once.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, growing and shifting items as necessary.
    /// Inserting at `len` is equivalent to a push.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, or a growth error if the Vector is full and
    /// can't grow. The Vector is left unchanged on error.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len })?
        }

        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: index <= len < cap, so both the shifted range and the destination slot lie
        // within the allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts the provided value at the given index, growing and shifting items as necessary.
    ///
    /// # Panics
    /// Panics if `index > len` or the Vector needs to grow and can't.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot is initialized and the tail being shifted down is in
        // bounds. The removed value is read before it is overwritten.
        unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`. Unlike [`Vec::reserve`],
    /// `new_cap` is the total capacity, not an additional amount.
    ///
    /// # Errors
    /// Fails if `new_cap` elements would exceed [`isize::MAX`] bytes or can't be allocated. The
    /// Vector is left unchanged on error.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap <= self.cap() {
            return Ok(());
        }

        self.realloc_with_cap(new_cap)
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`.
    ///
    /// # Panics
    /// Panics if the new allocation can't be made.
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).throw()
    }

    /// Drops all elements in the Vector, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so a panicking drop can't lead to a double drop.
        self.len = 0;

        // SAFETY: The first len slots were initialized and are no longer reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot(0), len));
        }
    }

    /// Reallocates the buffer with exactly `new_cap` slots, moving the existing elements across.
    /// The old buffer is only released once the new one has been filled.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        debug_assert!(new_cap >= self.len);

        let new_buf = RawBuf::try_with_cap(new_cap)?;
        // SAFETY: Both buffers can hold len elements, they are distinct allocations and the first
        // len slots of the old buffer are initialized. Dropping the old RawBuf doesn't drop them.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(0), new_buf.slot(0), self.len);
        }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "vector reallocated");
        self.buf = new_buf;
        Ok(())
    }

    /// Grows the buffer to allow for the insertion of additional elements, following
    /// [`next_cap`]. After calling this, the Vector can take at least one more element.
    pub(crate) fn try_grow(&mut self) -> Result<(), ReserveError> {
        let new_cap = next_cap(self.cap())?;
        self.realloc_with_cap(new_cap)
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len
            }).throw()
        }
    }
}

impl<T: Copy> Vector<T> {
    /// Appends a copy of every element in `values`, reserving once up front.
    ///
    /// # Errors
    /// Fails if the required capacity can't be allocated. Nothing is appended in that case.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), ReserveError> {
        let required = self.len.checked_add(values.len()).ok_or(CapacityOverflow)?;
        if required > self.cap() {
            let mut new_cap = self.cap();
            while new_cap < required {
                new_cap = next_cap(new_cap)?;
            }
            self.realloc_with_cap(new_cap)?;
        }

        // SAFETY: There is capacity for values.len() more elements and values is a separate
        // borrow, so the regions can't overlap.
        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr(), self.buf.slot(self.len), values.len());
        }
        self.len = required;
        Ok(())
    }

    /// Appends a copy of every element in `values`.
    ///
    /// # Panics
    /// Panics if the required capacity can't be allocated.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        self.try_extend_from_slice(values).throw()
    }
}

/// Computes the capacity that a full Vector of capacity `cap` grows to: 1.5x, rounded up so that
/// it always increases, or [`DEFAULT_CAP`] for an unallocated Vector.
///
/// # Errors
/// Returns [`CapacityOverflow`] if `cap` is more than half of [`usize::MAX`].
///
/// # Examples
/// ```
/// # use foundation_lib::collections::contiguous::next_cap;
/// assert_eq!(next_cap(0), Ok(8));
/// assert_eq!(next_cap(1), Ok(2));
/// assert_eq!(next_cap(8), Ok(12));
/// assert!(next_cap(usize::MAX).is_err());
/// ```
pub const fn next_cap(cap: usize) -> Result<usize, CapacityOverflow> {
    if cap == 0 {
        return Ok(DEFAULT_CAP);
    }
    if cap > MAX_GROWABLE_CAP {
        return Err(CapacityOverflow);
    }

    let half = cap / 2;
    Ok(cap + if half == 0 { 1 } else { half })
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }

    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(self.len.strict_add(additional));
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        // Implicitly drop self.buf, which deallocates the memory without touching the slots.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when dangling for an empty Vector.
        unsafe { slice::from_raw_parts(self.buf.slot(0), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusivity guaranteed by the &mut self borrow.
        unsafe { slice::from_raw_parts_mut(self.buf.slot(0), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors uniquely own their allocation and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl TryFrom<Vector<u8>> for String {
    type Error = std::string::FromUtf8Error;

    fn try_from(value: Vector<u8>) -> Result<Self, Self::Error> {
        String::from_utf8(value.to_vec())
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
