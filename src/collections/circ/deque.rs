use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::ptr;

use tracing::trace;

use super::index::{wrap_add, wrap_sub};
use super::Iter;
use crate::collections::raw::RawBuf;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ReserveError};
use crate::util::result::ResultExtension;

/// The capacity used when a Deque is created with a requested capacity of 0, and the capacity
/// that an unallocated Deque grows to.
pub const DEFAULT_CAP: usize = 8;

/// A double-ended queue, stored as a circular buffer with independent head and tail cursors.
///
/// The element at logical index `i` lives in the physical slot `(head + i) % cap`. Pushing and
/// popping at either end only moves a cursor, and so does rotating the queue by one element. The
/// capacity doubles whenever an element is added to a full Deque.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `front` / `back` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)`*, `O(n)` |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `rotate` / `rrotate` | `O(1)` |
/// | `clear` | `O(n)`** |
///
/// \* If the Deque is full, the push reallocates and takes `O(n)`.
///
/// \** `O(1)` for types without drop glue.
pub struct Deque<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
}

impl<T> Deque<T> {
    /// Creates a new Deque with length and capacity 0. Memory will be allocated on the first push.
    pub const fn new() -> Deque<T> {
        Deque {
            buf: RawBuf::new(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates a new Deque with capacity exactly equal to the provided value, or [`DEFAULT_CAP`]
    /// if `cap` is 0.
    ///
    /// # Errors
    /// Fails if the allocation would exceed [`isize::MAX`] bytes or the allocator can't provide it.
    pub fn try_with_cap(cap: usize) -> Result<Deque<T>, ReserveError> {
        let cap = if cap == 0 { DEFAULT_CAP } else { cap };
        Ok(Deque {
            buf: RawBuf::try_with_cap(cap)?,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Creates a new Deque with capacity exactly equal to the provided value, or [`DEFAULT_CAP`]
    /// if `cap` is 0.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or allocation fails.
    pub fn with_cap(cap: usize) -> Deque<T> {
        Self::try_with_cap(cap).throw()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next push will have to reallocate. An unallocated Deque is full.
    pub const fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Pushes a value onto the back of the Deque, growing it if required.
    ///
    /// # Errors
    /// Fails if the Deque is full and doubling its capacity overflows or can't be allocated. The
    /// Deque is left unchanged in that case.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ReserveError> {
        if self.is_full() {
            self.try_grow()?;
        }

        // SAFETY: The Deque isn't full, so the slot at tail is unoccupied and within the buffer.
        unsafe { self.buf.slot(self.tail).write(value); }
        self.tail = wrap_add(self.tail, 1, self.cap());
        self.len += 1;
        Ok(())
    }

    /// Pushes a value onto the back of the Deque, growing it if required.
    ///
    /// # Panics
    /// Panics if the Deque needs to grow and can't.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::circ::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw()
    }

    /// Pushes a value onto the front of the Deque, growing it if required.
    ///
    /// # Errors
    /// Fails if the Deque is full and doubling its capacity overflows or can't be allocated. The
    /// Deque is left unchanged in that case.
    pub fn try_push_front(&mut self, value: T) -> Result<(), ReserveError> {
        if self.is_full() {
            self.try_grow()?;
        }

        self.head = wrap_sub(self.head, 1, self.cap());
        // SAFETY: The Deque wasn't full, so the slot before the old head is unoccupied.
        unsafe { self.buf.slot(self.head).write(value); }
        self.len += 1;
        Ok(())
    }

    /// Pushes a value onto the front of the Deque, growing it if required.
    ///
    /// # Panics
    /// Panics if the Deque needs to grow and can't.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::circ::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// assert_eq!(deque.front(), Some(&2));
    /// assert_eq!(deque.back(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw()
    }

    /// Removes and returns the front element, or [`None`] if the Deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: The Deque isn't empty, so the slot at head is initialized. It is read once and
        // then left behind by the cursor.
        let value = unsafe { self.buf.slot(self.head).read() };
        self.head = wrap_add(self.head, 1, self.cap());
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the back element, or [`None`] if the Deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.tail = wrap_sub(self.tail, 1, self.cap());
        self.len -= 1;
        // SAFETY: The slot before the old tail held the last element and is now outside of the
        // occupied range, so it is read exactly once.
        Some(unsafe { self.buf.slot(self.tail).read() })
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Returns a reference to the element at the logical `index`, counted from the front.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::circ::Deque;
    /// let mut deque: Deque<_> = (1..=3).collect();
    /// deque.push_front(0);
    /// assert_eq!(deque.get(0), Some(&0));
    /// assert_eq!(deque.get(3), Some(&3));
    /// assert_eq!(deque.get(4), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, so the physical slot is initialized.
        Some(unsafe { &*self.buf.slot(self.physical(index)) })
    }

    /// Returns a mutable reference to the element at the logical `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, so the physical slot is initialized. Exclusivity follows from
        // &mut self.
        Some(unsafe { &mut *self.buf.slot(self.physical(index)) })
    }

    /// Exchanges the two front-most elements. Does nothing if there are fewer than two.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::circ::Deque;
    /// let mut deque: Deque<_> = [1, 2, 3].into_iter().collect();
    /// deque.swap();
    /// assert_eq!(deque, [2, 1, 3].into_iter().collect());
    /// ```
    pub fn swap(&mut self) {
        if self.len < 2 {
            return;
        }

        // SAFETY: Logical indices 0 and 1 are initialized and map to distinct physical slots.
        unsafe {
            ptr::swap_nonoverlapping(
                self.buf.slot(self.physical(0)),
                self.buf.slot(self.physical(1)),
                1,
            );
        }
    }

    /// Moves the front element to the back. Does nothing if there are fewer than two elements.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::circ::Deque;
    /// let mut deque: Deque<_> = [1, 2, 3].into_iter().collect();
    /// deque.rotate();
    /// assert_eq!(deque, [2, 3, 1].into_iter().collect());
    /// ```
    pub fn rotate(&mut self) {
        if self.len <= 1 {
            return;
        }

        // When the buffer is full, head and tail are the same slot and the copy is a no-op.
        // SAFETY: head is initialized and tail is either unoccupied or head itself.
        unsafe { ptr::copy(self.buf.slot(self.head), self.buf.slot(self.tail), 1); }
        self.head = wrap_add(self.head, 1, self.cap());
        self.tail = wrap_add(self.tail, 1, self.cap());
    }

    /// Moves the back element to the front, undoing a [`rotate`](Deque::rotate). Does nothing if
    /// there are fewer than two elements.
    ///
    /// # Examples
    /// ```
    /// # use foundation_lib::collections::circ::Deque;
    /// let mut deque: Deque<_> = [1, 2, 3].into_iter().collect();
    /// deque.rrotate();
    /// assert_eq!(deque, [3, 1, 2].into_iter().collect());
    /// ```
    pub fn rrotate(&mut self) {
        if self.len <= 1 {
            return;
        }

        let cap = self.cap();
        let last = wrap_sub(self.tail, 1, cap);
        self.head = wrap_sub(self.head, 1, cap);
        self.tail = last;
        // SAFETY: last holds the back element. The new head is either unoccupied or, for a full
        // buffer, the same slot as last.
        unsafe { ptr::copy(self.buf.slot(last), self.buf.slot(self.head), 1); }
    }

    /// Returns an iterator over the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Drops all elements and resets both cursors, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        let (front, back) = self.runs();
        let head = self.head;
        // Reset first, so a panicking drop can't lead to a double drop.
        self.head = 0;
        self.tail = 0;
        self.len = 0;

        // SAFETY: The two runs cover exactly the previously initialized slots, which are no longer
        // reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot(head), front));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot(0), back));
        }
    }

    /// Maps a logical index to its physical slot.
    pub(crate) const fn physical(&self, index: usize) -> usize {
        wrap_add(self.head, index, self.cap())
    }

    /// Returns the number of elements stored from head to the end of the buffer and the number
    /// that wrapped around to the start.
    pub(crate) fn runs(&self) -> (usize, usize) {
        let front = cmp::min(self.len, self.cap() - self.head);
        (front, self.len - front)
    }

    /// Doubles the capacity of the buffer, moving the elements into logical order at the start
    /// of the new allocation. The old buffer is only released once the new one has been filled.
    pub(crate) fn try_grow(&mut self) -> Result<(), ReserveError> {
        let new_cap = next_cap(self.cap())?;
        let new_buf = RawBuf::try_with_cap(new_cap)?;
        let (front, back) = self.runs();

        // SAFETY: The runs are initialized in the old buffer, the new buffer has room for len
        // elements and the two allocations are distinct. Dropping the old RawBuf doesn't drop
        // the moved values.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(self.head), new_buf.slot(0), front);
            ptr::copy_nonoverlapping(self.buf.slot(0), new_buf.slot(front), back);
        }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "deque reallocated");
        self.buf = new_buf;
        self.head = 0;
        self.tail = self.len;
        Ok(())
    }
}

/// Computes the capacity that a full Deque of capacity `cap` grows to: double, or
/// [`DEFAULT_CAP`] for an unallocated Deque.
///
/// # Errors
/// Returns [`CapacityOverflow`] if doubling overflows [`usize`].
pub const fn next_cap(cap: usize) -> Result<usize, CapacityOverflow> {
    if cap == 0 {
        return Ok(DEFAULT_CAP);
    }
    match cap.checked_mul(2) {
        Some(new_cap) => Ok(new_cap),
        None => Err(CapacityOverflow),
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(value);
        deque
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

// SAFETY: Deques uniquely own their allocation and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Deque<T> {}
// SAFETY: Deque's safe API obeys all rules of the borrow checker, so Deque<T> can implement Sync
// when T: Sync.
unsafe impl<T: Sync> Sync for Deque<T> {}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut deque = Self::with_cap(self.len);

        for value in self.iter() {
            deque.push_back(value.clone());
        }

        deque
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}
