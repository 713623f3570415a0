use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::{AllocError, CapacityOverflow, ReserveError};

/// An owned allocation of `cap` uninitialized slots of `T`.
///
/// A RawBuf knows nothing about which of its slots are initialized, so dropping it only releases
/// the memory. Tracking and dropping live elements is the responsibility of the owning collection.
/// Zero-sized types and zero capacities never touch the allocator.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates a RawBuf with capacity 0 and a dangling pointer.
    pub const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a zeroed buffer large enough to hold `cap` values of `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout of the buffer would exceed [`isize::MAX`] bytes
    /// and [`AllocError`] if the global allocator can't provide the memory.
    pub fn try_with_cap(cap: usize) -> Result<RawBuf<T>, ReserveError> {
        let layout = Self::make_layout(cap)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            NonNull::new(unsafe { alloc::alloc_zeroed(layout).cast() })
                .ok_or(AllocError { size: layout.size() })?
        };

        Ok(RawBuf {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity of the buffer. A pointer produced with
    /// `index == cap` is only valid for offset arithmetic, not reads or writes.
    pub const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that index is within (or one past) the allocation, whose
        // size is known not to exceed isize::MAX bytes.
        unsafe { self.ptr.as_ptr().add(index).cast() }
    }

    /// A helper function to create a [`Layout`] for `cap` elements of type `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // The layout was valid at construction, so it is still valid now.
        if let Ok(layout) = Self::make_layout(self.cap)
            && layout.size() != 0
        {
            // SAFETY: ptr was allocated by the global allocator with exactly this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout); }
        }
    }
}
