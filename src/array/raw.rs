// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw heap buffer backing [`DynArray`](crate::DynArray).
//!
//! `RawBuf<T>` owns an allocation of `cap` slots of `T`. It does not
//! inspect the memory it manages: when dropped it frees the allocation but
//! never drops contents. Tracking which slots hold initialized elements is
//! entirely the caller's job.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, marker::PhantomData, mem, ptr::NonNull};

// Alloc imports
use alloc::alloc::{alloc, dealloc};

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf owns its allocation and hands out access only through
// &self/&mut self, so it is as thread-compatible as T itself.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer with no allocation behind it.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer of exactly `cap` uninitialized slots.
    ///
    /// A zero-size layout (zero `cap`, or a zero-sized `T`) allocates
    /// nothing and uses a dangling, well-aligned pointer.
    pub(crate) fn new(cap: usize) -> Result<Self, Error> {
        let layout = Layout::array::<T>(cap).map_err(|_| Error::AllocFailed)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: the layout has non-zero size.
            let raw = unsafe { alloc(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed)?
        };
        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // `Layout::array` validated this size at allocation time, so the
        // multiplication cannot overflow here.
        let size = mem::size_of::<T>() * self.cap;
        if size != 0 {
            // SAFETY: the buffer was allocated with exactly this layout,
            // and a zero-size layout never reaches this branch.
            unsafe {
                let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
                dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}
