// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array::{raw::RawBuf, DynArray},
    error::Error,
};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Reallocates the backing buffer to exactly `new_capacity` slots.
    ///
    /// If `new_capacity < len()`, the elements beyond it are **dropped** —
    /// this is a destructive truncation, not a capacity hint.
    ///
    /// All-or-nothing: on [`Error::AllocFailed`] the array is untouched,
    /// including the elements a truncation would have dropped.
    pub fn resize_capacity(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity == self.buf.cap() {
            return Ok(());
        }

        // Allocate first so a refused allocation leaves everything intact.
        let fresh = RawBuf::new(new_capacity)?;
        let keep = self.occupied.min(new_capacity);
        let excess = self.occupied - keep;

        // Bookkeeping first: if a destructor panics mid-truncation, the
        // container must not re-drop the tail while unwinding.
        self.occupied = keep;
        unsafe {
            // Truncation: drop what the new buffer cannot hold.
            if excess > 0 {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.buf.ptr().add(keep),
                    excess,
                ));
            }
            // SAFETY: `keep <= new_capacity` and `keep` slots of the old
            // buffer are initialized; the buffers never overlap.
            ptr::copy_nonoverlapping(self.buf.ptr(), fresh.ptr(), keep);
        }

        // The old RawBuf is dropped here, releasing its allocation. Its
        // elements were all either moved into `fresh` or dropped above.
        self.buf = fresh;
        debug_assert!(self.occupied <= self.buf.cap());
        Ok(())
    }

    /// Shrinks the capacity to exactly `len()`, eliminating slack.
    ///
    /// Equivalent to `resize_capacity(self.len())`. Named `clamp_capacity`
    /// rather than `clamp`, which `Ord::clamp` would shadow for `T: Ord`.
    #[inline]
    pub fn clamp_capacity(&mut self) -> Result<(), Error> {
        self.resize_capacity(self.occupied)
    }
}
