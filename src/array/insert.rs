// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynArray, error::Error};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Inserts `value` at `index`, shifting later elements right. O(len).
    ///
    /// `index` may be anywhere in `0..=len()`; inserting at `len()` is
    /// equivalent to [`push`](DynArray::push).
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len()`.
    /// - Returns [`Error::AllocFailed`] if growth is needed and refused.
    ///
    /// The array is unchanged on either error.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.occupied {
            return Err(Error::OutOfBounds);
        }
        self.grow_for_append()?;

        // SAFETY: `index <= occupied < capacity` after growth, so both the
        // shifted range and the destination slot are in bounds.
        unsafe {
            let base = self.buf.ptr();
            // Shift right: [index..occupied) -> [index+1..occupied+1).
            // `ptr::copy` handles the overlap (copies as if backward).
            ptr::copy(
                base.add(index),
                base.add(index + 1),
                self.occupied - index,
            );
            ptr::write(base.add(index), value);
        }
        self.occupied += 1;
        debug_assert!(self.occupied <= self.buf.cap());
        Ok(())
    }
}
