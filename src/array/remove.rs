// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynArray, error::Error};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Removes and returns the element at `index`, shifting later elements
    /// left. O(len).
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len()`, leaving the
    /// array unchanged. Applies the same best-effort shrink policy as
    /// [`pop`](DynArray::pop) afterwards.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.occupied {
            return Err(Error::OutOfBounds);
        }

        // SAFETY: `index < occupied`, so the slot holds an initialized
        // element and the shifted range stays within the occupied prefix.
        let out = unsafe {
            let base = self.buf.ptr();
            let out = ptr::read(base.add(index));
            // Shift left: [index+1..occupied) -> [index..occupied-1).
            // The trailing count is occupied - index - 1, not occupied - index.
            ptr::copy(
                base.add(index + 1),
                base.add(index),
                self.occupied - index - 1,
            );
            out
        };
        self.occupied -= 1;
        self.shrink_after_removal();
        Ok(out)
    }
}
