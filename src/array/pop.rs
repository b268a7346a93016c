// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynArray, error::Error};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Removes and returns the last element.
    ///
    /// Returns [`Error::Empty`] when the array has no elements. Once the
    /// occupancy drops below `capacity / 2 + 1`, the capacity is shrunk to
    /// that mark; together with doubling growth this hysteresis keeps an
    /// alternating push/pop at a capacity boundary from reallocating on
    /// every call.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.occupied == 0 {
            return Err(Error::Empty);
        }
        self.occupied -= 1;
        // SAFETY: the slot at the old `occupied - 1` holds an initialized
        // element; decrementing first makes it unreachable through `self`.
        let out = unsafe { ptr::read(self.buf.ptr().add(self.occupied)) };
        self.shrink_after_removal();
        Ok(out)
    }

    /// Shrinks the capacity to `capacity / 2 + 1` once occupancy has
    /// dropped below that mark.
    ///
    /// Best effort: the removal has already taken effect and the array is
    /// valid either way, so a refused shrink allocation simply leaves the
    /// capacity as is.
    pub(crate) fn shrink_after_removal(&mut self) {
        let target = self.buf.cap() / 2 + 1;
        if self.occupied < target && target < self.buf.cap() {
            let _ = self.resize_capacity(target);
        }
    }
}
