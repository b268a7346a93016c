// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynArray, error::Error};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Appends `value` at the end. Amortized O(1).
    ///
    /// Doubles the capacity first when one more element would meet or
    /// exceed it. Returns [`Error::AllocFailed`] if growth is needed and
    /// the allocator refuses; the array is unchanged in that case.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.grow_for_append()?;
        // SAFETY: `grow_for_append` guarantees `occupied < capacity`, so
        // the slot at `occupied` is allocated and unoccupied.
        unsafe {
            ptr::write(self.buf.ptr().add(self.occupied), value);
        }
        self.occupied += 1;
        debug_assert!(self.occupied <= self.buf.cap());
        Ok(())
    }

    /// Doubles the capacity when appending one element would meet or
    /// exceed it. A zero capacity grows to 1, since doubling it would
    /// stay 0 forever.
    pub(crate) fn grow_for_append(&mut self) -> Result<(), Error> {
        if self.occupied + 1 >= self.buf.cap() {
            let doubled = self
                .buf
                .cap()
                .checked_mul(2)
                .ok_or(Error::AllocFailed)?
                .max(1);
            self.resize_capacity(doubled)?;
        }
        Ok(())
    }
}
