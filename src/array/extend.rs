// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynArray, error::Error};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Appends clones of all elements of `src`.
    ///
    /// All-or-nothing with respect to allocation: if the buffer cannot be
    /// grown, [`Error::AllocFailed`] is returned and the array is
    /// unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let needed = self
            .occupied
            .checked_add(src.len())
            .ok_or(Error::AllocFailed)?;
        self.reserve_total(needed)?;

        for item in src {
            // SAFETY: capacity covers `needed`; bumping `occupied` after
            // each write keeps the array consistent if a `clone` panics.
            unsafe {
                ptr::write(self.buf.ptr().add(self.occupied), item.clone());
            }
            self.occupied += 1;
        }
        Ok(())
    }

    /// Moves every element of `iter` onto the end of the array.
    ///
    /// The elements are staged in a scratch array first, so an allocation
    /// failure leaves `self` unchanged.
    pub fn try_extend_from_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut staged = Self::default();
        for item in iter {
            staged.push(item)?;
        }

        let needed = self
            .occupied
            .checked_add(staged.occupied)
            .ok_or(Error::AllocFailed)?;
        self.reserve_total(needed)?;

        // SAFETY: capacity covers `needed` and the buffers are distinct.
        // Zeroing `staged.occupied` transfers ownership of the moved
        // elements, so only the staging allocation is released below.
        unsafe {
            ptr::copy_nonoverlapping(
                staged.buf.ptr(),
                self.buf.ptr().add(self.occupied),
                staged.occupied,
            );
        }
        self.occupied = needed;
        staged.occupied = 0;
        Ok(())
    }

    /// Grows the buffer so that at least `total` slots are allocated,
    /// using the doubling rule to keep bulk appends amortized O(1).
    fn reserve_total(&mut self, total: usize) -> Result<(), Error> {
        if total > self.buf.cap() {
            let doubled = self.buf.cap().saturating_mul(2);
            self.resize_capacity(total.max(doubled))?;
        }
        Ok(())
    }
}
