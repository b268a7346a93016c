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
    /// Constructs an empty array with exactly `initial_capacity` slots.
    ///
    /// Returns [`Error::AllocFailed`] if the allocator refuses the request.
    /// `new(0)` allocates nothing and cannot fail.
    #[inline]
    pub fn new(initial_capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::new(initial_capacity)?,
            occupied: 0,
        })
    }

    /// Clones the array, preserving capacity and contents.
    ///
    /// This is the fallible stand-in for `Clone`, which cannot report
    /// [`Error::AllocFailed`].
    pub fn try_clone(&self) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut out = Self::new(self.buf.cap())?;
        for item in self.as_slice() {
            // SAFETY: `out` has the source's capacity, which covers every
            // slot written here. Bumping `occupied` after each write keeps
            // `out` consistent if a `clone` panics.
            unsafe {
                ptr::write(out.buf.ptr().add(out.occupied), item.clone());
            }
            out.occupied += 1;
        }
        Ok(out)
    }
}

impl<T> Default for DynArray<T> {
    /// An empty array with zero capacity and no allocation.
    fn default() -> Self {
        Self {
            buf: RawBuf::empty(),
            occupied: 0,
        }
    }
}
