// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::DynArray;

// Core imports
use core::slice;

impl<T> DynArray<T> {
    /// Returns the occupied prefix as a shared slice.
    ///
    /// The borrow checker prevents holding this slice across a mutating
    /// call, so buffer relocation cannot invalidate it.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: exactly the first `occupied` slots are initialized; the
        // pointer is non-null and aligned even for zero-size buffers.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.occupied) }
    }

    /// Returns the occupied prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, plus `&mut self` gives exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.occupied) }
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// Invalidated by any call that can change the capacity (`push`,
    /// `pop`, `insert`, `remove`, `resize_capacity`, `clamp_capacity`),
    /// since such a call may relocate the buffer. Do not retain it across one.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable counterpart of [`as_ptr`](DynArray::as_ptr), with the same
    /// invalidation rule.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynArray;

    #[test]
    fn test_as_slice_views_occupied_prefix() {
        let mut v: DynArray<i32> = DynArray::new(8).unwrap();
        v.push(1).unwrap();
        v.push(2).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.as_slice().len(), v.len());
    }

    #[test]
    fn test_as_mut_slice_mutates_in_place() {
        let mut v = DynArray::try_from(&[10, 20][..]).unwrap();
        v.as_mut_slice()[1] = 21;
        assert_eq!(v.as_slice(), &[10, 21]);
    }

    #[test]
    fn test_empty_slices() {
        let mut v: DynArray<i32> = DynArray::default();
        assert_eq!(v.as_slice(), &[] as &[i32]);
        assert_eq!(v.as_mut_slice(), &mut [] as &mut [i32]);
    }

    #[test]
    fn test_ptrs_match_slice_ptrs() {
        let mut v = DynArray::try_from(&[1u16, 2][..]).unwrap();
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
        assert_eq!(v.as_mut_ptr(), v.as_mut_slice().as_mut_ptr());
    }
}
