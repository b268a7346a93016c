// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynArray` type and its inherent API.
//!
//! `DynArray<T>` is a growable, contiguous sequence container backed by a
//! single heap allocation. It tracks how many slots are occupied versus
//! allocated, grows by doubling on append, and shrinks to roughly half
//! once usage drops below half. Methods generally mirror vector semantics,
//! with explicit fallible results for allocation, bounds, and emptiness.

mod extend;
mod insert;
mod new;
mod pop;
mod push;
pub(crate) mod raw;
mod remove;
mod resize;
mod slice;
mod try_from_iter;

// Crate imports
use crate::error::Error;
use self::raw::RawBuf;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, heap-allocated array with explicit, fallible allocation.
///
/// `DynArray<T>` owns a contiguous buffer of `capacity` slots and tracks a
/// logical length `occupied ∈ 0..=capacity`. Only the prefix
/// `buf[..occupied]` is initialized and visible through safe APIs; methods
/// such as [`as_slice`], indexing, and iteration are all restricted to it.
///
/// # Layout and invariants
///
/// - `occupied <= capacity` at all times; every mutating operation
///   re-establishes this before returning.
/// - Elements at `[0, occupied)` are valid and contiguous, no gaps.
/// - The buffer is exclusively owned. A capacity change may relocate it,
///   invalidating raw pointers from [`as_ptr`] / [`as_mut_ptr`]; borrowed
///   slices are protected by the borrow checker.
/// - Zero capacity and zero-sized `T` allocate nothing.
///
/// # Capacity policy
///
/// [`push`] and [`insert`] double the capacity when one more element would
/// meet or exceed it, growing a zero capacity to 1. [`pop`] and [`remove`]
/// shrink the capacity to `capacity / 2 + 1` once `occupied` drops below
/// that mark. Growth failure surfaces as [`Error::AllocFailed`] and leaves
/// the array untouched; a refused shrink leaves the capacity as is, since
/// the removal itself has already taken effect and the array is valid.
///
/// # Complexity
///
/// - [`push`] / [`pop`]: amortized O(1), O(occupied) when reallocating.
/// - [`insert`] / [`remove`]: O(occupied − index) for the shift.
/// - [`resize_capacity`] / [`clamp_capacity`]: O(occupied).
/// - Accessors: O(1).
///
/// # Fallible-only surface
///
/// `Clone`, `FromIterator`, and `Extend` are not implemented because their
/// signatures cannot report allocation failure. Use
/// [`try_clone`](DynArray::try_clone),
/// [`try_from_iter`](DynArray::try_from_iter), and
/// [`try_extend_from_iter`](DynArray::try_extend_from_iter) instead.
/// Indexing operators (`v[i]`, `v[a..b]`) are the one panicking exception,
/// mirroring slice semantics exactly.
///
/// # Examples
///
/// ```rust
/// use dyn_array::DynArray;
///
/// let mut v: DynArray<i32> = DynArray::new(2)?;
/// v.push(1)?;
/// v.push(2)?;
/// v.push(3)?; // capacity doubled to 4
/// assert_eq!(v.len(), 3);
/// assert!(v.capacity() >= 4);
///
/// v.insert(1, 9)?;
/// assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
/// assert_eq!(v.remove(1)?, 9);
/// assert_eq!(*v.get(-1)?, 3);
/// # Ok::<(), dyn_array::Error>(())
/// ```
///
/// [`as_slice`]: DynArray::as_slice
/// [`as_ptr`]: DynArray::as_ptr
/// [`as_mut_ptr`]: DynArray::as_mut_ptr
/// [`push`]: DynArray::push
/// [`pop`]: DynArray::pop
/// [`insert`]: DynArray::insert
/// [`remove`]: DynArray::remove
/// [`resize_capacity`]: DynArray::resize_capacity
/// [`clamp_capacity`]: DynArray::clamp_capacity
pub struct DynArray<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) occupied: usize,
}

impl<T> DynArray<T> {
    /// Returns the number of occupied (initialized) elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Returns `true` if `len() == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the number of allocated slots (always `>= len()`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Returns `len() * size_of::<T>()`, the occupied prefix in bytes.
    ///
    /// Intended for interop with byte-oriented APIs.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.occupied * mem::size_of::<T>()
    }

    /// Returns the first element, or [`Error::Empty`].
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::Empty)
    }

    /// Returns the last element, or [`Error::Empty`].
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::Empty)
    }

    /// Returns the element at `index`, supporting negative indexes.
    ///
    /// A negative `index` is normalized as `index + len()` before the
    /// bounds check, so `-1` is the last element and `-(len() as isize)`
    /// the first. Returns [`Error::OutOfBounds`] when the normalized index
    /// falls outside `[0, len())`.
    #[inline]
    pub fn get(&self, index: isize) -> Result<&T, Error> {
        let i = self.normalize(index)?;
        Ok(&self.as_slice()[i])
    }

    /// Mutable counterpart of [`get`](DynArray::get), with the same
    /// negative-index convention.
    #[inline]
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, Error> {
        let i = self.normalize(index)?;
        Ok(&mut self.as_mut_slice()[i])
    }

    /// Normalizes a possibly-negative index into `[0, occupied)`.
    fn normalize(&self, index: isize) -> Result<usize, Error> {
        let len = self.occupied as isize;
        let i = if index < 0 { index + len } else { index };
        if (0..len).contains(&i) {
            Ok(i as usize)
        } else {
            Err(Error::OutOfBounds)
        }
    }

    /// Drops all elements and sets `len()` to 0. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        let occupied = self.occupied;
        // Bookkeeping first: if an element's Drop panics, the array must
        // not expose the partially dropped prefix.
        self.occupied = 0;
        // SAFETY: the first `occupied` slots held initialized elements and
        // are no longer reachable through `self`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), occupied));
        }
    }

    /// Returns `true` if the occupied prefix contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the first `occupied` slots are initialized.
        // RawBuf's own Drop releases the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr(),
                self.occupied,
            ));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("occupied", &self.occupied)
            .field("capacity", &self.buf.cap())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for DynArray<T> {}
impl<T: Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
