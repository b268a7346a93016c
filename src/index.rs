// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynArray`](crate::DynArray).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice
//! behavior:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the occupied prefix `[0..len)`.
//!
//! For fallible, negative-index-aware access use
//! [`get`](crate::DynArray::get) / [`get_mut`](crate::DynArray::get_mut).

// Crate imports
use crate::array::DynArray;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T> Index<usize> for DynArray<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

// Read-only ranges
impl<T> Index<Range<usize>> for DynArray<T> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFrom<usize>> for DynArray<T> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeTo<usize>> for DynArray<T> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeToInclusive<usize>> for DynArray<T> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeInclusive<usize>> for DynArray<T> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFull> for DynArray<T> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}

// Mutable ranges
impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
impl<T> IndexMut<Range<usize>> for DynArray<T> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFrom<usize>> for DynArray<T> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeTo<usize>> for DynArray<T> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeToInclusive<usize>> for DynArray<T> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeInclusive<usize>> for DynArray<T> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}
impl<T> IndexMut<RangeFull> for DynArray<T> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        self.as_mut_slice()
    }
}
