// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynArray`](crate::DynArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Dropping it drops any
//!   un-yielded elements and releases the buffer.
//! - `&DynArray` and `&mut DynArray` iterate as slices.

// Crate imports
use crate::array::{raw::RawBuf, DynArray};

// Core imports
use core::{iter::FusedIterator, mem::ManuallyDrop, ptr};

/// Owned iterator returned by `DynArray::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front = i + 1;
            // SAFETY: `i` is within `[front, back)`, the range of slots
            // still owned by the iterator; advancing `front` first keeps
            // the slot from being read or dropped twice.
            Some(unsafe { ptr::read(self.buf.ptr().add(i)) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`, the slot at the new `back` is owned by
            // the iterator and will not be touched again.
            Some(unsafe { ptr::read(self.buf.ptr().add(self.back)) })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: `[front, back)` are the elements not yet yielded.
        // RawBuf's own Drop releases the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(self.front),
                self.back - self.front,
            ));
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let array = ManuallyDrop::new(self);
        // SAFETY: `array` is never dropped, so the buffer and the occupied
        // elements transfer to the iterator exactly once.
        let buf = unsafe { ptr::read(&array.buf) };
        IntoIter {
            buf,
            front: 0,
            back: array.occupied,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynArray;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_into_iter_yields_in_order() {
        let v = DynArray::try_from(&[10, 20, 30][..]).unwrap();
        let collected: Vec<i32> = v.into_iter().collect();
        assert_eq!(collected, vec![10, 20, 30]);
    }

    #[test]
    fn test_double_ended() {
        let v = DynArray::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.next_back(), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v = DynArray::try_from(&[1, 2, 3][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_empty() {
        let v: DynArray<i32> = DynArray::default();
        let mut it = v.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_moves_non_copy_values() {
        let mut v: DynArray<String> = DynArray::default();
        v.push("a".to_string()).unwrap();
        v.push("b".to_string()).unwrap();
        let collected: Vec<String> = v.into_iter().collect();
        assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_into_iter_refs() {
        let mut v = DynArray::try_from(&[1, 2, 3][..]).unwrap();
        let mut collected = Vec::new();
        for x in &v {
            collected.push(*x);
        }
        assert_eq!(collected, vec![1, 2, 3]);

        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v.as_slice(), &[10, 20, 30]);
    }

    /// Counts drops through a shared cell.
    #[derive(Clone)]
    struct DropTally(Rc<Cell<usize>>);

    impl Drop for DropTally {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_partial_iteration_drops_rest() {
        let tally = Rc::new(Cell::new(0));
        let mut v: DynArray<DropTally> = DynArray::default();
        for _ in 0..5 {
            v.push(DropTally(tally.clone())).unwrap();
        }
        {
            let mut it = v.into_iter();
            drop(it.next());
            drop(it.next_back());
            assert_eq!(tally.get(), 2);
            // The remaining three drop with the iterator.
        }
        assert_eq!(tally.get(), 5);
    }
}
