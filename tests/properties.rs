// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the container's observable behavior: push order,
//! the growth/shrink policy bounds, and the inverse-operation pairs.

use dyn_array::{DynArray, Error};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pushes_preserve_order(initial_cap in 0usize..16, values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut v: DynArray<i32> = DynArray::new(initial_cap).unwrap();
        for (k, &x) in values.iter().enumerate() {
            v.push(x).unwrap();
            prop_assert_eq!(v.len(), k + 1);
        }
        prop_assert_eq!(v.len(), values.len());
        for (i, &x) in values.iter().enumerate() {
            prop_assert_eq!(*v.get(i as isize).unwrap(), x);
        }
        prop_assert!(v.capacity() >= v.len());
    }

    #[test]
    fn push_then_pop_restores_prefix(values in proptest::collection::vec(any::<i32>(), 1..32), extra in any::<i32>()) {
        let mut v = DynArray::try_from(&values[..]).unwrap();
        v.push(extra).unwrap();
        prop_assert_eq!(v.pop(), Ok(extra));
        prop_assert_eq!(v.len(), values.len());
        prop_assert_eq!(v.as_slice(), &values[..]);
        // Capacity may have shrunk, but never below occupancy.
        prop_assert!(v.capacity() >= v.len());
    }

    #[test]
    fn insert_then_remove_is_identity(values in proptest::collection::vec(any::<i32>(), 0..32), index_seed in any::<usize>(), inserted in any::<i32>()) {
        let mut v = DynArray::try_from(&values[..]).unwrap();
        let index = index_seed % (values.len() + 1);
        v.insert(index, inserted).unwrap();
        prop_assert_eq!(v.len(), values.len() + 1);
        prop_assert_eq!(*v.get(index as isize).unwrap(), inserted);
        prop_assert_eq!(v.remove(index), Ok(inserted));
        prop_assert_eq!(v.as_slice(), &values[..]);
    }

    #[test]
    fn clamp_capacity_fits_capacity_to_len(initial_cap in 0usize..32, values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let mut v: DynArray<i32> = DynArray::new(initial_cap).unwrap();
        for &x in &values {
            v.push(x).unwrap();
        }
        v.clamp_capacity().unwrap();
        prop_assert_eq!(v.capacity(), v.len());
        prop_assert_eq!(v.as_slice(), &values[..]);
    }

    #[test]
    fn negative_indexes_mirror_positive(values in proptest::collection::vec(any::<i32>(), 1..32)) {
        let v = DynArray::try_from(&values[..]).unwrap();
        let len = v.len() as isize;
        prop_assert_eq!(v.get(-1).unwrap(), v.back().unwrap());
        prop_assert_eq!(v.get(-len).unwrap(), v.front().unwrap());
        for i in 0..len {
            prop_assert_eq!(v.get(i).unwrap(), v.get(i - len).unwrap());
        }
        prop_assert_eq!(v.get(len), Err(Error::OutOfBounds));
        prop_assert_eq!(v.get(-(len + 1)), Err(Error::OutOfBounds));
    }

    #[test]
    fn pops_shrink_but_stay_valid(values in proptest::collection::vec(any::<i32>(), 1..64)) {
        let mut v = DynArray::try_from(&values[..]).unwrap();
        let mut expected = values.clone();
        while let Ok(x) = v.pop() {
            prop_assert_eq!(Some(x), expected.pop());
            prop_assert!(v.capacity() >= v.len());
            prop_assert_eq!(v.as_slice(), &expected[..]);
        }
        prop_assert!(expected.is_empty());
    }

    #[test]
    fn resize_capacity_truncates_to_exactly_n(values in proptest::collection::vec(any::<i32>(), 0..32), n in 0usize..48) {
        let mut v = DynArray::try_from(&values[..]).unwrap();
        v.resize_capacity(n).unwrap();
        prop_assert_eq!(v.capacity(), n);
        let keep = values.len().min(n);
        prop_assert_eq!(v.as_slice(), &values[..keep]);
    }

    #[test]
    fn alternating_push_pop_is_stable(values in proptest::collection::vec(any::<i32>(), 1..32)) {
        // Hysteresis check: a push/pop cycle at any point must leave the
        // contents untouched and the invariants intact.
        let mut v: DynArray<i32> = DynArray::new(1).unwrap();
        for &x in &values {
            v.push(x).unwrap();
            v.push(x).unwrap();
            let _ = v.pop().unwrap();
            prop_assert!(v.capacity() >= v.len());
        }
        prop_assert_eq!(v.as_slice(), &values[..]);
    }
}

#[test]
fn growth_doubles_from_capacity_two() {
    let mut v: DynArray<i32> = DynArray::new(2).unwrap();
    for x in 1..=5 {
        v.push(x).unwrap();
    }
    assert!(v.capacity() >= 8);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);

    v.insert(2, 99).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 99, 3, 4, 5]);
    assert_eq!(v.len(), 6);

    assert_eq!(v.remove(0), Ok(1));
    assert_eq!(v.as_slice(), &[2, 99, 3, 4, 5]);
    assert_eq!(v.len(), 5);
}
