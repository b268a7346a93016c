// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dyn-array`
//!
//! A `no_std` (plus `alloc`), growable, heap-allocated array type,
//! **with explicit, fallible allocation**.
//!
//! The core type, [`DynArray<T>`], owns a contiguous heap buffer of
//! `capacity` slots and tracks a logical length `occupied ∈ 0..=capacity`.
//! Only the prefix `[0..occupied)` holds initialized elements; the rest of
//! the buffer is uninitialized spare room for growth.
//!
//! ## Capacity policy
//!
//! - [`push`](DynArray::push) and [`insert`](DynArray::insert) double the
//!   capacity when one more element would meet or exceed it (a zero
//!   capacity grows to 1 rather than re-doubling to 0).
//! - [`pop`](DynArray::pop) and [`remove`](DynArray::remove) shrink the
//!   capacity to `capacity / 2 + 1` once usage drops below that mark.
//!
//! The asymmetry (grow ×2, shrink to roughly half plus one only after
//! usage falls below half) means alternating push/pop at a capacity
//! boundary never reallocates on every call.
//!
//! ## Fallibility contract
//!
//! Every operation that can allocate returns a `Result`:
//!
//! - an allocator refusal surfaces as [`Error::AllocFailed`] and leaves the
//!   array in its prior state — capacity changes are all-or-nothing;
//! - out-of-range positions surface as [`Error::OutOfBounds`];
//! - [`front`](DynArray::front), [`back`](DynArray::back), and
//!   [`pop`](DynArray::pop) on an empty array surface as [`Error::Empty`].
//!
//! Because `Clone`, `FromIterator`, and `Extend` have infallible signatures,
//! they are **not** implemented; use [`try_clone`](DynArray::try_clone),
//! [`try_from_iter`](DynArray::try_from_iter), and
//! [`try_extend_from_iter`](DynArray::try_extend_from_iter) instead.
//!
//! One deliberate exception: indexing operators (`v[i]`, `v[a..b]`) follow
//! Rust slice semantics and **panic** on out-of-bounds, exactly like `Vec`.
//! The fallible accessors ([`get`](DynArray::get) and friends) never panic.
//!
//! ## Indexing
//!
//! [`get`](DynArray::get) and [`get_mut`](DynArray::get_mut) take an
//! `isize` and support Python-style negative indexes: `-1` is the last
//! element, `-occupied` the first. The index is normalized by adding
//! `occupied` before the bounds check, never by wraparound.
//!
//! ## Buffer relocation
//!
//! Any operation that can change the capacity (`push`, `pop`, `insert`,
//! `remove`, `resize_capacity`, `clamp_capacity`) may relocate the backing buffer.
//! Slices borrowed via [`as_slice`](DynArray::as_slice) are protected by
//! the borrow checker, but raw pointers obtained from
//! [`as_ptr`](DynArray::as_ptr) / [`as_mut_ptr`](DynArray::as_mut_ptr)
//! must not be retained across such a call.
//!
//! ## Threading
//!
//! `DynArray<T>` is a single-owner value: it is `Send`/`Sync` when `T` is,
//! but every operation (readers included) needs exclusive access for its
//! duration — wrap it in a lock for shared mutation.
//!
//! ## Features
//!
//! - `serde` — `Serialize` / `Deserialize` for `DynArray<T>` as a plain
//!   sequence of elements.
//!
//! ## Example
//!
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut v: DynArray<i32> = DynArray::new(2)?;
//! v.push(1)?;
//! v.push(2)?;
//! v.push(3)?; // capacity doubles
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(*v.get(-1)?, 3);
//! v.clamp_capacity()?;
//! assert_eq!(v.capacity(), v.len());
//! # Ok::<(), dyn_array::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod array;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use array::DynArray;
pub use error::Error;
pub use iter::IntoIter;
