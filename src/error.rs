// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynArray`.
//!
//! These errors represent allocation, bounds, and emptiness conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`DynArray`](crate::DynArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The allocator could not satisfy a capacity change.
    ///
    /// The array is left in its prior state; retrying is up to the caller.
    AllocFailed,
    /// An index, after negative-index normalization, was outside the
    /// current logical bounds.
    OutOfBounds,
    /// [`front`](crate::DynArray::front), [`back`](crate::DynArray::back),
    /// or [`pop`](crate::DynArray::pop) was called on an empty array.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed => f.write_str("allocation failed"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::Empty => f.write_str("array is empty"),
        }
    }
}

impl CoreError for Error {}
