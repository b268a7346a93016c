// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynArray`](crate::DynArray).
//!
//! - **Serialize**: as a sequence of elements (length `len()`).
//! - **Deserialize**: from any sequence; the buffer is preallocated from
//!   the sequence's size hint (capped, since the hint is untrusted input)
//!   and grown as elements arrive.
//!
//! Allocation failures during deserialization surface through
//! `de::Error::custom`, since the `serde` traits have no channel for
//! [`Error`](crate::Error) itself.

// Crate imports
use crate::array::DynArray;

// Core imports
use core::fmt;

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for DynArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// Upper bound on the slots preallocated from a sequence's size hint.
///
/// The hint comes from untrusted input (a length prefix in most binary
/// formats), so it bounds the first allocation; longer sequences grow
/// normally as elements actually arrive.
const MAX_HINTED_PREALLOC: usize = 4096;

struct ArrayVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ArrayVisitor<T> {
    type Value = DynArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_HINTED_PREALLOC);
        let mut out = DynArray::new(hint).map_err(de::Error::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor(core::marker::PhantomData))
    }
}
