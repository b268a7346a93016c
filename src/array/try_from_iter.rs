// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynArray, error::Error};

impl<T> DynArray<T> {
    /// Builds an array from an iterator, pushing each element.
    ///
    /// This is the fallible stand-in for `FromIterator`, which cannot
    /// report [`Error::AllocFailed`].
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let it = iter.into_iter();
        let mut out = Self::new(it.size_hint().0)?;
        for item in it {
            out.push(item)?;
        }
        Ok(out)
    }
}

impl<T: Clone> TryFrom<&[T]> for DynArray<T> {
    type Error = Error;

    /// Clones `src` into a fresh array with capacity `src.len()`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut out = Self::new(src.len())?;
        out.extend_from_slice(src)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynArray;

    #[test]
    fn test_try_from_iter() {
        let v = DynArray::try_from_iter([10, 11, 12]).unwrap();
        assert_eq!(v.as_slice(), &[10, 11, 12]);

        let empty: DynArray<i32> = DynArray::try_from_iter(core::iter::empty()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_try_from_slice() {
        let v = DynArray::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 3);
    }
}
