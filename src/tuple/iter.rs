use std::{array, slice};

use crate::TupleError;

use super::FixedTuple;

impl<T, const N: usize> FixedTuple<T, N> {
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }
}

impl<T: Copy, const N: usize> FixedTuple<T, N> {
    /// Apply `f` to every slot.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FixedTuple<U, N> {
        FixedTuple(self.0.map(f))
    }

    /// Combine the slots of `self` and `other` pairwise.
    #[inline]
    pub fn zip_with<U: Copy, R>(
        self,
        other: FixedTuple<U, N>,
        mut f: impl FnMut(T, U) -> R,
    ) -> FixedTuple<R, N> {
        FixedTuple(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Collect exactly `N` items from `iter`.
    ///
    /// Too few items are reported as [`TupleError::LengthMismatch`] with the
    /// number of items yielded. Too many are reported with `actual` set to
    /// `N + 1`: the iterator is not drained past the first surplus item, so
    /// unbounded iterators are rejected too.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, TupleError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();

        let first = match iter.next() {
            Some(_) if N == 0 => return Err(TupleError::length_mismatch(N, 1)),
            Some(v) => v,
            // Only the empty tuple accepts an empty slice.
            None => return Self::try_from_slice(&[]),
        };

        let mut vals = [first; N];
        for (taken, slot) in vals.iter_mut().enumerate().skip(1) {
            match iter.next() {
                Some(v) => *slot = v,
                None => return Err(TupleError::length_mismatch(N, taken)),
            }
        }

        if iter.next().is_some() {
            return Err(TupleError::length_mismatch(N, N + 1));
        }

        Ok(Self(vals))
    }
}

impl<T, const N: usize> IntoIterator for FixedTuple<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedTuple<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedTuple<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use std::iter;

    use super::*;

    #[test]
    fn iterate() {
        let mut t = FixedTuple::new([1, 2, 3]);
        assert_eq!(6, t.iter().sum::<i32>());

        for v in &mut t {
            *v *= 10;
        }
        assert_eq!(vec![10, 20, 30], t.into_iter().collect::<Vec<_>>());
        assert_eq!(3, (&t).into_iter().count());
    }

    #[test]
    fn map_and_zip() {
        let t = FixedTuple::new([1u8, 2, 3]);
        assert_eq!([2u16, 4, 6], t.map(|v| v as u16 * 2).into_array());

        let flags = FixedTuple::new([true, false, true]);
        let picked = t.zip_with(flags, |v, keep| if keep { v } else { 0 });
        assert_eq!([1, 0, 3], picked.into_array());
    }

    #[test]
    fn collect_exact() {
        let t = FixedTuple::<u32, 4>::try_from_iter(1..=4).unwrap();
        assert_eq!([1, 2, 3, 4], t.into_array());

        let one = FixedTuple::<u32, 1>::try_from_iter(iter::once(9)).unwrap();
        assert_eq!([9], one.into_array());

        let empty = FixedTuple::<u32, 0>::try_from_iter(iter::empty()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn collect_wrong_count() {
        assert_eq!(
            Err(TupleError::LengthMismatch {
                expected: 4,
                actual: 2
            }),
            FixedTuple::<u32, 4>::try_from_iter(0..2)
        );
        assert_eq!(
            Err(TupleError::LengthMismatch {
                expected: 4,
                actual: 0
            }),
            FixedTuple::<u32, 4>::try_from_iter(iter::empty())
        );
        assert_eq!(
            Err(TupleError::LengthMismatch {
                expected: 2,
                actual: 3
            }),
            FixedTuple::<u32, 2>::try_from_iter(0..5)
        );
        assert_eq!(
            Err(TupleError::LengthMismatch {
                expected: 0,
                actual: 1
            }),
            FixedTuple::<u32, 0>::try_from_iter(0..5)
        );
    }

    #[test]
    fn collect_rejects_unbounded() {
        assert_eq!(
            Err(TupleError::LengthMismatch {
                expected: 3,
                actual: 4
            }),
            FixedTuple::<u8, 3>::try_from_iter(iter::repeat(1u8))
        );
        assert_eq!(
            Err(TupleError::LengthMismatch {
                expected: 2,
                actual: 3
            }),
            FixedTuple::<u64, 2>::try_from_iter(0..)
        );
    }
}
