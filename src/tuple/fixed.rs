use std::{
    fmt,
    ops::{Index, IndexMut},
};

use itertools::Itertools;

use crate::TupleError;

use super::bounds::assert_const_index;

/// `N` values of a single `Copy` type `T`, stored inline.
///
/// The layout is exactly that of `[T; N]`. Copying a `FixedTuple` copies every
/// slot and never shares storage with the original.
///
/// Elements can be reached two ways that resolve to the same slot:
/// - [`get_const`](Self::get_const) / [`set_const`](Self::set_const) take the
///   index as a const generic, and an out-of-range index fails the build.
/// - [`element`](Self::element) / [`set`](Self::set) (and `[]`) take the index
///   at run time. `index < N` is a precondition checked with `debug_assert!`.
///   The access itself is still bounds-checked, so a violation in a release
///   build panics. [`element_unchecked`](Self::element_unchecked) drops that
///   check as well.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::From, derive_more::Into,
)]
#[repr(transparent)]
pub struct FixedTuple<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> FixedTuple<T, N> {
    /// Number of slots, available without a value.
    pub const LEN: usize = N;

    /// Construct a tuple whose slot `i` holds `values[i]`.
    #[inline]
    pub const fn new(values: [T; N]) -> Self {
        Self(values)
    }

    /// The number of slots, always `N`.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Copy, const N: usize> FixedTuple<T, N> {
    /// Construct a tuple with `value` in every slot.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Construct a placeholder whose contents are unspecified.
    ///
    /// Callers are expected to overwrite every slot before reading it. The
    /// storage is materialised as the all-zero bit pattern of `T`, but that is
    /// not part of the contract.
    #[cfg(feature = "bytemuck")]
    #[inline]
    pub fn unspecified() -> Self
    where
        T: bytemuck::Zeroable,
    {
        Self([T::zeroed(); N])
    }

    /// Construct an independent copy of `other`.
    #[inline]
    pub const fn copy_of(other: &Self) -> Self {
        *other
    }

    /// Construct from an argument list, dispatching on its length.
    ///
    /// - One value with `N > 1` is broadcast into every slot.
    /// - Otherwise there must be exactly `N` values, and slot `i` takes `args[i]`.
    ///
    /// With `N == 1` a single value fills the only slot either way.
    ///
    /// # Panics
    /// If the number of values is neither `N` nor (for `N > 1`) one.
    #[track_caller]
    #[inline]
    pub fn from_args(args: &[T]) -> Self {
        match args {
            [value] if N > 1 => Self::splat(*value),
            _ => Self::from_slice(args),
        }
    }

    /// Like [`from_args`](Self::from_args), but a count mismatch is returned
    /// as [`TupleError::LengthMismatch`].
    pub fn try_from_args(args: &[T]) -> Result<Self, TupleError> {
        match args {
            [value] if N > 1 => Ok(Self::splat(*value)),
            _ => Self::try_from_slice(args),
        }
    }

    /// Construct from a list of exactly `N` values. No broadcast is applied.
    ///
    /// # Panics
    /// If `values.len() != N`.
    #[track_caller]
    #[inline]
    pub fn from_slice(values: &[T]) -> Self {
        assert_eq!(
            values.len(),
            N,
            "tuple of length {N} constructed from {} values",
            values.len()
        );
        Self(std::array::from_fn(|i| values[i]))
    }

    /// Like [`from_slice`](Self::from_slice), but a count mismatch is returned
    /// as [`TupleError::LengthMismatch`].
    pub fn try_from_slice(values: &[T]) -> Result<Self, TupleError> {
        match <[T; N]>::try_from(values) {
            Ok(array) => Ok(Self(array)),
            Err(_) => Err(TupleError::length_mismatch(N, values.len())),
        }
    }

    /// Read the slot at the constant index `I`.
    ///
    /// ```compile_fail
    /// # use fixed_tuple::FixedTuple;
    /// let t = FixedTuple::new([1, 2, 3]);
    /// let _ = t.get_const::<3>();
    /// ```
    #[inline(always)]
    pub fn get_const<const I: usize>(&self) -> T {
        assert_const_index!(I < N);
        self.0[I]
    }

    /// Overwrite the slot at the constant index `I`.
    ///
    /// ```compile_fail
    /// # use fixed_tuple::FixedTuple;
    /// let mut t = FixedTuple::<u8, 0>::new([]);
    /// t.set_const::<0>(1);
    /// ```
    #[inline(always)]
    pub fn set_const<const I: usize>(&mut self, value: T) {
        assert_const_index!(I < N);
        self.0[I] = value;
    }

    #[inline(always)]
    pub fn const_mut<const I: usize>(&mut self) -> &mut T {
        assert_const_index!(I < N);
        &mut self.0[I]
    }

    /// Read the slot at `index`.
    ///
    /// # Panics
    /// If `index >= N`. In debug builds this is reported as a violated
    /// precondition.
    #[track_caller]
    #[inline(always)]
    pub fn element(&self, index: usize) -> T {
        self[index]
    }

    #[track_caller]
    #[inline(always)]
    pub fn element_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    /// Overwrite the slot at `index`, leaving every other slot untouched.
    ///
    /// # Panics
    /// If `index >= N`.
    #[track_caller]
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    /// Read the slot at `index` without a bounds check in release builds.
    ///
    /// # Safety
    /// `index` must be less than `N`. Only debug builds verify this.
    #[track_caller]
    #[inline(always)]
    pub unsafe fn element_unchecked(&self, index: usize) -> T {
        debug_assert!(index < N, "index {index} out of bounds for tuple of length {N}");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { *self.0.get_unchecked(index) }
    }

    /// Overwrite the slot at `index` without a bounds check in release builds.
    ///
    /// # Safety
    /// `index` must be less than `N`. Only debug builds verify this.
    #[track_caller]
    #[inline(always)]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < N, "index {index} out of bounds for tuple of length {N}");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { *self.0.get_unchecked_mut(index) = value }
    }

    pub fn try_get(&self, index: usize) -> Result<T, TupleError> {
        match self.0.get(index) {
            Some(value) => Ok(*value),
            None => Err(TupleError::out_of_bounds(index, N)),
        }
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), TupleError> {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(TupleError::out_of_bounds(index, N)),
        }
    }
}

impl<T: Default, const N: usize> Default for FixedTuple<T, N> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> Index<usize> for FixedTuple<T, N> {
    type Output = T;

    #[track_caller]
    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < N, "index {index} out of bounds for tuple of length {N}");
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedTuple<T, N> {
    #[track_caller]
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < N, "index {index} out of bounds for tuple of length {N}");
        &mut self.0[index]
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for FixedTuple<T, N> {
    type Error = TupleError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(values)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedTuple<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedTuple<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedTuple<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let values = self.0.iter().format_with(", ", |v, g| match precision {
            Some(p) => g(&format_args!("{v:.p$}")),
            None => g(v),
        });
        write!(f, "[{values}]")
    }
}
