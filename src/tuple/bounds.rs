/// Compile-time bound check for a constant index `I` into a tuple of length `N`.
///
/// Evaluating [`InBounds::OK`] forces the assertion when the surrounding
/// function is monomorphised, so an out-of-range constant index fails the
/// build rather than the program.
pub(crate) struct InBounds<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> InBounds<I, N> {
    pub(crate) const OK: () = assert!(I < N, "constant tuple index is out of bounds");
}

/// Shorthand for evaluating [`InBounds::OK`] in a function body.
macro_rules! assert_const_index {
    ($i:ident < $n:ident) => {
        #[allow(clippy::let_unit_value)]
        let () = $crate::tuple::bounds::InBounds::<$i, $n>::OK;
    };
}
pub(crate) use assert_const_index;
