/// Construct a [`FixedTuple`](crate::FixedTuple) from its elements.
///
/// The number of arguments decides the meaning:
/// - several values fill the slots in order, and their count must equal `N`
///   (a mismatch is a type error);
/// - a single value is broadcast into every slot when `N > 1`, and fills the
///   only slot when `N == 1`;
/// - no values produce the empty tuple.
///
/// ```
/// use fixed_tuple::{fixed_tuple, FixedTuple};
///
/// let xs = fixed_tuple![10, 20, 30];
/// assert_eq!(3, xs.len());
///
/// let sevens: FixedTuple<i32, 4> = fixed_tuple![7];
/// assert_eq!([7, 7, 7, 7], sevens.into_array());
/// ```
#[macro_export]
macro_rules! fixed_tuple {
    () => {
        $crate::FixedTuple::new([])
    };
    ($value:expr $(,)?) => {
        $crate::FixedTuple::from_args(&[$value])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::FixedTuple::new([$($value),+])
    };
}
