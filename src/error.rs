use thiserror::Error;

/// Recoverable form of a violated [`FixedTuple`](crate::FixedTuple) precondition.
///
/// Returned by the `try_*` operations. The panicking counterparts check the
/// same conditions with assertions.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TupleError {
    #[error("expected {expected} values to fill the tuple, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("index {index} is out of bounds for a tuple of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl TupleError {
    #[cold]
    pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Self {
        tracing::debug!(expected, actual, "rejected tuple construction");
        Self::LengthMismatch { expected, actual }
    }

    #[cold]
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "rejected tuple access");
        Self::IndexOutOfBounds { index, len }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let err = TupleError::LengthMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            "expected 3 values to fill the tuple, got 2",
            err.to_string()
        );

        let err = TupleError::IndexOutOfBounds { index: 4, len: 4 };
        assert_eq!(
            "index 4 is out of bounds for a tuple of length 4",
            err.to_string()
        );
    }
}
