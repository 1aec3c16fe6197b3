use bytemuck::{Pod, Zeroable};

use crate::{FixedTuple, TupleError};

// SAFETY: `FixedTuple` is `repr(transparent)` over `[T; N]`, and an array of
// zeroable elements is zeroable.
unsafe impl<T: Zeroable, const N: usize> Zeroable for FixedTuple<T, N> {}

// SAFETY: `FixedTuple` is `repr(transparent)` over `[T; N]`. Arrays of `Pod`
// elements have no padding and accept any bit pattern.
unsafe impl<T: Pod, const N: usize> Pod for FixedTuple<T, N> {}

impl<T: Pod, const N: usize> FixedTuple<T, N> {
    /// View the raw bytes of every slot, in index order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Read a tuple from exactly `size_of::<Self>()` bytes.
    ///
    /// The bytes need not be aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TupleError> {
        bytemuck::try_pod_read_unaligned(bytes)
            .map_err(|_| TupleError::length_mismatch(std::mem::size_of::<Self>(), bytes.len()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bytes_match_raw_array() {
        let raw = [0x0102_0304u32, 0xdead_beef, 7];
        let t = FixedTuple::new(raw);
        assert_eq!(bytemuck::bytes_of(&raw), t.as_bytes());
        assert_eq!(12, t.as_bytes().len());
    }

    #[test]
    fn read_from_bytes() {
        let t = FixedTuple::new([1u16, 2, 3]);
        let bytes = t.as_bytes().to_vec();
        assert_eq!(Ok(t), FixedTuple::<u16, 3>::from_bytes(&bytes));
        assert_eq!(
            Err(TupleError::LengthMismatch {
                expected: 6,
                actual: 5
            }),
            FixedTuple::<u16, 3>::from_bytes(&bytes[..5])
        );
    }

    #[test]
    fn zeroed() {
        let t: FixedTuple<f32, 4> = Zeroable::zeroed();
        assert_eq!([0.0; 4], t.into_array());
    }

    #[test]
    fn cast_slice_of_tuples() {
        let tuples = [FixedTuple::new([1u8, 2]), FixedTuple::new([3, 4])];
        let flat: &[u8] = bytemuck::cast_slice(&tuples);
        assert_eq!(&[1, 2, 3, 4], flat);
    }
}
