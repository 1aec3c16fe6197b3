use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, IgnoredAny, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::FixedTuple;

// Encoded as a fixed-length tuple so that any `N` works, not only the array
// lengths serde implements natively.
impl<T: Serialize, const N: usize> Serialize for FixedTuple<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for value in self {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedTuple<T, N>
where
    T: Deserialize<'de> + Copy,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, TupleVisitor(PhantomData))
    }
}

struct TupleVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for TupleVisitor<T, N>
where
    T: Deserialize<'de> + Copy,
{
    type Value = FixedTuple<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let first = match seq.next_element()? {
            Some(_) if N == 0 => return Err(de::Error::invalid_length(1, &self)),
            Some(v) => v,
            None => {
                return FixedTuple::try_from_slice(&[])
                    .map_err(|_| de::Error::invalid_length(0, &self))
            }
        };

        let mut vals = [first; N];
        for (i, slot) in vals.iter_mut().enumerate().skip(1) {
            match seq.next_element()? {
                Some(v) => *slot = v,
                None => return Err(de::Error::invalid_length(i, &self)),
            }
        }

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }

        Ok(FixedTuple(vals))
    }
}
