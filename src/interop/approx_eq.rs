use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::FixedTuple;

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for FixedTuple<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for FixedTuple<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const N: usize> UlpsEq for FixedTuple<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod test {
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne, assert_ulps_eq};

    use crate::FixedTuple;

    #[test]
    fn slot_wise_comparison() {
        let a = FixedTuple::new([0.1f64 + 0.2, 1.0, -3.5]);
        let b = FixedTuple::new([0.3f64, 1.0, -3.5]);
        assert_relative_eq!(a, b);
        assert_ulps_eq!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);

        let c = FixedTuple::new([0.3f64, 1.0, -3.4]);
        assert_relative_ne!(a, c);
    }
}
