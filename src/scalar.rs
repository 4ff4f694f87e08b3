use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Numeric type a [`crate::dictionary::Dictionary`] can be instantiated over.
///
/// Collapses the per-impl trait bounds the teacher tableau scattered across
/// `simplex.rs`/`shadow_vertex_simplex.rs` into one alias. `Float` already
/// supplies `floor`/`ceil`/`abs`/sign comparisons, which every `ε`-tolerant
/// routine in this crate needs.
pub trait Scalar:
    Float + FromPrimitive + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Display + Default
{
}

impl<T> Scalar for T where
    T: Float + FromPrimitive + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Display + Default
{
}

/// Default tolerance for sign/feasibility comparisons in the primal/dual pivot loop.
pub const EPS_DEFAULT: f64 = 1e-9;

/// Default, looser tolerance for integrality checks in the cutting-plane driver.
pub const EPS_INT_DEFAULT: f64 = 1e-3;

/// `min(x - floor(x), ceil(x) - x)` — distance from `x` to the nearest integer.
pub fn dist_to_int<T: Scalar>(x: T) -> T {
    let down = x - x.floor();
    let up = x.ceil() - x;
    if down < up { down } else { up }
}

/// `x - floor(x)`, in `[0, 1)`.
pub fn frac<T: Scalar>(x: T) -> T {
    x - x.floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn dist_to_int_of_integer_is_zero() {
        assert_eq!(dist_to_int(3.0_f64), 0.0);
    }

    #[rstest]
    #[case(3.1, 0.1)]
    #[case(3.9, 0.1)]
    #[case(-2.25, 0.25)]
    #[case(0.5, 0.5)]
    fn dist_to_int_picks_nearer_side(#[case] x: f64, #[case] want: f64) {
        assert!((dist_to_int(x) - want).abs() < 1e-12);
    }

    #[test]
    fn frac_of_negative() {
        // -1.25 - floor(-1.25) = -1.25 - (-2) = 0.75
        assert!((frac(-1.25_f64) - 0.75).abs() < 1e-12);
    }
}
