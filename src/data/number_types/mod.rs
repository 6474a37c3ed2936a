//! # Number types
//!
//! The simplex tableau is defined over an ordered field; this crate computes over floating point
//! approximations of one. Because rounding errors accumulate over successive pivots, every sign
//! decision in the algorithm is made relative to a zero tolerance rather than by literal
//! comparison with zero.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::Float;

/// Default tolerance within which a computed value is considered zero.
pub const EPSILON: f64 = 1e-10;

/// Element type of the tableau.
///
/// All methods containing algorithmic logic are defined over this trait; it collects the floating
/// point and in-place arithmetic operations that the elementary row operations need. It is
/// automatically implemented, in particular for `f32` and `f64`.
pub trait RealField:
    Float + AddAssign + SubAssign + MulAssign + DivAssign + Sum + Debug + Display
{
    /// Tolerance used for all comparisons against zero.
    ///
    /// Sign decisions gate pivoting and termination; comparing floating point values exactly
    /// would make those decisions unstable after a few pivots.
    #[must_use]
    fn zero_tolerance() -> Self {
        // Fits in any float type wider than f16.
        Self::from(EPSILON).unwrap()
    }

    /// Whether this value is zero, within the tolerance.
    #[must_use]
    fn is_negligible(self) -> bool {
        self.abs() <= Self::zero_tolerance()
    }
}

impl<F> RealField for F
where
    F: Float + AddAssign + SubAssign + MulAssign + DivAssign + Sum + Debug + Display,
{
}

#[cfg(test)]
mod test {
    use crate::data::number_types::RealField;

    #[test]
    fn negligible() {
        assert!(0_f64.is_negligible());
        assert!(1e-12_f64.is_negligible());
        assert!((-1e-12_f64).is_negligible());
        assert!(!1e-6_f64.is_negligible());
        assert!(!(-0.5_f64).is_negligible());
    }

    #[test]
    fn tolerance_converts() {
        assert!(f32::zero_tolerance() > 0_f32);
        assert!(f64::zero_tolerance() > 0_f64);
    }
}
