use core::fmt::Debug;
use num_complex::Complex;
use num_traits::float::TotalOrder;
use num_traits::{Float, Num, NumCast, One, Zero};

/// Element type of vectors and matrices.
///
/// Anything `Copy` with ring arithmetic qualifies: the float and integer
/// primitives as well as `Complex<T>`.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Real floating-point element (`f32`, `f64`).
///
/// Lengths, angles, rotations, statistics and both solvers are only
/// available for these. [`TotalOrder`] gives sorts a total order even with
/// NaN present.
pub trait FloatScalar: Scalar + Float + TotalOrder + LinalgScalar<Real = Self> {
    /// `v` converted to `Self`, NaN if it cannot be represented.
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// How far a length may stray from 1 and still count as unit:
    /// `1e-6` in single precision, `1e-14` in double.
    #[inline]
    fn unit_thresh() -> Self {
        if Self::epsilon() > Self::lit(1e-10) {
            Self::lit(1e-6)
        } else {
            Self::lit(1e-14)
        }
    }
}

impl<T: Scalar + Float + TotalOrder + LinalgScalar<Real = T>> FloatScalar for T {}

/// Element that can be pivoted on during elimination.
///
/// Real floats and `Complex<f32>`/`Complex<f64>`, so [`Matrix::inverse`]
/// works for complex matrices too.
///
/// [`Matrix::inverse`]: crate::Matrix::inverse
pub trait LinalgScalar: Scalar {
    /// `Self` for reals, `T` for `Complex<T>`.
    type Real: FloatScalar;

    /// Pivot size: `|x|` for reals, `|z|` for complex.
    fn modulus(self) -> Self::Real;
}

impl LinalgScalar for f32 {
    type Real = f32;

    #[inline]
    fn modulus(self) -> f32 {
        Float::abs(self)
    }
}

impl LinalgScalar for f64 {
    type Real = f64;

    #[inline]
    fn modulus(self) -> f64 {
        Float::abs(self)
    }
}

impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }
}
