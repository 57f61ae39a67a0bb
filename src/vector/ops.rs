use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Vector;
use crate::traits::Scalar;

// ── Element-wise vector ∘ vector ────────────────────────────────────
// `*` and `/` between vectors are Hadamard operations.

macro_rules! impl_elementwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let mut out = self;
                for (o, &r) in out.data.iter_mut().zip(rhs.data.iter()) {
                    *o = *o $op r;
                }
                out
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                for (o, &r) in self.data.iter_mut().zip(rhs.data.iter()) {
                    *o = *o $op r;
                }
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<&Vector<T, N>> for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: &Vector<T, N>) {
                self.$method_assign(*rhs);
            }
        }

        impl<T: Scalar, const N: usize> $Op<Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: Vector<T, N>) -> Vector<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise!(Div, div, DivAssign, div_assign, /);

// ── Vector ∘ scalar ─────────────────────────────────────────────────

macro_rules! impl_scalar_rhs {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.map(|x| x $op rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<T> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: T) -> Vector<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<T> for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: T) {
                for x in self.data.iter_mut() {
                    *x = *x $op rhs;
                }
            }
        }
    };
}

impl_scalar_rhs!(Add, add, AddAssign, add_assign, +);
impl_scalar_rhs!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_rhs!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_rhs!(Div, div, DivAssign, div_assign, /);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Vector<T, N> {
        (*self).neg()
    }
}

// ── scalar ∘ vector (concrete impls to avoid orphan rules) ──────────
// `s - v` and `s / v` apply `s` on the left of every element.

macro_rules! impl_scalar_lhs {
    (@op $t:ty, $Op:ident, $method:ident, $op:tt) => {
        impl<const N: usize> $Op<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|x| self $op x)
            }
        }

        impl<const N: usize> $Op<&Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: &Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|x| self $op x)
            }
        }
    };
    ($($t:ty),*) => {
        $(
            impl_scalar_lhs!(@op $t, Add, add, +);
            impl_scalar_lhs!(@op $t, Sub, sub, -);
            impl_scalar_lhs!(@op $t, Mul, mul, *);
            impl_scalar_lhs!(@op $t, Div, div, /);
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
