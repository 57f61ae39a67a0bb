use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::VVec;
use crate::traits::Scalar;

// ── Element-wise vvec ∘ vvec ────────────────────────────────────────
// All forms panic with "vvec length mismatch" on unequal lengths.

macro_rules! impl_elementwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar> $OpAssign<&VVec<T>> for VVec<T> {
            fn $method_assign(&mut self, rhs: &VVec<T>) {
                self.check_len(rhs);
                for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
                    *a = *a $op b;
                }
            }
        }

        impl<T: Scalar> $OpAssign for VVec<T> {
            fn $method_assign(&mut self, rhs: Self) {
                self.$method_assign(&rhs);
            }
        }

        impl<T: Scalar> $Op<&VVec<T>> for VVec<T> {
            type Output = VVec<T>;
            fn $method(mut self, rhs: &VVec<T>) -> VVec<T> {
                self.$method_assign(rhs);
                self
            }
        }

        impl<T: Scalar> $Op for VVec<T> {
            type Output = VVec<T>;
            fn $method(self, rhs: VVec<T>) -> VVec<T> {
                self.$method(&rhs)
            }
        }

        impl<T: Scalar> $Op<&VVec<T>> for &VVec<T> {
            type Output = VVec<T>;
            fn $method(self, rhs: &VVec<T>) -> VVec<T> {
                self.clone().$method(rhs)
            }
        }

        impl<T: Scalar> $Op<VVec<T>> for &VVec<T> {
            type Output = VVec<T>;
            fn $method(self, rhs: VVec<T>) -> VVec<T> {
                self.clone().$method(&rhs)
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise!(Div, div, DivAssign, div_assign, /);

// ── VVec ∘ scalar ───────────────────────────────────────────────────

macro_rules! impl_scalar_rhs {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar> $OpAssign<T> for VVec<T> {
            fn $method_assign(&mut self, rhs: T) {
                for x in self.data.iter_mut() {
                    *x = *x $op rhs;
                }
            }
        }

        impl<T: Scalar> $Op<T> for VVec<T> {
            type Output = VVec<T>;
            fn $method(mut self, rhs: T) -> VVec<T> {
                self.$method_assign(rhs);
                self
            }
        }

        impl<T: Scalar> $Op<T> for &VVec<T> {
            type Output = VVec<T>;
            fn $method(self, rhs: T) -> VVec<T> {
                self.map(|&x| x $op rhs)
            }
        }
    };
}

impl_scalar_rhs!(Add, add, AddAssign, add_assign, +);
impl_scalar_rhs!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_rhs!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_rhs!(Div, div, DivAssign, div_assign, /);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for VVec<T> {
    type Output = VVec<T>;

    fn neg(mut self) -> VVec<T> {
        self.data.iter_mut().for_each(|x| *x = T::zero() - *x);
        self
    }
}

impl<T: Scalar> Neg for &VVec<T> {
    type Output = VVec<T>;

    fn neg(self) -> VVec<T> {
        self.map(|&x| T::zero() - x)
    }
}

// ── scalar ∘ vvec (concrete impls to avoid orphan rules) ────────────

macro_rules! impl_scalar_lhs {
    (@op $t:ty, $Op:ident, $method:ident, $op:tt) => {
        impl $Op<VVec<$t>> for $t {
            type Output = VVec<$t>;
            fn $method(self, mut rhs: VVec<$t>) -> VVec<$t> {
                rhs.data.iter_mut().for_each(|x| *x = self $op *x);
                rhs
            }
        }

        impl $Op<&VVec<$t>> for $t {
            type Output = VVec<$t>;
            fn $method(self, rhs: &VVec<$t>) -> VVec<$t> {
                rhs.map(|&x| self $op x)
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
