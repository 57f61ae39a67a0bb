use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::vector::Vector;
use crate::Matrix;

// ── Element-wise matrix ± matrix ────────────────────────────────────

macro_rules! impl_elementwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar, const R: usize, const C: usize> $OpAssign for Matrix<T, R, C> {
            fn $method_assign(&mut self, rhs: Self) {
                for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
                    *a = *a $op b;
                }
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $OpAssign<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            fn $method_assign(&mut self, rhs: &Matrix<T, R, C>) {
                self.$method_assign(*rhs);
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op for Matrix<T, R, C> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self {
                self.$method_assign(rhs);
                self
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, -);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        (*self).neg()
    }
}

// ── Matrix ∘ scalar ─────────────────────────────────────────────────
// `+` and `-` with a scalar touch every element, not just the diagonal.

macro_rules! impl_scalar_rhs {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar, const R: usize, const C: usize> $OpAssign<T> for Matrix<T, R, C> {
            fn $method_assign(&mut self, rhs: T) {
                for a in self.as_mut_slice() {
                    *a = *a $op rhs;
                }
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for Matrix<T, R, C> {
            type Output = Self;

            fn $method(mut self, rhs: T) -> Self {
                self.$method_assign(rhs);
                self
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;

            fn $method(self, rhs: T) -> Matrix<T, R, C> {
                (*self).$method(rhs)
            }
        }
    };
}

impl_scalar_rhs!(Add, add, AddAssign, add_assign, +);
impl_scalar_rhs!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_rhs!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_rhs!(Div, div, DivAssign, div_assign, /);

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Matrix product: (R×K) * (K×C) → (R×C) ──────────────────────────

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        let mut out = Matrix::<T, R, C>::zeros();
        for c in 0..C {
            // column c of the product is self · rhs[:, c]
            for k in 0..K {
                let b = rhs.data[c][k];
                for r in 0..R {
                    out.data[c][r] = out.data[c][r] + self.data[k][r] * b;
                }
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        (*self).mul(*rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<&Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: &Matrix<T, N, N>) {
        *self = *self * *rhs;
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        let mut out = Vector::<T, R>::zeros();
        for (col, &x) in self.data.iter().zip(v.iter()) {
            for (o, &a) in out.iter_mut().zip(col.iter()) {
                *o = *o + a * x;
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<&Vector<T, C>> for &Matrix<T, R, C> {
    type Output = Vector<T, R>;
    fn mul(self, v: &Vector<T, C>) -> Vector<T, R> {
        (*self).mul(*v)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<&Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;
    fn mul(self, v: &Vector<T, C>) -> Vector<T, R> {
        self.mul(*v)
    }
}

/// A 4×4 transform applied to a 3-vector treats it as the point `(x, y, z, 1)`.
impl<T: Scalar> Mul<Vector<T, 3>> for Matrix<T, 4, 4> {
    type Output = Vector<T, 4>;

    fn mul(self, v: Vector<T, 3>) -> Vector<T, 4> {
        self * v.plus_one_dim(T::one())
    }
}

impl<T: Scalar> Mul<&Vector<T, 3>> for &Matrix<T, 4, 4> {
    type Output = Vector<T, 4>;
    fn mul(self, v: &Vector<T, 3>) -> Vector<T, 4> {
        (*self).mul(*v)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_neg() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(a + b, Matrix::new([[6.0, 8.0], [10.0, 12.0]]));
        assert_eq!(b - a, Matrix::filled(4.0));
        assert_eq!(-a, Matrix::new([[-1.0, -2.0], [-3.0, -4.0]]));
        assert_eq!(&a + &b, a + b);

        let mut c = a;
        c += b;
        c -= &a;
        assert_eq!(c, b);
    }

    #[test]
    fn scalar_add_touches_every_element() {
        let id: Matrix<i32, 2, 2> = Matrix::identity();
        assert_eq!(id + 1, Matrix::new([[2, 1], [1, 2]]));
        let mut m = id;
        m -= 1;
        assert_eq!(m, Matrix::new([[0, -1], [-1, 0]]));
    }

    #[test]
    fn scalar_mul_div() {
        let m = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!(m * 0.5, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(m / 2.0, m * 0.5);
        assert_eq!(2.0 * m, m * 2.0);
        let mut n = m;
        n /= 2.0;
        n *= 4.0;
        assert_eq!(n, m * 2.0);
    }

    #[test]
    fn matmul_2x2() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        let c = a * b;
        assert_eq!(c[(0, 0)], 19.0); // 1*5 + 2*7
        assert_eq!(c[(0, 1)], 22.0); // 1*6 + 2*8
        assert_eq!(c[(1, 0)], 43.0); // 3*5 + 4*7
        assert_eq!(c[(1, 1)], 50.0); // 3*6 + 4*8
    }

    #[test]
    fn matmul_rectangular() {
        let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::new([[7, 8], [9, 10], [11, 12]]);
        let c: Matrix<i32, 2, 2> = &a * &b;
        assert_eq!(c, Matrix::new([[58, 64], [139, 154]]));
    }

    #[test]
    fn mul_assign_square() {
        let mut a = Matrix::new([[1, 1], [0, 1]]);
        a *= Matrix::new([[1, 1], [0, 1]]);
        assert_eq!(a, Matrix::new([[1, 2], [0, 1]]));
    }

    #[test]
    fn matrix_vector() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let v = Vector::from_array([1, 0, -1]);
        assert_eq!(m * v, Vector::from_array([-2, -2]));
        assert_eq!(&m * &v, Vector::from_array([-2, -2]));
    }

    #[test]
    fn homogeneous_point() {
        let mut t: Matrix<f64, 4, 4> = Matrix::identity();
        t[(0, 3)] = 2.0;
        t[(2, 3)] = -1.0;
        let p = t * Vector::from_array([1.0, 1.0, 1.0]);
        assert_eq!(p, Vector::from_array([3.0, 1.0, 0.0, 1.0]));
        let q = t * Vector::from_array([1.0, 1.0, 1.0, 0.0]);
        assert_eq!(q, Vector::from_array([1.0, 1.0, 1.0, 0.0]));
    }
}
