use crate::linalg::LinalgError;
use crate::traits::{LinalgScalar, Scalar};
use crate::vector::Vector;
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.data[i][i])
    }

    /// Extract the diagonal as a vector.
    pub fn diag(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.data[i][i])
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diag(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = v[i];
        }
        m
    }

    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix.
    pub fn pow(&self, mut n: u32) -> Self {
        let mut result = Self::identity();
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }
        result
    }

    /// Check if the matrix is symmetric (A == Aᵀ).
    pub fn is_symmetric(&self) -> bool {
        (0..N).all(|c| (c + 1..N).all(|r| self.data[c][r] == self.data[r][c]))
    }

    /// Transpose in place.
    pub fn transpose_inplace(&mut self) {
        for c in 0..N {
            for r in c + 1..N {
                let tmp = self.data[c][r];
                self.data[c][r] = self.data[r][c];
                self.data[r][c] = tmp;
            }
        }
    }

    /// Determinant.
    ///
    /// Closed forms for `N <= 4` and fraction-free (Bareiss) elimination
    /// above that, so integer-valued input gives an exact result whenever
    /// the intermediate products fit in `T`.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m = Matrix::<f64, 3, 3>::from_cols([[1.0, 0.0, 2.0], [1.0, 1.0, 3.5], [3.0, 2.0, 120.0]]);
    /// assert_eq!(m.determinant(), 111.0);
    /// ```
    pub fn determinant(&self) -> T {
        let a = |r: usize, c: usize| self.data[c][r];
        match N {
            0 => T::one(),
            1 => a(0, 0),
            2 => a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
            3 => {
                a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
                    - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
                    + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
            }
            4 => {
                let (s, c) = minors_4x4(self);
                s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
            }
            _ => self.determinant_bareiss(),
        }
    }

    fn determinant_bareiss(&self) -> T {
        let mut m = *self;
        let mut negate = false;
        let mut prev = T::one();
        for k in 0..N - 1 {
            if m.data[k][k] == T::zero() {
                let Some(p) = (k + 1..N).find(|&r| m.data[k][r] != T::zero()) else {
                    return T::zero();
                };
                m.swap_rows(k, p);
                negate = !negate;
            }
            let pivot = m.data[k][k];
            for r in k + 1..N {
                for c in k + 1..N {
                    m.data[c][r] = (m.data[c][r] * pivot - m.data[k][r] * m.data[c][k]) / prev;
                }
            }
            prev = pivot;
        }
        let det = m.data[N - 1][N - 1];
        if negate {
            T::zero() - det
        } else {
            det
        }
    }
}

/// The six 2×2 minors of rows 0–1 (`s`) and of rows 2–3 (`c`) of a 4×4.
///
/// Both the determinant and the adjugate are sums of products of one `s`
/// and one `c` term.
fn minors_4x4<T: Scalar, const N: usize>(m: &Matrix<T, N, N>) -> ([T; 6], [T; 6]) {
    let a = |r: usize, c: usize| m.data[c][r];
    let s = [
        a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
        a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
        a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
        a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
        a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
        a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
    ];
    let c = [
        a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
        a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
        a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
        a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
        a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
        a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
    ];
    (s, c)
}

impl<T: LinalgScalar, const N: usize> Matrix<T, N, N> {
    /// Inverse.
    ///
    /// Adjugate over determinant for `N <= 4`, Gauss–Jordan elimination with
    /// partial pivoting above that. A singular matrix is not an error: the
    /// result is non-finite and a warning is logged. Use
    /// [`try_inverse`](Self::try_inverse) to reject singular input.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let id = m * m.inverse();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            log::warn!("inverting a singular {}x{} matrix", N, N);
        }
        match N {
            0 => *self,
            1 => Self::filled(T::one() / det),
            2..=4 => self.adjugate() * (T::one() / det),
            _ => self.inverse_gauss_jordan(),
        }
    }

    /// Inverse, or [`LinalgError::Singular`] if the determinant is zero.
    ///
    /// ```
    /// use vecmat::{LinalgError, Matrix};
    /// let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
    /// assert_eq!(m.try_inverse(), Err(LinalgError::Singular));
    /// ```
    pub fn try_inverse(&self) -> Result<Self, LinalgError> {
        if self.determinant() == T::zero() {
            return Err(LinalgError::Singular);
        }
        Ok(self.inverse())
    }

    /// Replace `self` by its inverse. Same singular-input policy as [`inverse`](Self::inverse).
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Classical adjugate (transposed cofactor matrix) for `N` in `2..=4`.
    fn adjugate(&self) -> Self {
        let a = |r: usize, c: usize| self.data[c][r];
        let mut adj = Self::zeros();
        match N {
            2 => {
                adj.data[0][0] = a(1, 1);
                adj.data[1][0] = T::zero() - a(0, 1);
                adj.data[0][1] = T::zero() - a(1, 0);
                adj.data[1][1] = a(0, 0);
            }
            3 => {
                let rows = [
                    [
                        a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1),
                        a(0, 2) * a(2, 1) - a(0, 1) * a(2, 2),
                        a(0, 1) * a(1, 2) - a(0, 2) * a(1, 1),
                    ],
                    [
                        a(1, 2) * a(2, 0) - a(1, 0) * a(2, 2),
                        a(0, 0) * a(2, 2) - a(0, 2) * a(2, 0),
                        a(0, 2) * a(1, 0) - a(0, 0) * a(1, 2),
                    ],
                    [
                        a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0),
                        a(0, 1) * a(2, 0) - a(0, 0) * a(2, 1),
                        a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
                    ],
                ];
                for (r, row) in rows.iter().enumerate() {
                    for (c, &x) in row.iter().enumerate() {
                        adj.data[c][r] = x;
                    }
                }
            }
            4 => {
                let (s, c) = minors_4x4(self);
                let rows = [
                    [
                        a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                        T::zero() - a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                        a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                        T::zero() - a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
                    ],
                    [
                        T::zero() - a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                        a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                        T::zero() - a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                        a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
                    ],
                    [
                        a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                        T::zero() - a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                        a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                        T::zero() - a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
                    ],
                    [
                        T::zero() - a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                        a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                        T::zero() - a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                        a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
                    ],
                ];
                for (r, row) in rows.iter().enumerate() {
                    for (c, &x) in row.iter().enumerate() {
                        adj.data[c][r] = x;
                    }
                }
            }
            _ => {}
        }
        adj
    }

    fn inverse_gauss_jordan(&self) -> Self {
        let mut a = *self;
        let mut inv = Self::identity();
        for k in 0..N {
            // Partial pivoting: largest modulus in column k at or below the diagonal
            let p = (k..N).fold(k, |best, r| {
                if a.data[k][r].modulus() > a.data[k][best].modulus() {
                    r
                } else {
                    best
                }
            });
            a.swap_rows(k, p);
            inv.swap_rows(k, p);

            let scale = T::one() / a.data[k][k];
            for c in 0..N {
                a.data[c][k] = a.data[c][k] * scale;
                inv.data[c][k] = inv.data[c][k] * scale;
            }
            for r in 0..N {
                if r == k {
                    continue;
                }
                let f = a.data[k][r];
                if f == T::zero() {
                    continue;
                }
                for c in 0..N {
                    a.data[c][r] = a.data[c][r] - f * a.data[c][k];
                    inv.data[c][r] = inv.data[c][r] - f * inv.data[c][k];
                }
            }
        }
        inv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near<const N: usize>(a: &Matrix<f64, N, N>, b: &Matrix<f64, N, N>, tol: f64) {
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert!((x - y).abs() < tol, "{} vs {}", x, y);
        }
    }

    #[test]
    fn trace() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);
        let id: Matrix<f64, 3, 3> = Matrix::identity();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn diag_and_from_diag() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let d = m.diag();
        assert_eq!(d, Vector::from_array([1, 5, 9]));
        let m2 = Matrix::from_diag(&d);
        assert_eq!(m2[(1, 1)], 5);
        assert_eq!(m2[(0, 1)], 0);
    }

    #[test]
    fn pow() {
        let m = Matrix::new([[1, 1], [0, 1]]);
        assert_eq!(m.pow(0), Matrix::identity());
        assert_eq!(m.pow(1), m);
        assert_eq!(m.pow(3), Matrix::new([[1, 3], [0, 1]]));
    }

    #[test]
    fn symmetry_and_transpose_inplace() {
        let sym = Matrix::new([[1, 2, 3], [2, 5, 6], [3, 6, 9]]);
        assert!(sym.is_symmetric());
        let mut asym = Matrix::new([[1, 2], [3, 4]]);
        assert!(!asym.is_symmetric());
        asym.transpose_inplace();
        assert_eq!(asym, Matrix::new([[1, 3], [2, 4]]));
    }

    #[test]
    fn det_small_sizes() {
        assert_eq!(Matrix::<i32, 0, 0>::identity().determinant(), 1);
        assert_eq!(Matrix::new([[7]]).determinant(), 7);
        // column-major {1,4,1,5}
        let m2 = Matrix::<f64, 2, 2>::from_col_major_slice(&[1.0, 4.0, 1.0, 5.0]).unwrap();
        assert_eq!(m2.determinant(), 1.0);
        let m3 = Matrix::<f64, 3, 3>::from_col_major_slice(&[
            1.0, 0.0, 2.0, 1.0, 1.0, 3.5, 3.0, 2.0, 120.0,
        ])
        .unwrap();
        assert_eq!(m3.determinant(), 111.0);
    }

    #[test]
    fn det_4x4_integer() {
        let m = Matrix::new([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]);
        assert_eq!(m.determinant(), 30);
    }

    #[test]
    fn det_bareiss_matches_triangular() {
        // upper triangular: determinant is the diagonal product
        let m = Matrix::<i64, 5, 5>::from_fn(|r, c| {
            if r <= c {
                (r + c + 1) as i64
            } else {
                0
            }
        });
        assert_eq!(m.determinant(), 1 * 3 * 5 * 7 * 9);
    }

    #[test]
    fn det_bareiss_needs_pivot() {
        // swapping the first two rows of a diagonal matrix flips the sign
        let mut m = Matrix::<i32, 5, 5>::from_diag(&Vector::from_array([2, 3, 4, 5, 6]));
        m.swap_rows(0, 1);
        assert_eq!(m.determinant(), -720);
        m.set_row(4, &Vector::zeros());
        assert_eq!(m.determinant(), 0);
    }

    #[test]
    fn inverse_closed_forms() {
        let m2 = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
        assert_near(&(m2 * m2.inverse()), &Matrix::identity(), 1e-12);

        let m3 = Matrix::new([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]);
        assert_near(&(m3 * m3.inverse()), &Matrix::identity(), 1e-12);

        let m4 = Matrix::new([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        assert_near(&(m4 * m4.inverse()), &Matrix::identity(), 1e-12);
        assert_near(&(m4.inverse() * m4), &Matrix::identity(), 1e-12);
    }

    #[test]
    fn inverse_gauss_jordan_6x6() {
        let m = Matrix::<f64, 6, 6>::from_fn(|r, c| {
            if r == c {
                10.0
            } else {
                1.0 / (1.0 + r as f64 + 2.0 * c as f64)
            }
        });
        assert_near(&(m * m.inverse()), &Matrix::identity(), 1e-12);
    }

    #[test]
    fn invert_in_place() {
        let mut m = Matrix::new([[2.0, 0.0], [0.0, 4.0]]);
        m.invert();
        assert_eq!(m, Matrix::new([[0.5, 0.0], [0.0, 0.25]]));
    }

    #[test]
    fn singular_inverse_is_permissive() {
        let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        let inv = m.inverse();
        assert!(inv.as_slice().iter().any(|x| !x.is_finite()));
        assert_eq!(m.try_inverse(), Err(LinalgError::Singular));
    }
}
