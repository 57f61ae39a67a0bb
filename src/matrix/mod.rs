pub mod aliases;
pub mod eigen;
mod ops;
mod square;
mod transform;
mod util;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;
use crate::vector::DimensionMismatch;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is column-major: `data[col][row]`, so element `(r, c)` sits at
/// flat index `c * R + r` of [`as_slice`](Matrix::as_slice).
/// Stack-allocated, no-std compatible.
///
/// Square matrices default to the identity.
///
/// # Examples
///
/// ```
/// use vecmat::Matrix;
///
/// // `new` takes rows, for readable literals
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
///
/// let b: Matrix<f64, 3, 3> = Matrix::default();
/// assert_eq!(b, Matrix::identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; R]; C],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (`R` arrays of `C` elements);
    /// it is transposed into column-major storage.
    #[inline]
    pub fn new(rows: [[T; C]; R]) -> Self
    where
        T: Copy,
    {
        Self {
            data: core::array::from_fn(|c| core::array::from_fn(|r| rows[r][c])),
        }
    }

    /// Create a matrix from column-major nested arrays (`C` columns of `R` elements).
    #[inline]
    pub const fn from_cols(cols: [[T; R]; C]) -> Self {
        Self { data: cols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m: Matrix<i32, 2, 3> = Matrix::from_fn(|r, c| (10 * r + c) as i32);
    /// assert_eq!(m[(1, 2)], 12);
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|c| core::array::from_fn(|r| f(r, c))),
        }
    }

    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Column-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// Column-major mutable view of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// All-zero matrix.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); R]; C],
        }
    }

    /// Matrix with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: [[value; R]; C],
        }
    }

    /// Copy from a column-major slice of exactly `R * C` elements.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m = Matrix::<f64, 2, 2>::from_col_major_slice(&[1.0, 4.0, 1.0, 5.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 4.0);
    /// assert_eq!(m.determinant(), 1.0);
    /// ```
    pub fn from_col_major_slice(s: &[T]) -> Result<Self, DimensionMismatch> {
        if s.len() != R * C {
            return Err(DimensionMismatch {
                expected: (R, C),
                got: (1, s.len()),
            });
        }
        let mut m = Self::zeros();
        m.as_mut_slice().copy_from_slice(s);
        Ok(m)
    }

    /// Overwrite from a column-major slice. Panics unless `s.len() == R * C`.
    pub fn copy_from_slice(&mut self, s: &[T]) {
        self.as_mut_slice().copy_from_slice(s);
    }

    /// Transpose: `C × R` result.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.transpose(), Matrix::new([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|r, c| self.data[r][c])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Alias for [`identity`](Self::identity).
    #[inline]
    pub fn eye() -> Self {
        Self::identity()
    }

    /// Reset to the identity in place.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N, N> {
    fn default() -> Self {
        Self::identity()
    }
}

// Index by (row, col) tuple
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col][row]
    }
}

// Flat column-major index
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i / R][i % R]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i / R][i % R]
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_identity_default() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert!(z.as_slice().iter().all(|&x| x == 0.0));

        let id: Matrix<f64, 3, 3> = Matrix::default();
        assert_eq!(id, Matrix::identity());
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
        assert_eq!(Matrix::<f32, 2, 2>::eye(), Matrix::identity());
    }

    #[test]
    fn column_major_layout() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
        // (r, c) at c * R + r
        assert_eq!(m[5], m[(1, 2)]);
        assert_eq!(m[2], m[(0, 1)]);
        assert_eq!(Matrix::from_cols([[1, 4], [2, 5], [3, 6]]), m);
    }

    #[test]
    fn flat_index_mut() {
        let mut m: Matrix<i32, 2, 2> = Matrix::zeros();
        m[3] = 9;
        m[(1, 0)] = 4;
        assert_eq!(m.as_slice(), &[0, 4, 0, 9]);
    }

    #[test]
    fn slice_round_trip() {
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = Matrix::<f64, 3, 2>::from_col_major_slice(&src).unwrap();
        assert_eq!(m.as_slice().to_vec(), src.to_vec());
        assert_eq!(m[(2, 0)], 3.0);

        let err = Matrix::<f64, 3, 3>::from_col_major_slice(&src).unwrap_err();
        assert_eq!(err.expected, (3, 3));
        assert_eq!(err.got, (1, 6));

        let mut n: Matrix<f64, 2, 3> = Matrix::zeros();
        n.copy_from_slice(&src);
        assert_eq!(n[(1, 2)], 6.0);
    }

    #[test]
    #[should_panic]
    fn copy_from_slice_wrong_length() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m.copy_from_slice(&[1.0]);
    }

    #[test]
    fn filled_and_set_identity() {
        let mut m = Matrix::<i64, 2, 2>::filled(3);
        assert_eq!(m.as_slice(), &[3, 3, 3, 3]);
        m.set_identity();
        assert_eq!(m, Matrix::identity());
    }

    #[test]
    fn transpose_shape() {
        let m: Matrix<f64, 2, 3> = Matrix::from_fn(|r, c| (r * 3 + c) as f64);
        let t = m.transpose();
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t[(2, 1)], m[(1, 2)]);
    }
}
