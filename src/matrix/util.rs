use core::fmt::{self, Write as _};

use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;
use crate::Matrix;

// ── Element maps and aggregation ────────────────────────────────────

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(f64::sqrt);
    /// assert_eq!(r, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        Matrix {
            data: self.data.map(|col| col.map(&mut f)),
        }
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for col in self.data.iter_mut() {
                col.swap(a, b);
            }
        }
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.as_slice().iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Row `i` as a vector.
    ///
    /// ```
    /// use vecmat::{Matrix, Vector};
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.row(1), Vector::from_array([4, 5, 6]));
    /// assert_eq!(m.col(2), Vector::from_array([3, 6]));
    /// ```
    pub fn row(&self, i: usize) -> Vector<T, C> {
        Vector::from_fn(|c| self.data[c][i])
    }

    pub fn set_row(&mut self, i: usize, v: &Vector<T, C>) {
        for (col, &x) in self.data.iter_mut().zip(v.iter()) {
            col[i] = x;
        }
    }

    /// Column `j` as a vector.
    pub fn col(&self, j: usize) -> Vector<T, R> {
        Vector::from_array(self.data[j])
    }

    pub fn set_col(&mut self, j: usize, v: &Vector<T, R>) {
        self.data[j] = v.into_array();
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Element-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(T::abs)
    }
}

// ── Display ─────────────────────────────────────────────────────────
// One line per row between box-drawing bars, columns right-aligned.

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: [usize; C] = core::array::from_fn(|c| {
            self.data[c]
                .iter()
                .map(|x| {
                    let mut w = WidthCounter(0);
                    let _ = write!(w, "{}", x);
                    w.0
                })
                .max()
                .unwrap_or(0)
        });

        for r in 0..R {
            if r > 0 {
                f.write_char('\n')?;
            }
            f.write_char('│')?;
            for (c, &width) in widths.iter().enumerate() {
                let sep = if c == 0 { "" } else { "  " };
                write!(f, "{}{:>width$}", sep, self.data[c][r], width = width)?;
            }
            f.write_char('│')?;
        }
        Ok(())
    }
}

/// Counts the bytes a `Display` impl would write, without allocating.
struct WidthCounter(usize);

impl fmt::Write for WidthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_type_change() {
        let m = Matrix::new([[1.6_f64, 2.0], [3.0, 4.0]]);
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded, Matrix::new([[1, 2], [3, 4]]));
    }

    #[test]
    fn sum_and_abs() {
        assert_eq!(Matrix::new([[1, 2, 3], [4, 5, 6]]).sum(), 21);
        let m = Matrix::new([[1.0_f64, -2.0], [-3.0, 4.0]]);
        assert_eq!(m.abs(), Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn rows_and_cols() {
        let mut m: Matrix<f64, 2, 3> = Matrix::zeros();
        m.set_row(0, &Vector::from_array([1.0, 2.0, 3.0]));
        m.set_col(2, &Vector::from_array([7.0, 8.0]));
        assert_eq!(m, Matrix::new([[1.0, 2.0, 7.0], [0.0, 0.0, 8.0]]));
        assert_eq!(m.col(0), Vector::from_array([1.0, 0.0]));
        assert_eq!(m.row(1), Vector::from_array([0.0, 0.0, 8.0]));
    }

    #[test]
    fn swaps() {
        let mut m = Matrix::new([[1, 2], [3, 4]]);
        m.swap_rows(0, 1);
        assert_eq!(m, Matrix::new([[3, 4], [1, 2]]));
        m.swap_cols(0, 1);
        assert_eq!(m, Matrix::new([[4, 3], [2, 1]]));
        m.swap_rows(1, 1);
        assert_eq!(m, Matrix::new([[4, 3], [2, 1]]));
    }

    #[test]
    fn display_alignment() {
        let m = Matrix::new([[1, 100], [1000, 2]]);
        let s = format!("{}", m);
        assert_eq!(s, "│   1  100│\n│1000    2│");
    }
}
