//! Eigenvalues and eigenvectors of general (non-symmetric) square matrices.
//!
//! Eigenvalues are the roots of the characteristic polynomial, found with
//! the [`poly`](crate::poly) solver. Each eigenvector is a null vector
//! of `A - λI`, computed over `Complex<T>` by Gaussian elimination with
//! complete pivoting.
//!
//! Suited to the small matrices this crate targets; the polynomial route
//! loses accuracy quickly as `N` grows or eigenvalues cluster.

use num_complex::Complex;

use crate::poly::{self, PolySettings};
use crate::traits::FloatScalar;
use crate::vector::Vector;
use crate::Matrix;

/// An eigenvalue and its unit-norm eigenvector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigenpair<T, const N: usize> {
    pub eigenvalue: Complex<T>,
    /// Normalized so that `Σ|v_i|² = 1`.
    pub eigenvector: Vector<Complex<T>, N>,
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Sum of the principal 2×2 minors.
    fn principal_minors2(&self) -> T {
        let mut s = T::zero();
        for i in 0..N {
            for j in (i + 1)..N {
                s = s + self[(i, i)] * self[(j, j)] - self[(i, j)] * self[(j, i)];
            }
        }
        s
    }

    /// Sum of the principal 3×3 minors.
    fn principal_minors3(&self) -> T {
        let mut s = T::zero();
        for i in 0..N {
            for j in (i + 1)..N {
                for k in (j + 1)..N {
                    let m = Matrix::<T, 3, 3>::from_fn(|r, c| {
                        let idx = [i, j, k];
                        self[(idx[r], idx[c])]
                    });
                    s = s + m.determinant();
                }
            }
        }
        s
    }

    /// Faddeev–LeVerrier recursion, any size.
    fn faddeev_leverrier(&self) -> Vector<T, N> {
        let mut c = Vector::zeros();
        let mut m = Self::identity();
        for k in 1..=N {
            let am = *self * m;
            let ck = -am.trace() / T::lit(k as f64);
            c[N - k] = ck;
            m = am + Self::identity() * ck;
        }
        c
    }

    /// Coefficients `c[0..N]` of the monic characteristic polynomial
    /// `det(λI - A) = λᴺ + c[N-1]·λᴺ⁻¹ + … + c[0]`.
    ///
    /// The leading 1 is implicit.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// // λ² - 5λ - 2
    /// let c = a.characteristic_polynomial();
    /// assert_eq!(c.into_array(), [-2.0, -5.0]);
    /// ```
    pub fn characteristic_polynomial(&self) -> Vector<T, N> {
        let mut c = Vector::zeros();
        match N {
            0 => {}
            1 => c[0] = -self[(0, 0)],
            2 => {
                c[0] = self.determinant();
                c[1] = -self.trace();
            }
            3 => {
                c[0] = -self.determinant();
                c[1] = self.principal_minors2();
                c[2] = -self.trace();
            }
            4 => {
                c[0] = self.determinant();
                c[1] = -self.principal_minors3();
                c[2] = self.principal_minors2();
                c[3] = -self.trace();
            }
            _ => c = self.faddeev_leverrier(),
        }
        c
    }

    /// Eigenvalues in solver order, with explicit solver settings.
    pub fn eigenvalues_with(&self, settings: &PolySettings<T>) -> Vector<Complex<T>, N> {
        let c = self.characteristic_polynomial();
        let mut out = Vector::from_array([Complex::new(T::zero(), T::zero()); N]);
        poly::monic_roots_into(c.as_slice(), out.as_mut_slice(), settings);
        out
    }

    /// Eigenvalues in solver order (unsorted).
    ///
    /// ```
    /// use vecmat::{poly, Matrix};
    /// let a = Matrix::new([[2.0_f64, 1.0], [1.0, 2.0]]);
    /// let mut ev = a.eigenvalues().into_array();
    /// poly::sort_roots(&mut ev);
    /// assert!((ev[0].re - 1.0).abs() < 1e-12);
    /// assert!((ev[1].re - 3.0).abs() < 1e-12);
    /// ```
    pub fn eigenvalues(&self) -> Vector<Complex<T>, N>
    where
        PolySettings<T>: Default,
    {
        self.eigenvalues_with(&PolySettings::default())
    }

    /// Unit-norm null vector of `A - λI`.
    ///
    /// The smallest pivot under complete pivoting is always treated as zero,
    /// so an approximate `λ` still yields a vector. When more pivots vanish
    /// (a repeated eigenvalue with several independent vectors), one vector
    /// of that null space is returned.
    pub fn eigenvector(&self, lambda: Complex<T>) -> Vector<Complex<T>, N> {
        let mut b: Matrix<Complex<T>, N, N> = Matrix::from_fn(|r, c| {
            let a = Complex::new(self[(r, c)], T::zero());
            if r == c {
                a - lambda
            } else {
                a
            }
        });
        let mut perm: [usize; N] = core::array::from_fn(|i| i);

        let scale = b
            .as_slice()
            .iter()
            .map(|z| z.norm())
            .fold(T::zero(), T::max);
        let thresh = T::epsilon().sqrt() * scale.max(T::one());

        let mut rank = 0;
        while rank + 1 < N {
            let k = rank;
            let (mut pr, mut pc, mut best) = (k, k, T::zero());
            for c in k..N {
                for r in k..N {
                    let v = b[(r, c)].norm();
                    if v > best {
                        (pr, pc, best) = (r, c, v);
                    }
                }
            }
            if best <= thresh {
                break;
            }
            b.swap_rows(k, pr);
            b.swap_cols(k, pc);
            perm.swap(k, pc);

            let pivot = b[(k, k)];
            for r in (k + 1)..N {
                let f = b[(r, k)] / pivot;
                b[(r, k)] = Complex::new(T::zero(), T::zero());
                for c in (k + 1)..N {
                    let sub = f * b[(k, c)];
                    b[(r, c)] = b[(r, c)] - sub;
                }
            }
            rank += 1;
        }
        if N > 0 && rank + 1 < N {
            log::trace!(
                "eigenvector: A - λI has rank {} (< {}), picking one null vector",
                rank,
                N - 1
            );
        }

        // First free variable is 1, the rest 0; back-substitute the pivots.
        let mut x = [Complex::new(T::zero(), T::zero()); N];
        if N > 0 {
            x[rank] = Complex::new(T::one(), T::zero());
        }
        for k in (0..rank).rev() {
            let mut s = Complex::new(T::zero(), T::zero());
            for c in (k + 1)..N {
                s = s + b[(k, c)] * x[c];
            }
            x[k] = -s / b[(k, k)];
        }

        let norm = x.iter().fold(T::zero(), |acc, z| acc + z.norm_sqr()).sqrt();
        let mut v = Vector::from_array([Complex::new(T::zero(), T::zero()); N]);
        for (k, &p) in perm.iter().enumerate() {
            v[p] = if norm > T::zero() { x[k] / norm } else { x[k] };
        }
        v
    }

    /// All eigenvalues with their eigenvectors.
    pub fn eigenpairs(&self) -> Vector<Eigenpair<T, N>, N>
    where
        PolySettings<T>: Default,
    {
        let values = self.eigenvalues();
        Vector::from_array(core::array::from_fn(|i| Eigenpair {
            eigenvalue: values[i],
            eigenvector: self.eigenvector(values[i]),
        }))
    }
}
