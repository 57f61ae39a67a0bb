//! Polynomial root finding.
//!
//! Coefficients are given constant term first: `c[0] + c[1]·x + … + c[n]·xⁿ`.
//! Zero leading coefficients are dropped before the degree is decided.
//!
//! - Degree 1–4: closed forms (linear, quadratic, Cardano, Ferrari).
//! - Degree ≥ 5: Durand–Kerner simultaneous iteration.
//!
//! Every root is then polished with a few Newton steps, and imaginary parts
//! within [`PolySettings::real_tol`] of zero are snapped to exactly zero.
//! Roots come back in algorithm order; use [`sort_roots`] for a canonical one.
//!
//! # Example
//!
//! ```
//! use vecmat::poly;
//!
//! // x³ - 6x² + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let mut r = poly::solve_real(&[-6.0, 11.0, -6.0, 1.0]);
//! r.as_mut_slice().sort_by(|a, b| a.partial_cmp(b).unwrap());
//! assert!((r[0] - 1.0).abs() < 1e-12);
//! assert!((r[2] - 3.0).abs() < 1e-12);
//! ```

mod closed;
mod durand_kerner;

use num_complex::Complex;

use crate::traits::FloatScalar;

#[cfg(feature = "alloc")]
use crate::linalg::LinalgError;
#[cfg(feature = "alloc")]
use crate::vvec::VVec;

/// Settings for the polynomial solver.
#[derive(Debug, Clone, Copy)]
pub struct PolySettings<T> {
    /// Durand–Kerner stops once every update is below this.
    pub tolerance: T,
    /// Imaginary parts at or below this are treated as zero.
    pub real_tol: T,
    /// Durand–Kerner iteration limit.
    pub max_iter: usize,
    /// Newton steps applied to each root after solving.
    pub polish_steps: usize,
}

impl Default for PolySettings<f64> {
    fn default() -> Self {
        Self {
            tolerance: 1e-14,
            real_tol: 1e-10,
            max_iter: 500,
            polish_steps: 3,
        }
    }
}

impl Default for PolySettings<f32> {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            real_tol: 1e-4,
            max_iter: 500,
            polish_steps: 3,
        }
    }
}

/// Summary of an allocation-free [`roots_into`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyOutcome {
    /// Number of roots written (the trimmed degree).
    pub count: usize,
    /// False only when Durand–Kerner hit `max_iter`.
    pub converged: bool,
    /// Durand–Kerner iterations used; zero for closed forms.
    pub iterations: usize,
}

/// Roots plus convergence diagnostics, from [`solve_with`].
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
pub struct PolyRoots<T> {
    pub roots: VVec<Complex<T>>,
    pub converged: bool,
    pub iterations: usize,
}

#[cfg(feature = "alloc")]
impl<T> PolyRoots<T> {
    /// The roots, or [`LinalgError::ConvergenceFailure`] if the iteration
    /// limit was reached.
    pub fn into_converged(self) -> Result<VVec<Complex<T>>, LinalgError> {
        if self.converged {
            Ok(self.roots)
        } else {
            Err(LinalgError::ConvergenceFailure)
        }
    }
}

/// Drop zero leading (highest-order) coefficients.
fn trimmed<T: FloatScalar>(coeffs: &[T]) -> &[T] {
    let n = coeffs
        .iter()
        .rposition(|&c| c != T::zero())
        .map_or(0, |i| i + 1);
    &coeffs[..n]
}

/// Degree after trimming zero leading coefficients. An empty or all-zero
/// input has degree 0.
pub fn degree<T: FloatScalar>(coeffs: &[T]) -> usize {
    trimmed(coeffs).len().saturating_sub(1)
}

/// Evaluate the polynomial at a complex point (Horner's scheme).
///
/// ```
/// use vecmat::poly;
/// use num_complex::Complex;
/// let p = poly::eval(&[1.0, 0.0, 1.0], Complex::new(0.0, 1.0));
/// assert_eq!(p, Complex::new(0.0, 0.0));
/// ```
pub fn eval<T: FloatScalar>(coeffs: &[T], z: Complex<T>) -> Complex<T> {
    coeffs
        .iter()
        .rev()
        .fold(Complex::new(T::zero(), T::zero()), |acc, &c| acc * z + c)
}

/// One Horner pass over `lead·zⁿ + lower[n-1]·zⁿ⁻¹ + … + lower[0]`.
///
/// Returns `p(z)`, `p'(z)` and `Σ|c_k|·|z|^k`; the last bounds the rounding
/// error of `p(z)`.
pub(crate) fn horner<T: FloatScalar>(
    lower: &[T],
    lead: T,
    z: Complex<T>,
) -> (Complex<T>, Complex<T>, T) {
    let r = z.norm();
    lower.iter().rev().fold(
        (Complex::new(lead, T::zero()), Complex::new(T::zero(), T::zero()), lead.abs()),
        |(p, dp, m), &c| (p * z + c, dp * z + p, m * r + c.abs()),
    )
}

/// Newton steps on one root. A step is kept only if it shrinks `|p|`.
fn polish<T: FloatScalar>(lower: &[T], lead: T, z: &mut Complex<T>, steps: usize) {
    let (mut p, mut dp, _) = horner(lower, lead, *z);
    for _ in 0..steps {
        if dp.norm_sqr() == T::zero() || p.norm_sqr() == T::zero() {
            return;
        }
        let next = *z - p / dp;
        if !(next.re.is_finite() && next.im.is_finite()) {
            return;
        }
        let (np, ndp, _) = horner(lower, lead, next);
        if np.norm_sqr() >= p.norm_sqr() {
            return;
        }
        *z = next;
        p = np;
        dp = ndp;
    }
}

/// Allocation-free core of the solver.
///
/// Writes the roots of `coeffs` into the front of `out` and reports how many
/// were written.
///
/// # Panics
///
/// Panics if `out` is shorter than the trimmed degree.
pub fn roots_into<T: FloatScalar>(
    coeffs: &[T],
    out: &mut [Complex<T>],
    settings: &PolySettings<T>,
) -> PolyOutcome {
    match trimmed(coeffs).split_last() {
        Some((&lead, lower)) => solve_split(lower, lead, out, settings),
        None => solve_split(&[], T::one(), out, settings),
    }
}

/// Roots of the monic `xⁿ + lower[n-1]·xⁿ⁻¹ + … + lower[0]`.
pub(crate) fn monic_roots_into<T: FloatScalar>(
    lower: &[T],
    out: &mut [Complex<T>],
    settings: &PolySettings<T>,
) -> PolyOutcome {
    solve_split(lower, T::one(), out, settings)
}

fn solve_split<T: FloatScalar>(
    lower: &[T],
    lead: T,
    out: &mut [Complex<T>],
    settings: &PolySettings<T>,
) -> PolyOutcome {
    let n = lower.len();
    assert!(out.len() >= n, "root buffer too small for degree {}", n);

    let mut outcome = PolyOutcome {
        count: n,
        converged: true,
        iterations: 0,
    };
    if n == 0 {
        return outcome;
    }

    let out = &mut out[..n];
    // dividing through by a vanishing lead coefficient swamps the closed
    // forms; the simultaneous iteration copes with the far-out roots
    let biggest = lower.iter().fold(T::zero(), |m, &c| m.max(c.abs()));
    let negligible_lead = lead.abs() <= T::epsilon().sqrt() * biggest;
    if negligible_lead && n <= 4 {
        log::debug!("poly: lead {:?} negligible against {:?}, iterating", lead, biggest);
    }
    if n <= 4 && !negligible_lead {
        let mut a = [T::zero(); 4];
        for (ai, &ci) in a.iter_mut().zip(lower) {
            *ai = ci / lead;
        }
        closed::solve_monic(&a[..n], out);
        for z in out.iter_mut() {
            polish(&a[..n], T::one(), z, settings.polish_steps);
        }
    } else {
        let (converged, iterations) = durand_kerner::solve(lower, lead, out, settings);
        outcome.converged = converged;
        outcome.iterations = iterations;
        for z in out.iter_mut() {
            polish(lower, lead, z, settings.polish_steps);
        }
    }

    for z in out.iter_mut() {
        if z.im.abs() <= settings.real_tol {
            z.im = T::zero();
        }
    }
    outcome
}

/// Roots with convergence diagnostics.
#[cfg(feature = "alloc")]
pub fn solve_with<T: FloatScalar>(coeffs: &[T], settings: &PolySettings<T>) -> PolyRoots<T> {
    let zero = Complex::new(T::zero(), T::zero());
    let mut roots = alloc::vec![zero; degree(coeffs)];
    let outcome = roots_into(coeffs, &mut roots, settings);
    PolyRoots {
        roots: VVec::from_vec(roots),
        converged: outcome.converged,
        iterations: outcome.iterations,
    }
}

/// All complex roots, with default settings for `f64`.
///
/// Never fails; see [`solve_with`] for convergence information.
#[cfg(feature = "alloc")]
pub fn solve(coeffs: &[f64]) -> VVec<Complex<f64>> {
    solve_with(coeffs, &PolySettings::default()).roots
}

/// Real roots only, with default settings for `f64`.
#[cfg(feature = "alloc")]
pub fn solve_real(coeffs: &[f64]) -> VVec<f64> {
    // imaginary parts within `real_tol` are already snapped to zero
    solve(coeffs)
        .iter()
        .filter(|z| z.im == 0.0)
        .map(|z| z.re)
        .collect()
}

/// Sort ascending by real part, then imaginary part.
pub fn sort_roots<T: FloatScalar>(roots: &mut [Complex<T>]) {
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn settings_defaults() {
        let d = PolySettings::<f64>::default();
        assert_eq!(d.tolerance, 1e-14);
        assert_eq!(d.max_iter, 500);
        let f = PolySettings::<f32>::default();
        assert_eq!(f.real_tol, 1e-4);
        assert_eq!(f.polish_steps, 3);
    }

    #[test]
    fn trimming_and_degree() {
        assert_eq!(degree::<f64>(&[]), 0);
        assert_eq!(degree(&[0.0, 0.0]), 0);
        assert_eq!(degree(&[1.0, 2.0, 0.0, 0.0]), 1);
        assert!(solve(&[]).is_empty());
        assert!(solve(&[5.0]).is_empty());
    }

    #[test]
    fn linear_with_trailing_zeros() {
        let r = solve(&[-3.0, 2.0, 0.0, 0.0]);
        assert_eq!(r.len(), 1);
        assert_eq!(r[0], c(1.5, 0.0));
    }

    #[test]
    fn quadratic_real_and_complex() {
        let mut r = solve(&[-2.0, -1.0, 1.0]).into_vec();
        sort_roots(&mut r);
        assert!((r[0] - c(-1.0, 0.0)).norm() < 1e-14);
        assert!((r[1] - c(2.0, 0.0)).norm() < 1e-14);

        let mut r = solve(&[5.0, -2.0, 1.0]).into_vec();
        sort_roots(&mut r);
        assert!((r[0] - c(1.0, -2.0)).norm() < 1e-14);
        assert!((r[1] - c(1.0, 2.0)).norm() < 1e-14);
    }

    #[test]
    fn double_root_is_repeated() {
        let r = solve(&[1.0, -2.0, 1.0]);
        assert_eq!(r.len(), 2);
        assert_eq!(r[0], c(1.0, 0.0));
        assert_eq!(r[1], c(1.0, 0.0));
    }

    #[test]
    fn eval_horner() {
        let p = [1.0, -3.0, 0.0, 2.0];
        assert_eq!(eval(&p, c(2.0, 0.0)), c(11.0, 0.0));
        let (v, d, m) = horner(&[-6.0, 11.0, -6.0], 1.0, c(1.0, 0.0));
        assert_eq!(v, c(0.0, 0.0));
        assert_eq!(d, c(2.0, 0.0));
        assert_eq!(m, 24.0);
    }

    #[test]
    fn sort_is_lexical() {
        let mut r = [c(1.0, 1.0), c(-1.0, 0.0), c(1.0, -1.0)];
        sort_roots(&mut r);
        assert_eq!(r, [c(-1.0, 0.0), c(1.0, -1.0), c(1.0, 1.0)]);
    }

    #[test]
    fn roots_into_reports_count() {
        let mut buf = [c(9.0, 9.0); 4];
        let out = roots_into(&[2.0, 1.0, 0.0], &mut buf, &PolySettings::default());
        assert_eq!(out.count, 1);
        assert!(out.converged);
        assert_eq!(buf[0], c(-2.0, 0.0));
        assert_eq!(buf[1], c(9.0, 9.0));
    }

    #[test]
    #[should_panic(expected = "root buffer too small")]
    fn roots_into_short_buffer() {
        let mut buf = [c(0.0, 0.0); 1];
        roots_into(&[1.0, 0.0, 1.0], &mut buf, &PolySettings::default());
    }

    #[test]
    fn into_converged() {
        let ok = solve_with(&[-32.0, 0.0, 0.0, 0.0, 0.0, 1.0], &PolySettings::default());
        assert!(ok.converged);
        assert_eq!(ok.into_converged().map(|r| r.len()), Ok(5));

        let starved = PolySettings {
            max_iter: 1,
            ..PolySettings::default()
        };
        let bad = solve_with(&[-32.0, 0.0, 0.0, 0.0, 0.0, 1.0], &starved);
        assert!(!bad.converged);
        assert_eq!(bad.iterations, 1);
        assert_eq!(bad.into_converged(), Err(LinalgError::ConvergenceFailure));
    }

    #[test]
    fn f32_cubic() {
        let r = solve_with(&[-6.0_f32, 11.0, -6.0, 1.0], &PolySettings::default());
        let mut re: alloc::vec::Vec<f32> = r.roots.iter().map(|z| z.re).collect();
        re.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (got, want) in re.iter().zip([1.0_f32, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-4);
        }
    }
}
