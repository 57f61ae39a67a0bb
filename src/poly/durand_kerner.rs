//! Durand–Kerner (Weierstrass) simultaneous iteration.

use num_complex::Complex;

use super::{horner, PolySettings};
use crate::traits::FloatScalar;

/// Cauchy bound on root magnitude: `1 + max |c_i / c_n|`.
fn cauchy_bound<T: FloatScalar>(lower: &[T], lead: T) -> T {
    let lead = lead.abs();
    T::one()
        + lower
            .iter()
            .map(|&ci| ci.abs() / lead)
            .fold(T::zero(), T::max)
}

/// Iterate all roots of `lead·xⁿ + lower[n-1]·xⁿ⁻¹ + … + lower[0]` in place
/// in `z`, which must hold exactly `n` slots.
///
/// A root is settled once its update falls below `tolerance` (relative to
/// `max(1, |z|)`) or `p(z)` is down at the rounding-noise floor. Returns
/// `(converged, iterations)`.
pub(super) fn solve<T: FloatScalar>(
    lower: &[T],
    lead: T,
    z: &mut [Complex<T>],
    settings: &PolySettings<T>,
) -> (bool, usize) {
    let n = z.len();
    let noise_scale = T::epsilon() * T::lit((4 * n) as f64);

    let seed = Complex::new(T::lit(0.4), T::lit(0.9));
    let mut w = Complex::new(cauchy_bound(lower, lead), T::zero());
    for zi in z.iter_mut() {
        *zi = w;
        w = w * seed;
    }

    for iter in 1..=settings.max_iter {
        let mut settled = true;
        for i in 0..n {
            let zi = z[i];
            let (p, _, mag) = horner(lower, lead, zi);
            let denom = z
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(Complex::new(lead, T::zero()), |acc, (_, &zj)| acc * (zi - zj));
            if denom.norm_sqr() == T::zero() {
                // coincident estimates; nudge apart and keep iterating
                z[i] = zi + Complex::new(settings.tolerance, settings.tolerance);
                settled = false;
                continue;
            }
            let delta = p / denom;
            z[i] = zi - delta;
            let moved = delta.norm() > settings.tolerance * T::one().max(z[i].norm());
            if moved && p.norm() > noise_scale * mag {
                settled = false;
            }
        }
        if settled {
            return (true, iter);
        }
    }

    log::debug!(
        "durand-kerner: no convergence after {} iterations (degree {})",
        settings.max_iter,
        n
    );
    (false, settings.max_iter)
}
