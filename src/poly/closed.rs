//! Closed-form roots for monic polynomials of degree 1 to 4.
//!
//! Every function takes the lower coefficients `a[0..n]` of
//! `xⁿ + a[n-1]·xⁿ⁻¹ + … + a[0]` and writes exactly `n` roots. Real roots
//! are written with an imaginary part of exactly zero.

use num_complex::Complex;

use crate::traits::FloatScalar;

pub(super) fn solve_monic<T: FloatScalar>(a: &[T], out: &mut [Complex<T>]) {
    match a.len() {
        1 => out[0] = real(-a[0]),
        2 => quadratic(a[1], a[0], out),
        3 => cubic(a[2], a[1], a[0], out),
        4 => quartic(a[3], a[2], a[1], a[0], out),
        _ => {}
    }
}

#[inline]
fn real<T: FloatScalar>(x: T) -> Complex<T> {
    Complex::new(x, T::zero())
}

/// `x² + b·x + c`.
///
/// Real roots use `q = -(b + sign(b)·√Δ)/2`, giving `q` and `c/q`, which
/// avoids cancellation when `b² ≫ 4c`.
fn quadratic<T: FloatScalar>(b: T, c: T, out: &mut [Complex<T>]) {
    let half = T::lit(0.5);
    let mut disc = b * b - T::lit(4.0) * c;
    // a double root leaves only rounding noise of either sign
    if disc.abs() <= T::epsilon() * T::lit(8.0) * (b * b + T::lit(4.0) * c.abs()) {
        disc = T::zero();
    }
    if disc >= T::zero() {
        let sq = disc.sqrt();
        let q = if b >= T::zero() {
            -(b + sq) * half
        } else {
            -(b - sq) * half
        };
        out[0] = real(q);
        out[1] = real(if q != T::zero() { c / q } else { T::zero() });
    } else {
        let re = -b * half;
        let im = (-disc).sqrt() * half;
        out[0] = Complex::new(re, im);
        out[1] = Complex::new(re, -im);
    }
}

/// `x³ + a·x² + b·x + c` by Cardano's method.
///
/// The depressed cubic `t³ + p·t + q` has one real root and a conjugate pair
/// when its discriminant `(q/2)² + (p/3)³` is positive, and three real roots
/// (trigonometric form) when it is negative. A discriminant within rounding
/// of zero means a repeated root `u = ∛(q/2)`: `t = u, u, -2u`.
fn cubic<T: FloatScalar>(a: T, b: T, c: T, out: &mut [Complex<T>]) {
    let third = T::one() / T::lit(3.0);
    let half = T::lit(0.5);
    let shift = -a * third;

    let p = b - a * a * third;
    let q = T::lit(2.0 / 27.0) * a * a * a - a * b * third + c;

    // p and q are built from terms of size a² and a³
    let scale = T::one() + a.abs();
    let tol = T::epsilon() * T::lit(16.0);
    if p.abs() <= tol * scale * scale && q.abs() <= tol * scale * scale * scale {
        log::trace!("cubic: triple root");
        out[..3].fill(real(shift));
        return;
    }

    let disc = q * q * T::lit(0.25) + p * p * p * third * third * third;

    // first-order rounding of disc through the errors in p and q
    let q_mag = T::lit(2.0 / 27.0) * (a * a * a).abs() + (a * b).abs() * third + c.abs();
    let p_mag = b.abs() + a * a * third;
    let disc_err = q.abs() * q_mag * half + p * p * p_mag * third * third;
    if disc.abs() <= tol * disc_err {
        log::trace!("cubic: repeated root, discriminant {:?}", disc);
        let u = (q * half).cbrt();
        out[0] = real(u + shift);
        out[1] = real(u + shift);
        out[2] = real(-T::lit(2.0) * u + shift);
        return;
    }

    if disc > T::zero() {
        log::trace!("cubic: one real root, discriminant {:?}", disc);
        let s = -q * half;
        let w = if s >= T::zero() {
            s + disc.sqrt()
        } else {
            s - disc.sqrt()
        };
        let u = w.cbrt();
        let v = if u != T::zero() { -p * third / u } else { T::zero() };
        let re = -(u + v) * half + shift;
        let im = (u - v) * T::lit(3.0).sqrt() * half;
        out[0] = real(u + v + shift);
        out[1] = Complex::new(re, im);
        out[2] = Complex::new(re, -im);
    } else {
        log::trace!("cubic: three real roots");
        let r = T::lit(2.0) * (-p * third).sqrt();
        let arg = (T::lit(3.0) * q / (T::lit(2.0) * p) * (-T::lit(3.0) / p).sqrt())
            .max(-T::one())
            .min(T::one());
        let phi = arg.acos() * third;
        let step = T::lit(2.0 * core::f64::consts::PI / 3.0);
        for (k, z) in out[..3].iter_mut().enumerate() {
            let kk = T::lit(k as f64);
            *z = real(r * (phi - step * kk).cos() + shift);
        }
    }
}

/// `x⁴ + a·x³ + b·x² + c·x + d` by Ferrari's method.
///
/// Shifts to the depressed quartic `y⁴ + p·y² + q·y + r`. With `q ≈ 0` it is
/// a quadratic in `y²`; otherwise the positive root `m` of the resolvent cubic
/// splits it into `y² ∓ s·y + (p/2 + m ± q/(2s))` with `s = √(2m)`.
fn quartic<T: FloatScalar>(a: T, b: T, c: T, d: T, out: &mut [Complex<T>]) {
    let half = T::lit(0.5);
    let shift = -a * T::lit(0.25);
    let a2 = a * a;

    let p = b - T::lit(3.0 / 8.0) * a2;
    let q = c - a * b * half + a2 * a * T::lit(0.125);
    let r = d - a * c * T::lit(0.25) + a2 * b * T::lit(1.0 / 16.0)
        - T::lit(3.0 / 256.0) * a2 * a2;

    let scale = T::one() + a.abs() + b.abs().sqrt();
    let biquadratic = q.abs() <= T::epsilon() * T::lit(16.0) * scale * scale * scale;

    let mut m = T::zero();
    if !biquadratic {
        let mut res = [Complex::new(T::zero(), T::zero()); 3];
        cubic(p, p * p * T::lit(0.25) - r, -q * q * T::lit(0.125), &mut res);
        m = res
            .iter()
            .filter(|z| z.im == T::zero())
            .map(|z| z.re)
            .fold(T::neg_infinity(), T::max);
    }

    if biquadratic || !(m > T::zero()) {
        log::trace!("quartic: biquadratic");
        let mut z = [Complex::new(T::zero(), T::zero()); 2];
        quadratic(p, r, &mut z);
        for (i, zi) in z.iter().enumerate() {
            let y = zi.sqrt();
            out[2 * i] = y + shift;
            out[2 * i + 1] = -y + shift;
        }
        return;
    }

    log::trace!("quartic: resolvent root m = {:?}", m);
    let s = (T::lit(2.0) * m).sqrt();
    let k = q / (T::lit(2.0) * s);
    let base = p * half + m;
    quadratic(-s, base + k, &mut out[..2]);
    quadratic(s, base - k, &mut out[2..4]);
    for z in out[..4].iter_mut() {
        *z = *z + shift;
    }
}
