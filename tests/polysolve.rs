use approx::assert_abs_diff_eq;
use vecmat::{poly, Complex, PolySettings};

/// Match every expected root to a distinct computed one, in any order.
fn assert_roots(coeffs: &[f64], want: &[(f64, f64)], tol: f64) {
    let got = poly::solve(coeffs).into_vec();
    assert_eq!(got.len(), want.len(), "root count for {:?}", coeffs);
    let mut used = vec![false; got.len()];
    for &(re, im) in want {
        let hit = got.iter().enumerate().position(|(i, g)| {
            !used[i] && (g.re - re).abs() < tol && (g.im - im).abs() < tol
        });
        match hit {
            Some(i) => used[i] = true,
            None => panic!("{:?}: no root near {} + {}i in {:?}", coeffs, re, im, got),
        }
    }
}

// ── closed forms ────────────────────────────────────────────────────

#[test]
fn cubic_small_integer_roots() {
    let mut roots = poly::solve_real(&[-6.0, 11.0, -6.0, 1.0]).into_vec();
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(roots.len(), 3);
    for (got, want) in roots.iter().zip([1.0, 2.0, 3.0]) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
    }
}

#[test]
fn cubic_double_roots_are_kept_real() {
    let cases: [([f64; 4], [f64; 3]); 4] = [
        ([-2.0, 5.0, -4.0, 1.0], [1.0, 1.0, 2.0]),
        ([12.0, -16.0, 7.0, -1.0], [2.0, 2.0, 3.0]),
        ([-4.0, 8.0, -5.0, 1.0], [1.0, 2.0, 2.0]),
        ([0.0, 1.0, -2.0, 1.0], [0.0, 1.0, 1.0]),
    ];
    for (coeffs, want) in cases {
        let mut roots = poly::solve_real(&coeffs).into_vec();
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(roots.len(), 3, "{:?} -> {:?}", coeffs, roots);
        for (got, w) in roots.iter().zip(want) {
            assert_abs_diff_eq!(*got, w, epsilon = 1e-7);
        }
    }
}

#[test]
fn cubic_irrational_roots() {
    // x³ - 15x - 4 = (x - 4)(x² + 4x - 1)
    let s3 = 3.0_f64.sqrt();
    assert_roots(
        &[-4.0, -15.0, 0.0, 1.0],
        &[(-2.0 - s3, 0.0), (-2.0 + s3, 0.0), (4.0, 0.0)],
        1e-12,
    );
}

#[test]
fn ill_conditioned_cubic() {
    // x³ - 4.5x² + 6.25x - 1.875, checked against direct Cardano
    assert_roots(
        &[-1.875, 6.25, -4.5, 1.0],
        &[
            (0.41000946392092136, 0.0),
            (2.044995268039539, -0.6253475246264815),
            (2.044995268039539, 0.6253475246264815),
        ],
        1e-10,
    );
}

#[test]
fn quartics_with_imaginary_pair() {
    // (x² + 1)(x - 1)(x - 3)
    assert_roots(
        &[3.0, -4.0, 4.0, -4.0, 1.0],
        &[(0.0, -1.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0)],
        1e-10,
    );
    // (x² + 1)(x - 1)(x - 2)
    assert_roots(
        &[2.0, -3.0, 3.0, -3.0, 1.0],
        &[(0.0, -1.0), (0.0, 1.0), (1.0, 0.0), (2.0, 0.0)],
        1e-10,
    );
}

#[test]
fn quartic_double_real_root() {
    // (x² + 1)(x - 1)²; a double root is only good to about √ε
    assert_roots(
        &[1.0, -2.0, 2.0, -2.0, 1.0],
        &[(0.0, -1.0), (0.0, 1.0), (1.0, 0.0), (1.0, 0.0)],
        1e-6,
    );
}

#[test]
fn quartic_double_imaginary_pair() {
    // (x² + 2)²
    let s2 = 2.0_f64.sqrt();
    assert_roots(
        &[4.0, 0.0, 4.0, 0.0, 1.0],
        &[(0.0, -s2), (0.0, -s2), (0.0, s2), (0.0, s2)],
        1e-7,
    );
}

// ── Durand–Kerner ───────────────────────────────────────────────────

#[test]
fn degree_five_integer_roots() {
    let want: Vec<(f64, f64)> = (1..=5).map(|k| (k as f64, 0.0)).collect();
    assert_roots(&[-120.0, 274.0, -225.0, 85.0, -15.0, 1.0], &want, 1e-8);
}

#[test]
fn degree_seven_integer_roots() {
    let coeffs = [-5040.0, 13068.0, -13132.0, 6769.0, -1960.0, 322.0, -28.0, 1.0];
    let result = poly::solve_with(&coeffs, &PolySettings::default());
    assert!(result.converged);
    let want: Vec<(f64, f64)> = (1..=7).map(|k| (k as f64, 0.0)).collect();
    assert_roots(&coeffs, &want, 1e-6);
}

#[test]
fn fifth_roots_of_32() {
    let roots = poly::solve(&[-32.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(roots.len(), 5);
    for z in roots.iter() {
        assert_abs_diff_eq!(z.norm(), 2.0, epsilon = 1e-12);
        let r = poly::eval(&[-32.0, 0.0, 0.0, 0.0, 0.0, 1.0], *z);
        assert!(r.norm() < 1e-9);
    }
    // exactly one real root
    assert_eq!(roots.iter().filter(|z| z.im == 0.0).count(), 1);
}

// ── settings and diagnostics ───────────────────────────────────────

#[test]
fn tiny_leading_coefficient() {
    // 1e-20·x⁴ + x³ + 1e-3: cube roots of -1e-3 plus one root near -1e20
    let roots = poly::solve(&[1e-3, 0.0, 0.0, 1.0, 1e-20]).into_vec();
    assert_eq!(roots.len(), 4);
    assert!(roots.iter().all(|z| z.re.is_finite() && z.im.is_finite()));
    let (far, near): (Vec<&Complex<f64>>, Vec<&Complex<f64>>) = roots.iter().partition(|z| z.norm() > 1.0);
    assert_eq!(far.len(), 1);
    assert_abs_diff_eq!(far[0].re / -1e20, 1.0, epsilon = 1e-10);
    assert_eq!(far[0].im, 0.0);
    for z in near {
        assert_abs_diff_eq!(z.norm(), 0.1, epsilon = 1e-12);
        assert!((z.powu(3) + 1e-3).norm() < 1e-15);
    }
}

#[test]
fn trailing_zero_leading_coefficients_are_trimmed() {
    assert_eq!(poly::degree(&[2.0, 1.0, 0.0, 0.0]), 1);
    assert_roots(&[2.0, 1.0, 0.0, 0.0], &[(-2.0, 0.0)], 1e-15);
    assert!(poly::solve(&[0.0, 0.0]).is_empty());
}

#[test]
fn iteration_limit_is_reported() {
    let settings = PolySettings {
        max_iter: 2,
        ..PolySettings::default()
    };
    let coeffs = [-5040.0, 13068.0, -13132.0, 6769.0, -1960.0, 322.0, -28.0, 1.0];
    let result = poly::solve_with(&coeffs, &settings);
    assert!(!result.converged);
    assert_eq!(result.iterations, 2);
    assert_eq!(result.roots.len(), 7);
    assert!(result.into_converged().is_err());
}

#[test]
fn roots_into_fixed_buffer() {
    let mut buf = [Complex::new(0.0_f32, 0.0); 4];
    let outcome = poly::roots_into(&[-2.0_f32, 0.0, 1.0], &mut buf, &PolySettings::default());
    assert_eq!(outcome.count, 2);
    assert!(outcome.converged);
    poly::sort_roots(&mut buf[..2]);
    assert_abs_diff_eq!(buf[0].re, -2.0_f32.sqrt(), epsilon = 1e-6);
    assert_abs_diff_eq!(buf[1].re, 2.0_f32.sqrt(), epsilon = 1e-6);
}
