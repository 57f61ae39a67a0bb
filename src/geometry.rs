//! Small computational-geometry helpers on [`Vector2`] / [`Vector3`].
//!
//! - [`tri_area`], [`vector_plane_projection`], [`ray_tri_intersection`],
//!   [`ray_plane_intersection`], [`dist_to_tri_edge`]
//! - [`winding_number`]: point-in-polygon test for a closed 2D boundary
//! - [`zero_to_twopi`]: angle wrapping
//! - [`spherical_projection`]: map projections between `[lat, long]` and
//!   planar `[x, y]`
//! - [`graham_scan`] (requires `alloc`): 2D convex hull

use crate::traits::FloatScalar;
use crate::vector::{Vector2, Vector3};

#[cfg(feature = "alloc")]
use crate::vvec::VVec;

/// Area of the triangle `a, b, c`.
///
/// ```
/// use vecmat::{geometry, Vector3};
/// let a = Vector3::from_array([0.0, 0.0, 0.0]);
/// let b = Vector3::from_array([1.0, 0.0, 0.0]);
/// let c = Vector3::from_array([1.0, 1.0, 0.0]);
/// assert_eq!(geometry::tri_area(&a, &b, &c), 0.5);
/// ```
pub fn tri_area<T: FloatScalar>(a: &Vector3<T>, b: &Vector3<T>, c: &Vector3<T>) -> T {
    (*b - *a).cross(&(*c - *a)).length() * T::lit(0.5)
}

/// Project `v` onto the plane through the origin with normal `normal`
/// (which need not be unit length).
pub fn vector_plane_projection<T: FloatScalar>(normal: &Vector3<T>, v: &Vector3<T>) -> Vector3<T> {
    let nn = normal.length_sq();
    if nn == T::zero() {
        return *v;
    }
    *v - *normal * (normal.dot(v) / nn)
}

/// Intersection of the ray `origin + t·dir` (`t > 0`) with triangle
/// `t0, t1, t2`, by the Möller–Trumbore algorithm.
///
/// Returns `None` for a miss, a ray parallel to the triangle's plane, or a
/// hit behind the origin.
pub fn ray_tri_intersection<T: FloatScalar>(
    t0: &Vector3<T>,
    t1: &Vector3<T>,
    t2: &Vector3<T>,
    origin: &Vector3<T>,
    dir: &Vector3<T>,
) -> Option<Vector3<T>> {
    let eps = T::epsilon() * T::lit(64.0);
    let edge1 = *t1 - *t0;
    let edge2 = *t2 - *t0;
    let h = dir.cross(&edge2);
    let a = edge1.dot(&h);
    if a.abs() < eps {
        return None;
    }

    let f = T::one() / a;
    let s = *origin - *t0;
    let u = f * s.dot(&h);
    if u < T::zero() || u > T::one() {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * dir.dot(&q);
    if v < T::zero() || u + v > T::one() {
        return None;
    }

    let t = f * edge2.dot(&q);
    if t > eps {
        Some(*origin + *dir * t)
    } else {
        None
    }
}

/// Distance `t` along the ray `l0 + t·l` to the plane through `p0` with
/// normal `n`, in units of `|l|`.
///
/// `t` is negative when the plane lies behind `l0`. Returns `None` when the
/// ray runs parallel to the plane.
///
/// ```
/// use vecmat::{geometry, Vector3};
/// let p0 = Vector3::from_array([1.0, 0.0, 0.0]);
/// let l0 = Vector3::from_array([0.0, 1.0, 0.0]);
/// let l = Vector3::from_array([1.0_f64, 1.0, 0.0]).normalized();
/// let t = geometry::ray_plane_intersection(&p0, &Vector3::ux(), &l0, &l).unwrap();
/// assert!((t - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn ray_plane_intersection<T: FloatScalar>(
    p0: &Vector3<T>,
    n: &Vector3<T>,
    l0: &Vector3<T>,
    l: &Vector3<T>,
) -> Option<T> {
    let denom = n.dot(l);
    if denom.abs() <= T::epsilon() * n.length() * l.length() {
        return None;
    }
    Some((*p0 - *l0).dot(n) / denom)
}

/// Distance from `p` to the segment `a`–`b`.
fn dist_to_segment<T: FloatScalar>(a: &Vector3<T>, b: &Vector3<T>, p: &Vector3<T>) -> T {
    let ab = *b - *a;
    let len_sq = ab.length_sq();
    let t = if len_sq == T::zero() {
        T::zero()
    } else {
        ((*p - *a).dot(&ab) / len_sq).max(T::zero()).min(T::one())
    };
    (*a + ab * t - *p).length()
}

/// Shortest distance from `p` to any edge of the triangle `t0, t1, t2`.
pub fn dist_to_tri_edge<T: FloatScalar>(
    t0: &Vector3<T>,
    t1: &Vector3<T>,
    t2: &Vector3<T>,
    p: &Vector3<T>,
) -> T {
    dist_to_segment(t0, t1, p)
        .min(dist_to_segment(t1, t2, p))
        .min(dist_to_segment(t2, t0, p))
}

/// Winding number of the closed boundary around `p`.
///
/// The last point joins back to the first. Counter-clockwise loops count
/// `+1`, clockwise ones `-1`; zero means `p` lies outside. Only edges that
/// straddle the horizontal through `p` are examined, with upward edges
/// counted when `p` is to their left and downward edges when it is to their
/// right.
///
/// ```
/// use vecmat::{geometry, Vector2};
/// let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]].map(Vector2::from_array);
/// assert_eq!(geometry::winding_number(&square, &Vector2::from_array([0.5, 0.5])), 1);
/// assert_eq!(geometry::winding_number(&square, &Vector2::from_array([1.5, 0.5])), 0);
/// ```
pub fn winding_number<T: FloatScalar>(boundary: &[Vector2<T>], p: &Vector2<T>) -> i32 {
    let n = boundary.len();
    let mut wn = 0;
    for (i, a) in boundary.iter().enumerate() {
        let b = &boundary[(i + 1) % n];
        if a[1] <= p[1] {
            if b[1] > p[1] && turn(a, b, p) > T::zero() {
                wn += 1;
            }
        } else if b[1] <= p[1] && turn(a, b, p) < T::zero() {
            wn -= 1;
        }
    }
    wn
}

/// `angle` wrapped into `[0, 2π)`.
///
/// ```
/// use vecmat::geometry::zero_to_twopi;
/// assert!((zero_to_twopi(10.0_f64) - 3.716814693).abs() < 1e-9);
/// assert!((zero_to_twopi(-1.0_f64) - (core::f64::consts::TAU - 1.0)).abs() < 1e-15);
/// ```
pub fn zero_to_twopi<T: FloatScalar>(angle: T) -> T {
    let two_pi = T::lit(core::f64::consts::TAU);
    let mut r = angle % two_pi;
    if r < T::zero() {
        r = r + two_pi;
    }
    // a tiny negative remainder rounds up to exactly 2π
    if r >= two_pi {
        T::zero()
    } else {
        r
    }
}

/// Map projections of a sphere of radius `r`.
///
/// Geographic coordinates are `[latitude φ, longitude λ]` in radians; `lambda0`
/// is the central meridian. Planar coordinates are `[x, y]`.
pub mod spherical_projection {
    use crate::traits::FloatScalar;
    use crate::vector::{Vector2, Vector3};

    /// `x = r(λ - λ0)`, `y = r·ln(tan(π/4 + φ/2))`.
    pub fn mercator<T: FloatScalar>(latlong: &Vector2<T>, r: T, lambda0: T) -> Vector2<T> {
        let quarter_pi = T::lit(core::f64::consts::FRAC_PI_4);
        Vector2::from_array([
            r * (latlong[1] - lambda0),
            r * (quarter_pi + latlong[0] * T::lit(0.5)).tan().ln(),
        ])
    }

    pub fn inverse_mercator<T: FloatScalar>(xy: &Vector2<T>, r: T, lambda0: T) -> Vector2<T> {
        let half_pi = T::lit(core::f64::consts::FRAC_PI_2);
        Vector2::from_array([
            T::lit(2.0) * (xy[1] / r).exp().atan() - half_pi,
            xy[0] / r + lambda0,
        ])
    }

    /// Plate carrée: `x = r(λ - λ0)`, `y = r·φ`.
    pub fn equirectangular<T: FloatScalar>(latlong: &Vector2<T>, r: T, lambda0: T) -> Vector2<T> {
        Vector2::from_array([r * (latlong[1] - lambda0), r * latlong[0]])
    }

    pub fn inverse_equirectangular<T: FloatScalar>(xy: &Vector2<T>, r: T, lambda0: T) -> Vector2<T> {
        Vector2::from_array([xy[1] / r, xy[0] / r + lambda0])
    }

    /// Transverse equirectangular:
    /// `x = r·asin(cos φ · sin(λ - λ0))`, `y = r·atan2(tan φ, cos(λ - λ0))`.
    pub fn cassini<T: FloatScalar>(latlong: &Vector2<T>, r: T, lambda0: T) -> Vector2<T> {
        let (phi, dl) = (latlong[0], latlong[1] - lambda0);
        Vector2::from_array([
            r * (phi.cos() * dl.sin()).asin(),
            r * phi.tan().atan2(dl.cos()),
        ])
    }

    pub fn inverse_cassini<T: FloatScalar>(xy: &Vector2<T>, r: T, lambda0: T) -> Vector2<T> {
        let (x, y) = (xy[0] / r, xy[1] / r);
        Vector2::from_array([(y.sin() * x.cos()).asin(), lambda0 + x.tan().atan2(y.cos())])
    }

    /// `[asin(z/r), atan2(y, x)]` for a point on the sphere.
    pub fn xyz_to_latlong<T: FloatScalar>(xyz: &Vector3<T>, r: T) -> Vector2<T> {
        Vector2::from_array([(xyz[2] / r).asin(), xyz[1].atan2(xyz[0])])
    }
}

/// z-component of `(b - a) × (c - a)`: positive for a left turn.
fn turn<T: FloatScalar>(a: &Vector2<T>, b: &Vector2<T>, c: &Vector2<T>) -> T {
    (*b - *a).cross(&(*c - *a))
}

/// Convex hull of a 2D point set, by Andrew's monotone-chain form of the
/// Graham scan.
///
/// The hull starts at the lowest point (leftmost among ties) and runs
/// counter-clockwise. Points on a hull edge are not included, and
/// non-finite points are skipped.
///
/// ```
/// use vecmat::{geometry, Vector2};
/// let pts = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.5, 0.5], [0.75, 0.75]]
///     .map(Vector2::from_array);
/// let hull = geometry::graham_scan(&pts);
/// assert_eq!(hull.as_slice(), &[pts[0], pts[2], pts[1]]);
/// ```
#[cfg(feature = "alloc")]
pub fn graham_scan<T: FloatScalar>(points: &[Vector2<T>]) -> VVec<Vector2<T>> {
    use alloc::vec::Vec;

    let mut pts: Vec<Vector2<T>> = points
        .iter()
        .copied()
        .filter(|p| p[0].is_finite() && p[1].is_finite())
        .collect();
    pts.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    pts.dedup();
    if pts.len() < 3 {
        return VVec::from_vec(pts);
    }

    // pops every non-left turn, so collinear points drop out
    let chain = |hull: &mut Vec<Vector2<T>>, p: Vector2<T>| {
        while hull.len() >= 2
            && turn(&hull[hull.len() - 2], &hull[hull.len() - 1], &p) <= T::zero()
        {
            hull.pop();
        }
        hull.push(p);
    };

    let mut lower = Vec::with_capacity(pts.len());
    for &p in pts.iter() {
        chain(&mut lower, p);
    }
    let mut upper = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        chain(&mut upper, p);
    }
    lower.pop();
    upper.pop();
    lower.append(&mut upper);

    let start = lower
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a[1].total_cmp(&b[1]).then(a[0].total_cmp(&b[0])))
        .map_or(0, |(i, _)| i);
    lower.rotate_left(start);
    VVec::from_vec(lower)
}

#[cfg(test)]
mod tests {
    use super::spherical_projection::*;
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::from_array([x, y, z])
    }

    fn v2(x: f64, y: f64) -> Vector2<f64> {
        Vector2::from_array([x, y])
    }

    #[test]
    fn degenerate_triangles_have_zero_area() {
        let a = Vector3::from_array([0.0_f32, 0.0, 1.0]);
        let b = Vector3::from_array([0.0_f32, 1.0, 1.0]);
        assert_eq!(tri_area(&a, &b, &b), 0.0);
        let z = Vector3::<f32>::zeros();
        assert_eq!(tri_area(&z, &z, &z), 0.0);
    }

    #[test]
    fn plane_projection() {
        let n = v3(0.0, 0.0, 1.0);
        assert_eq!(vector_plane_projection(&n, &v3(0.0, 1.0, 1.0)), Vector3::uy());
        assert_eq!(vector_plane_projection(&n, &v3(0.0, 1.0, 20.0)), Vector3::uy());
        assert_eq!(vector_plane_projection(&n, &v3(1.0, 0.0, 20.0)), Vector3::ux());

        let n = v3(0.3, 0.2, -0.5);
        let p = vector_plane_projection(&n, &v3(1.0, 0.0, 20.0));
        assert!(p.dot(&n).abs() < 1e-12);
    }

    #[test]
    fn ray_hits_and_misses() {
        let (t0, t1, t2) = (v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0), v3(0.0, 1.0, 0.0));
        let down = v3(0.0, 0.0, -1.0);

        let hit = ray_tri_intersection(&t0, &t1, &t2, &v3(0.25, 0.25, 1.0), &down);
        assert_eq!(hit, Some(v3(0.25, 0.25, 0.0)));

        // outside the triangle
        assert!(ray_tri_intersection(&t0, &t1, &t2, &v3(0.75, 0.75, 1.0), &down).is_none());
        // behind the origin
        assert!(ray_tri_intersection(&t0, &t1, &t2, &v3(0.25, 0.25, -1.0), &down).is_none());
        // parallel
        let along = v3(1.0, 0.0, 0.0);
        assert!(ray_tri_intersection(&t0, &t1, &t2, &v3(0.0, 0.25, 1.0), &along).is_none());
    }

    #[test]
    fn ray_meets_plane() {
        let (p0, n) = (v3(1.0, 0.0, 0.0), v3(1.0, 0.0, 0.0));
        let l0 = v3(0.0, 1.0, 0.0);
        let l = v3(1.0, 1.0, 0.0).normalized();
        let t = ray_plane_intersection(&p0, &n, &l0, &l).unwrap();
        assert!((t - 2.0_f64.sqrt()).abs() < 1e-12);
        let hit = l0 + l * t;
        assert!((hit - v3(1.0, 2.0, 0.0)).length() < 1e-12);

        // behind the origin
        let t = ray_plane_intersection(&p0, &n, &v3(3.0, 0.0, 0.0), &Vector3::ux()).unwrap();
        assert_eq!(t, -2.0);
        // parallel
        assert!(ray_plane_intersection(&p0, &n, &l0, &Vector3::uy()).is_none());
    }

    #[test]
    fn ray_against_both_triangle_windings() {
        let (t0, t1, t2) = (v3(1.0, 0.0, 0.0), v3(1.0, 1.0, 0.0), v3(1.0, 0.0, 1.0));
        let cases = [
            (v3(0.0, 1.0, 0.0), v3(1.0, 1.0, 0.0), false),
            (v3(0.0, 0.5, 0.1), v3(1.0, 0.0, 0.0), true),
            (v3(2.0, 0.5, 0.1), v3(1.0, 0.0, 0.0), false),
            (v3(0.0, -0.7, 0.1), v3(1.0, 1.0, 0.0), true),
        ];
        for (l0, l, inside) in cases {
            assert_eq!(ray_tri_intersection(&t0, &t1, &t2, &l0, &l).is_some(), inside);
            assert_eq!(ray_tri_intersection(&t0, &t2, &t1, &l0, &l).is_some(), inside);
        }
    }

    #[test]
    fn distance_to_triangle_edges() {
        let (t0, t1, t2) = (v3(0.0, 0.0, 0.0), v3(0.0, 0.0, 1.0), v3(0.0, 1.0, 0.0));
        let cases = [
            (v3(0.0, 0.5, 0.1), 0.1),
            (v3(0.0, 0.7, 0.1), 0.1),
            (v3(0.0, 0.9, 0.1), 0.0),
            (v3(0.0, 0.9, 0.01), 0.01),
            // beyond a vertex
            (v3(0.0, 2.0, 0.0), 1.0),
            (v3(3.0, 0.0, 0.0), 3.0),
        ];
        for (p, want) in cases {
            assert!((dist_to_tri_edge(&t0, &t1, &t2, &p) - want).abs() < 1e-12, "{:?}", p);
        }
        // degenerate edge collapses to a point
        assert_eq!(dist_to_tri_edge(&t0, &t0, &t0, &v3(0.0, 3.0, 4.0)), 5.0);
    }

    #[test]
    fn winding_sign_and_zero() {
        let ccw = [v2(0.0, 0.0), v2(2.0, 0.0), v2(2.0, 2.0), v2(0.0, 2.0)];
        let mut cw = ccw;
        cw.reverse();
        let inside = v2(1.0, 1.0);
        assert_eq!(winding_number(&ccw, &inside), 1);
        assert_eq!(winding_number(&cw, &inside), -1);
        assert_eq!(winding_number(&ccw, &v2(3.0, 1.0)), 0);
        assert_eq!(winding_number(&ccw, &v2(1.0, -1.0)), 0);
        assert_eq!(winding_number::<f64>(&[], &inside), 0);

        // a loop traced twice winds twice
        let twice: alloc::vec::Vec<_> = ccw.iter().chain(ccw.iter()).copied().collect();
        assert_eq!(winding_number(&twice, &inside), 2);
    }

    #[test]
    fn angles_wrap_into_one_turn() {
        let once = 10.0_f32 - core::f32::consts::TAU;
        assert!((zero_to_twopi(10.0_f32) - once).abs() <= 2.0 * f32::EPSILON);
        let many = 10.0 + 2.0 * PI * 100.0;
        assert!((zero_to_twopi(many) - (10.0 - 2.0 * PI)).abs() < 1e-12);
        assert_eq!(zero_to_twopi(0.0_f64), 0.0);
        assert!((zero_to_twopi(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-15);
        assert_eq!(zero_to_twopi(-1e-300_f64), 0.0);
        let r = zero_to_twopi(2.0 * PI);
        assert!((0.0..2.0 * PI).contains(&r));
    }

    #[test]
    fn projections_invert() {
        let r = 1.0;
        for l0 in [0.0, FRAC_PI_4] {
            for ll in [v2(0.0, 0.0), v2(0.0, FRAC_PI_2), v2(0.6, -0.3)] {
                let back = inverse_mercator(&mercator(&ll, r, l0), r, l0);
                assert!((back - ll).abs().max() < 1e-12);
                let back = inverse_equirectangular(&equirectangular(&ll, r, l0), r, l0);
                assert!((back - ll).abs().max() < 1e-12);
                let back = inverse_cassini(&cassini(&ll, r, l0), r, l0);
                assert!((back - ll).abs().max() < 1e-12);
            }
        }
    }

    #[test]
    fn mercator_equator_is_straight() {
        let xy = mercator(&v2(0.0, 1.0), 2.0, 0.5);
        assert!((xy[0] - 1.0).abs() < 1e-15);
        assert!(xy[1].abs() < 1e-15);
    }

    #[test]
    fn latlong_of_axes() {
        assert_eq!(xyz_to_latlong(&v3(1.0, 0.0, 0.0), 1.0)[1], 0.0);
        assert_eq!(xyz_to_latlong(&v3(0.0, 1.0, 0.0), 1.0)[1], FRAC_PI_2);
        assert_eq!(xyz_to_latlong(&v3(-1.0, 0.0, 0.0), 1.0)[1], PI);
        assert_eq!(xyz_to_latlong(&v3(0.0, -1.0, 0.0), 1.0)[1], -FRAC_PI_2);
        assert_eq!(xyz_to_latlong(&v3(0.0, 0.0, 1.0), 1.0)[0], FRAC_PI_2);
        assert_eq!(xyz_to_latlong(&v3(0.0, 0.0, -2.0), 2.0)[0], -FRAC_PI_2);
    }

    #[test]
    fn hull_of_square_with_interior_points() {
        let expected = [v2(0.0, 0.0), v2(1.0, 0.0), v2(1.0, 1.0), v2(0.0, 1.0)];
        let mut pts = [
            v2(0.0, 0.0),
            v2(0.0, 1.0),
            v2(1.0, 0.0),
            v2(1.0, 1.0),
            v2(0.2, 0.3),
            v2(0.1, 0.9),
        ];
        assert_eq!(graham_scan(&pts).as_slice(), &expected);

        pts[4] = v2(0.5, 0.5);
        pts[5] = v2(0.75, 0.75);
        assert_eq!(graham_scan(&pts).as_slice(), &expected);
    }

    #[test]
    fn hull_drops_collinear_and_handles_small_input() {
        let pts = [v2(0.0, 0.0), v2(0.0, 1.0), v2(1.0, 1.0), v2(0.5, 0.5), v2(0.75, 0.75)];
        assert_eq!(
            graham_scan(&pts).as_slice(),
            &[v2(0.0, 0.0), v2(1.0, 1.0), v2(0.0, 1.0)]
        );
        assert!(graham_scan::<f64>(&[]).is_empty());
        assert_eq!(graham_scan(&[v2(2.0, 3.0)]).len(), 1);
    }

    #[test]
    fn hull_of_near_collinear_cloud() {
        // points within rounding of the line y = x/3 plus two off-line corners
        let mut pts: alloc::vec::Vec<_> = (0..200)
            .map(|i| {
                let x = i as f64 * 0.1;
                v2(x, x / 3.0 + if i % 2 == 0 { 1e-16 } else { -1e-16 })
            })
            .collect();
        pts.push(v2(10.0, -5.0));
        pts.push(v2(5.0, 20.0));
        pts.push(v2(f64::NAN, 1.0));
        let hull = graham_scan(&pts);
        assert_eq!(hull[0], v2(10.0, -5.0));
        assert!(hull.iter().any(|p| *p == v2(5.0, 20.0)));
        assert!(hull.iter().any(|p| *p == pts[0]));
        let n = hull.len();
        for i in 0..n {
            let t = turn(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]);
            assert!(t > 0.0, "not convex at {}: {:?}", i, hull);
        }
        for p in &pts[..202] {
            for i in 0..n {
                assert!(turn(&hull[i], &hull[(i + 1) % n], p) >= -1e-12);
            }
        }
    }

    #[test]
    fn hull_of_duplicates_and_a_segment() {
        let pts = [v2(1.0, 1.0), v2(1.0, 1.0), v2(3.0, 3.0), v2(2.0, 2.0)];
        assert_eq!(graham_scan(&pts).as_slice(), &[v2(1.0, 1.0), v2(3.0, 3.0)]);
    }
}
