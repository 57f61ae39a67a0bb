use approx::assert_abs_diff_eq;
use core::f64::consts::{FRAC_PI_2, PI};
use vecmat::geometry::{self, spherical_projection};
use vecmat::{Vector2, Vector3};

fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::from_array([x, y, z])
}

fn v2(x: f64, y: f64) -> Vector2<f64> {
    Vector2::from_array([x, y])
}

#[test]
fn right_triangle_area() {
    let a = geometry::tri_area(&v3(0.0, 0.0, 0.0), &v3(1.0, 0.0, 0.0), &v3(1.0, 1.0, 0.0));
    assert_eq!(a, 0.5);
}

#[test]
fn projection_onto_xy_plane() {
    let p = geometry::vector_plane_projection(&Vector3::uz(), &v3(0.0, 1.0, 20.0));
    assert_eq!(p, Vector3::uy());
}

#[test]
fn ray_hits_triangle_from_above() {
    let (t0, t1, t2) = (v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0), v3(0.0, 1.0, 0.0));
    let hit = geometry::ray_tri_intersection(&t0, &t1, &t2, &v3(0.25, 0.25, 1.0), &(-Vector3::uz()))
        .unwrap();
    assert_abs_diff_eq!(hit[0], 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(hit[1], 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(hit[2], 0.0, epsilon = 1e-12);

    let miss = geometry::ray_tri_intersection(&t0, &t1, &t2, &v3(0.9, 0.9, 1.0), &(-Vector3::uz()));
    assert!(miss.is_none());
}

#[test]
fn hull_of_unit_square_with_interior_points() {
    let pts = [
        v2(0.5, 0.5),
        v2(0.0, 1.0),
        v2(1.0, 0.0),
        v2(0.2, 0.7),
        v2(1.0, 1.0),
        v2(0.0, 0.0),
        v2(0.9, 0.1),
    ];
    let hull = geometry::graham_scan(&pts);
    assert_eq!(
        hull.as_slice(),
        &[v2(0.0, 0.0), v2(1.0, 0.0), v2(1.0, 1.0), v2(0.0, 1.0)]
    );
}

#[test]
fn latlong_on_the_equator() {
    let cases = [
        (v3(1.0, 0.0, 0.0), 0.0),
        (v3(0.0, 1.0, 0.0), FRAC_PI_2),
        (v3(-1.0, 0.0, 0.0), PI),
        (v3(0.0, -1.0, 0.0), -FRAC_PI_2),
    ];
    for (xyz, long) in cases {
        let ll = spherical_projection::xyz_to_latlong(&xyz, 1.0);
        assert_eq!(ll[0], 0.0);
        assert_eq!(ll[1], long);
    }
}

#[test]
fn projections_round_trip() {
    let ll = v2(0.4, -1.3);
    let r = 6371.0;
    let lambda0 = 0.2;

    let back = spherical_projection::inverse_mercator(
        &spherical_projection::mercator(&ll, r, lambda0),
        r,
        lambda0,
    );
    assert_abs_diff_eq!(back[0], ll[0], epsilon = 1e-12);
    assert_abs_diff_eq!(back[1], ll[1], epsilon = 1e-12);

    let back = spherical_projection::inverse_equirectangular(
        &spherical_projection::equirectangular(&ll, r, lambda0),
        r,
        lambda0,
    );
    assert_abs_diff_eq!(back[0], ll[0], epsilon = 1e-12);
    assert_abs_diff_eq!(back[1], ll[1], epsilon = 1e-12);

    let back = spherical_projection::inverse_cassini(
        &spherical_projection::cassini(&ll, r, lambda0),
        r,
        lambda0,
    );
    assert_abs_diff_eq!(back[0], ll[0], epsilon = 1e-12);
    assert_abs_diff_eq!(back[1], ll[1], epsilon = 1e-12);
}

// ── winding number ──────────────────────────────────────────────────

fn ring(pts: &[[f32; 2]]) -> Vec<Vector2<f32>> {
    pts.iter().copied().map(Vector2::from_array).collect()
}

#[test]
fn winding_around_a_dodecagon() {
    let bnd = ring(&[
        [1.59597492, 0.242018759],
        [1.3965255, 0.986374199],
        [0.851619482, 1.53128028],
        [0.10726402, 1.73072958],
        [-0.637091398, 1.53128028],
        [-1.18199754, 0.986373961],
        [-1.38144684, 0.242018625],
        [-1.18199718, -0.502336919],
        [-0.637091219, -1.04724264],
        [0.107264102, -1.24669218],
        [0.851620078, -1.0472424],
        [1.39652574, -0.502336323],
    ]);
    let at = |r: f32, deg: i32| {
        let a = (deg as f32).to_radians();
        Vector2::from_array([r * a.cos(), r * a.sin()])
    };
    assert_eq!(geometry::winding_number(&bnd, &Vector2::from_array([11.0, 0.0])), 0);
    assert_eq!(geometry::winding_number(&bnd, &Vector2::zeros()), 1);
    for deg in 0..360 {
        assert_eq!(geometry::winding_number(&bnd, &at(11.0, deg)), 0, "outside at {}°", deg);
        assert_eq!(geometry::winding_number(&bnd, &at(0.2, deg)), 1, "inside at {}°", deg);
    }
}

#[test]
fn winding_just_outside_an_edge() {
    let bnd = ring(&[
        [-1.151757, -0.865333],
        [-0.580842, -1.169353],
        [0.155741, -1.100337],
        [0.860626, -0.676779],
        [1.344939, -0.012170],
        [1.478909, 0.715408],
        [1.226639, 1.311001],
        [0.655724, 1.615021],
        [-0.080859, 1.546006],
        [-0.785743, 1.122448],
        [-1.270057, 0.457838],
        [-1.404027, -0.269740],
    ]);
    let px = Vector2::from_array([-0.27075, 1.4834]);
    assert_eq!(geometry::winding_number(&bnd, &px), 0);
    assert_eq!(geometry::winding_number(&bnd, &Vector2::from_array([0.1, 0.2])), 1);
}

// ── ray/plane, edge distance, angle wrap ────────────────────────────

#[test]
fn ray_plane_hit_point() {
    let l0 = v3(0.0, 1.0, 0.0);
    let l = v3(1.0, 1.0, 0.0).normalized();
    let t = geometry::ray_plane_intersection(&v3(1.0, 0.0, 0.0), &Vector3::ux(), &l0, &l).unwrap();
    let hit = l0 + l * t;
    assert_abs_diff_eq!(hit[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit[1], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hit[2], 0.0, epsilon = 1e-12);
}

#[test]
fn point_to_triangle_edge() {
    let (t0, t1, t2) = (v3(0.0, 0.0, 0.0), v3(0.0, 0.0, 1.0), v3(0.0, 1.0, 0.0));
    let d = geometry::dist_to_tri_edge(&t0, &t1, &t2, &v3(0.0, 0.5, 0.1));
    assert_abs_diff_eq!(d, 0.1, epsilon = 1e-12);
    let d = geometry::dist_to_tri_edge(&t0, &t1, &t2, &v3(0.0, 0.9, 0.01));
    assert_abs_diff_eq!(d, 0.01, epsilon = 1e-12);
}

#[test]
fn wrap_angle() {
    assert_abs_diff_eq!(geometry::zero_to_twopi(10.0_f64), 10.0 - 2.0 * PI, epsilon = 1e-15);
    assert_abs_diff_eq!(geometry::zero_to_twopi(-PI), PI, epsilon = 1e-15);
}
