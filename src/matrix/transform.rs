//! Affine and projective transform builders on 2×2, 3×3 and 4×4 matrices.
//!
//! Composition is right-multiplication, with `x` a column vector on the
//! right: `rotate`, `translate` and `scale` apply in the current (local)
//! frame, while the `pre*` variants apply in the world frame after
//! everything already accumulated.
//!
//! ```
//! use vecmat::{Matrix4, Vector3, Quaternion};
//! use core::f64::consts::FRAC_PI_2;
//!
//! let q = Quaternion::from_axis_angle(Vector3::uz(), FRAC_PI_2);
//! let mut m = Matrix4::<f64>::identity();
//! m.rotate_quat(&q);
//! m.pretranslate(Vector3::ux());
//! let p = (m * Vector3::ux()).less_one_dim();
//! assert!((p - Vector3::from_array([1.0, 1.0, 0.0])).length() < 1e-12);
//! ```

use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::{Vector2, Vector3};
use crate::Matrix;

// ── 2×2 ─────────────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T, 2, 2> {
    /// Counter-clockwise rotation by `angle` radians.
    pub fn from_angle(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix::new([[c, -s], [s, c]])
    }

    /// Post-multiply by a counter-clockwise rotation of `angle` radians.
    ///
    /// ```
    /// use vecmat::{Matrix2, Vector2};
    /// use core::f64::consts::FRAC_PI_2;
    /// let mut m = Matrix2::<f64>::identity();
    /// m.rotate(FRAC_PI_2);
    /// let v = m * Vector2::ux();
    /// assert!(v[0].abs() < 1e-15 && (v[1] - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotate(&mut self, angle: T) {
        *self = *self * Self::from_angle(angle);
    }
}

// ── 3×3 ─────────────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T, 3, 3> {
    /// Matrix whose columns are `bx`, `by`, `bz`.
    pub fn from_basis(bx: Vector3<T>, by: Vector3<T>, bz: Vector3<T>) -> Self {
        Self::from_cols([bx.into_array(), by.into_array(), bz.into_array()])
    }

    /// `M = M · R(axis, angle)`. The axis is normalized first.
    pub fn rotate(&mut self, axis: Vector3<T>, angle: T) {
        self.rotate_quat(&Quaternion::from_axis_angle(axis.normalized(), angle));
    }

    /// `M = M · R(q)`.
    pub fn rotate_quat(&mut self, q: &Quaternion<T>) {
        *self = *self * q.rotation_matrix3();
    }

    /// `M = R(q) · M`.
    pub fn prerotate_quat(&mut self, q: &Quaternion<T>) {
        *self = q.rotation_matrix3() * *self;
    }

    /// `M = M · diag(v)`.
    pub fn scale(&mut self, v: Vector3<T>) {
        for (col, &s) in self.data.iter_mut().zip(v.iter()) {
            for x in col.iter_mut() {
                *x = *x * s;
            }
        }
    }

    pub fn scale_uniform(&mut self, s: T) {
        self.scale(Vector3::filled(s));
    }

    /// Quaternion of this rotation matrix.
    pub fn rotation(&self) -> Quaternion<T> {
        Quaternion::from_rotation_matrix(self)
    }
}

// ── 4×4 ─────────────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T, 4, 4> {
    /// Homogeneous transform whose linear block maps the unit axes to
    /// `bx`, `by`, `bz`.
    pub fn from_basis(bx: Vector3<T>, by: Vector3<T>, bz: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.set_linear(&Matrix::<T, 3, 3>::from_basis(bx, by, bz));
        m
    }

    /// Reflection through the plane containing `point` with unit `normal`:
    /// `x' = x - 2n(n·(x - p))`.
    ///
    /// ```
    /// use vecmat::{Matrix4, Vector3};
    /// let m = Matrix4::reflection(Vector3::from_array([0.25_f64, 0.0, 0.0]), Vector3::ux());
    /// let p = (m * Vector3::from_array([0.5, 0.0, 0.5])).less_one_dim();
    /// assert!(p.length() - 0.5 < 1e-12);
    /// assert!(p[0].abs() < 1e-12);
    /// ```
    pub fn reflection(point: Vector3<T>, normal: Vector3<T>) -> Self {
        let two = T::lit(2.0);
        let mut m = Self::identity();
        m.set_linear(&(Matrix::<T, 3, 3>::identity() - normal.outer(&normal) * two));
        let offset = normal * (two * normal.dot(&point));
        for r in 0..3 {
            m[(r, 3)] = offset[r];
        }
        m
    }

    /// Upper-left 3×3 block.
    pub fn linear(&self) -> Matrix<T, 3, 3> {
        Matrix::from_fn(|r, c| self[(r, c)])
    }

    fn set_linear(&mut self, block: &Matrix<T, 3, 3>) {
        for c in 0..3 {
            for r in 0..3 {
                self[(r, c)] = block[(r, c)];
            }
        }
    }

    /// Translation part: first three entries of the last column.
    pub fn translation(&self) -> Vector3<T> {
        Vector3::from_fn(|r| self[(r, 3)])
    }

    /// Quaternion of the linear block (Shepperd's method).
    pub fn rotation(&self) -> Quaternion<T> {
        Quaternion::from_rotation_matrix(&self.linear())
    }

    /// `M = M · R(axis, angle)`. The axis is normalized first.
    pub fn rotate(&mut self, axis: Vector3<T>, angle: T) {
        self.rotate_quat(&Quaternion::from_axis_angle(axis.normalized(), angle));
    }

    /// `M = M · R(q)`.
    pub fn rotate_quat(&mut self, q: &Quaternion<T>) {
        *self = *self * q.rotation_matrix();
    }

    /// `M = R(axis, angle) · M`.
    pub fn prerotate(&mut self, axis: Vector3<T>, angle: T) {
        self.prerotate_quat(&Quaternion::from_axis_angle(axis.normalized(), angle));
    }

    /// `M = R(q) · M`.
    pub fn prerotate_quat(&mut self, q: &Quaternion<T>) {
        *self = q.rotation_matrix() * *self;
    }

    /// `M = M · T(v)`: translate along the current frame's axes.
    pub fn translate(&mut self, v: Vector3<T>) {
        for r in 0..4 {
            let shift = (0..3).fold(T::zero(), |acc, k| acc + self[(r, k)] * v[k]);
            self[(r, 3)] = self[(r, 3)] + shift;
        }
    }

    /// `M = T(v) · M`: translate in world coordinates.
    pub fn pretranslate(&mut self, v: Vector3<T>) {
        for c in 0..4 {
            let w = self[(3, c)];
            for r in 0..3 {
                self[(r, c)] = self[(r, c)] + v[r] * w;
            }
        }
    }

    /// `M = M · diag(v, 1)`.
    pub fn scale(&mut self, v: Vector3<T>) {
        for (col, &s) in self.data.iter_mut().zip(v.iter()) {
            for x in col.iter_mut() {
                *x = *x * s;
            }
        }
    }

    pub fn scale_uniform(&mut self, s: T) {
        self.scale(Vector3::filled(s));
    }

    /// Post-multiply by an OpenGL-style perspective frustum.
    ///
    /// `fov_deg` is the full vertical field of view in degrees. Does nothing
    /// when `near == far`.
    pub fn perspective(&mut self, fov_deg: T, aspect: T, near: T, far: T) {
        if near == far {
            return;
        }
        let f = T::one() / (fov_deg * T::lit(core::f64::consts::PI / 360.0)).tan();
        let mut p = Self::zeros();
        p[(0, 0)] = f / aspect;
        p[(1, 1)] = f;
        p[(2, 2)] = (near + far) / (near - far);
        p[(3, 2)] = -T::one();
        p[(2, 3)] = T::lit(2.0) * near * far / (near - far);
        *self = *self * p;
    }

    /// Post-multiply by an OpenGL-style orthographic projection of the box
    /// spanned by `lb` (left, bottom) and `rt` (right, top). Does nothing
    /// when `near == far`.
    pub fn orthographic(&mut self, lb: Vector2<T>, rt: Vector2<T>, near: T, far: T) {
        if near == far {
            return;
        }
        let two = T::lit(2.0);
        let (w, h, d) = (rt[0] - lb[0], rt[1] - lb[1], far - near);
        let mut o = Self::identity();
        o[(0, 0)] = two / w;
        o[(1, 1)] = two / h;
        o[(2, 2)] = -two / d;
        o[(0, 3)] = -(rt[0] + lb[0]) / w;
        o[(1, 3)] = -(rt[1] + lb[1]) / h;
        o[(2, 3)] = -(far + near) / d;
        *self = *self * o;
    }
}
