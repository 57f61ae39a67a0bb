use core::ops::{Div, Mul, Neg};

use crate::traits::FloatScalar;
use crate::vector::{Vector3, Vector4};
use crate::Matrix;

/// Rotation quaternion.
///
/// Scalar-first convention: `w` is the scalar part and `(x, y, z)` the
/// vector part. Composition is the Hamilton product: `(p * q) * v` rotates
/// `v` by `q` first, then by `p`.
///
/// Unit length is assumed by [`unit_rotation_matrix`](Quaternion::unit_rotation_matrix)
/// and [`axis_angle`](Quaternion::axis_angle) but never enforced; call
/// [`renormalize`](Quaternion::renormalize) after long chains of products.
///
/// # Examples
///
/// ```
/// use vecmat::{Quaternion, Vector3};
/// use core::f64::consts::FRAC_PI_2;
///
/// let q = Quaternion::from_axis_angle(Vector3::uz(), FRAC_PI_2);
/// let v = q * Vector3::ux();
/// assert!((v[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// `w + xi + yj + zk`.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// `(cos(angle/2), sin(angle/2) · axis)`. `axis` should be unit length.
    #[inline]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle * T::lit(0.5)).sin_cos();
        Self::new(c, axis[0] * s, axis[1] * s, axis[2] * s)
    }

    /// Quaternion of a 3×3 rotation matrix (Shepperd's method).
    ///
    /// Divides by whichever of `w, x, y, z` is largest, so angles near π
    /// come out as cleanly as small ones.
    pub fn from_rotation_matrix(m: &Matrix<T, 3, 3>) -> Self {
        let trace = m.trace();
        let one = T::one();
        let quarter = T::lit(0.25);
        let half = T::lit(0.5);

        if trace > T::zero() {
            let s = (trace + one).sqrt();
            let k = half / s;
            Self::new(
                s * half,
                (m[(2, 1)] - m[(1, 2)]) * k,
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(1, 0)] - m[(0, 1)]) * k,
            )
        } else if m[(0, 0)] >= m[(1, 1)] && m[(0, 0)] >= m[(2, 2)] {
            let s = ((one + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Self::new(
                (m[(2, 1)] - m[(1, 2)]) * k,
                s,
                (m[(0, 1)] + m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
            )
        } else if m[(1, 1)] >= m[(2, 2)] {
            let s = ((one - m[(0, 0)] + m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Self::new(
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(0, 1)] + m[(1, 0)]) * k,
                s,
                (m[(1, 2)] + m[(2, 1)]) * k,
            )
        } else {
            let s = ((one - m[(0, 0)] - m[(1, 1)] + m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Self::new(
                (m[(1, 0)] - m[(0, 1)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(1, 2)] + m[(2, 1)]) * k,
                s,
            )
        }
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// `conjugate / norm²`; the conjugate itself when unit length.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Alias for [`norm`](Self::norm).
    #[inline]
    pub fn magnitude(&self) -> T {
        self.norm()
    }

    /// Scale to unit length in place. A zero quaternion is left as is.
    pub fn renormalize(&mut self) {
        let n = self.norm();
        if n != T::zero() {
            *self = *self / n;
        }
    }

    /// Unit-length copy.
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.renormalize();
        q
    }

    /// True if the norm is within [`unit_thresh`](FloatScalar::unit_thresh) of one.
    pub fn checkunit(&self) -> bool {
        (T::one() - self.norm()).abs() <= T::unit_thresh()
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// `self = p * self`.
    ///
    /// `p` is the left factor, placed before `self` in the product. On a
    /// vector the old `self` rotation acts first and `p` second.
    pub fn premultiply(&mut self, p: &Self) {
        *self = *p * *self;
    }

    /// `self = self * p`.
    ///
    /// `p` is the right factor, placed after `self` in the product. On a
    /// vector `p` acts first and the old `self` rotation second.
    pub fn postmultiply(&mut self, p: &Self) {
        *self = *self * *p;
    }

    /// Compose a further rotation of `angle` about `axis` on top of this one.
    ///
    /// ```
    /// use vecmat::{Quaternion, Vector3};
    /// use core::f64::consts::FRAC_PI_2;
    /// let mut q = Quaternion::identity();
    /// q.rotate(Vector3::uz(), FRAC_PI_2);
    /// q.rotate(Vector3::uz(), FRAC_PI_2);
    /// let v = q * Vector3::ux();
    /// assert!((v[0] + 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate(&mut self, axis: Vector3<T>, angle: T) {
        self.premultiply(&Self::from_axis_angle(axis, angle));
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// 3×3 rotation matrix with `s` scaling the quadratic terms.
    fn rotation_block(&self, s: T) -> Matrix<T, 3, 3> {
        let one = T::one();
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix::new([
            [one - s * (yy + zz), s * (xy - wz), s * (xz + wy)],
            [s * (xy + wz), one - s * (xx + zz), s * (yz - wx)],
            [s * (xz - wy), s * (yz + wx), one - s * (xx + yy)],
        ])
    }

    fn embed(block: Matrix<T, 3, 3>) -> Matrix<T, 4, 4> {
        let mut m = Matrix::identity();
        for c in 0..3 {
            for r in 0..3 {
                m[(r, c)] = block[(r, c)];
            }
        }
        m
    }

    /// 3×3 rotation matrix, valid for non-unit quaternions (divides by norm²).
    pub fn rotation_matrix3(&self) -> Matrix<T, 3, 3> {
        self.rotation_block(T::lit(2.0) / self.norm_squared())
    }

    /// 3×3 rotation matrix assuming unit length.
    pub fn unit_rotation_matrix3(&self) -> Matrix<T, 3, 3> {
        self.rotation_block(T::lit(2.0))
    }

    /// 4×4 homogeneous rotation, valid for non-unit quaternions.
    pub fn rotation_matrix(&self) -> Matrix<T, 4, 4> {
        Self::embed(self.rotation_matrix3())
    }

    /// 4×4 homogeneous rotation assuming unit length.
    pub fn unit_rotation_matrix(&self) -> Matrix<T, 4, 4> {
        Self::embed(self.unit_rotation_matrix3())
    }

    /// `(ax, ay, az, angle)`. The identity rotation gives `(1, 0, 0, 0)`.
    pub fn axis_angle(&self) -> Vector4<T> {
        let (axis, angle) = self.to_axis_angle();
        axis.plus_one_dim(angle)
    }

    /// Unit axis and angle in radians. A rotation too small to carry an
    /// axis gives `(ux, 0)`.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let n = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if n < T::epsilon() {
            (Vector3::ux(), T::zero())
        } else {
            let angle = T::lit(2.0) * n.atan2(self.w);
            (Vector3::from_array([self.x / n, self.y / n, self.z / n]), angle)
        }
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

// Rotate a vector: q v q⁻¹ via v' = v + 2w(u × v) + 2(u × (u × v))
impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        let u = Vector3::from_array([self.x, self.y, self.z]);
        let two = T::lit(2.0);
        let uv = u.cross(&v);
        let uuv = u.cross(&uv);
        v + uv * (two * self.w) + uuv * two
    }
}

impl<T: FloatScalar> Mul<&Vector3<T>> for &Quaternion<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, v: &Vector3<T>) -> Vector3<T> {
        (*self).mul(*v)
    }
}

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl<T: FloatScalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.w / s, self.x / s, self.y / s, self.z / s)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}
