//! Type aliases for common matrix sizes.

use crate::Matrix;

// ── Square ─────────────────────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix: rotations and linear maps of 3-space.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix: homogeneous transforms.
pub type Matrix4<T> = Matrix<T, 4, 4>;
/// 5×5 matrix.
pub type Matrix5<T> = Matrix<T, 5, 5>;
/// 6×6 matrix.
pub type Matrix6<T> = Matrix<T, 6, 6>;

// ── Rectangular ────────────────────────────────────────────────────

/// 2×3 matrix.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 3×2 matrix.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3×4 matrix: an affine transform without its projective row.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// 4×3 matrix.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
