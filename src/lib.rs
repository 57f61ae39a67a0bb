//! # vecmat
//!
//! Small-dimension linear algebra for graphics, simulation and signal work:
//! fixed-size vectors, column-major matrices with affine transform builders,
//! quaternions, eigen-decomposition of general square matrices and a
//! polynomial root solver. no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use vecmat::{Matrix4, Quaternion, Vector3};
//! use core::f64::consts::FRAC_PI_2;
//!
//! // Rotate a quarter turn about z, then move one unit along world x
//! let mut m = Matrix4::<f64>::identity();
//! m.rotate(Vector3::uz(), FRAC_PI_2);
//! m.pretranslate(Vector3::ux());
//!
//! let p = (m * Vector3::ux()).less_one_dim();
//! assert!((p - Vector3::from_array([1.0, 1.0, 0.0])).length() < 1e-12);
//!
//! // The same rotation as a quaternion
//! let q = Quaternion::from_axis_angle(Vector3::uz(), FRAC_PI_2);
//! assert!((q * Vector3::ux() - Vector3::uy()).length() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — Fixed-size `Vector<T, N>` over an owning `[T; N]`.
//!   Elementwise arithmetic, dot/cross products, lengths and normalization,
//!   statistics, elementwise maths, "all" comparisons, lexical ordering and
//!   text parsing via `FromStr`.
//!
//! - [`vvec`] — Heap-allocated `VVec<T>` with the same numeric surface plus
//!   convolution, differentiation, zero crossings and shuffling
//!   (requires `alloc`).
//!
//! - [`matrix`] — Fixed-size `Matrix<T, R, C>`, column-major `[[T; R]; C]`
//!   storage. Determinant, inverse, transpose, powers, affine/projective
//!   transform builders on 2×2, 3×3 and 4×4, and [`matrix::eigen`] for
//!   eigenvalues and eigenvectors.
//!
//! - [`poly`] — Polynomial roots: closed forms up to quartic,
//!   Durand–Kerner above, with Newton polishing.
//!
//! - [`quaternion`] — Rotation quaternion, scalar-first `(w, x, y, z)`.
//!   Hamilton product, vector rotation, rotation matrices, axis-angle.
//!
//! - [`geometry`] — Triangle area, plane projection, ray/triangle and
//!   ray/plane intersection, distance to triangle edges, winding numbers,
//!   angle wrapping, spherical map projections and 2D convex hulls.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats, used by lengths, rotations and solvers
//!   - [`LinalgScalar`] — real floats and complex numbers, used by inversion
//!
//! ## Errors and diagnostics
//!
//! Numerical degeneracy never panics on the default paths: inverting a
//! singular matrix returns non-finite values and logs a warning through the
//! [`log`] facade. [`Matrix::try_inverse`] and [`poly::solve_with`] are the
//! opt-in checked variants. Install any `log` backend to see the messages.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | `VVec`, `VVec`-returning solver functions, string helpers, `graham_scan` |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `all`     | no       | All features |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub(crate) mod elements;
pub mod geometry;
pub mod linalg;
pub mod matrix;
pub mod poly;
pub mod quaternion;
pub mod traits;
pub mod vector;
#[cfg(feature = "alloc")]
pub mod vvec;

pub use linalg::LinalgError;
pub use matrix::aliases::{
    Matrix1, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3, Matrix5,
    Matrix6,
};
pub use matrix::eigen::Eigenpair;
pub use matrix::Matrix;
pub use poly::{PolyOutcome, PolySettings};
#[cfg(feature = "alloc")]
pub use poly::PolyRoots;
pub use quaternion::Quaternion;
pub use traits::{FloatScalar, LinalgScalar, Scalar};
pub use vector::{
    DimensionMismatch, ParseVecError, Vector, Vector1, Vector2, Vector3, Vector4, Vector5,
    Vector6,
};
#[cfg(feature = "alloc")]
pub use vvec::{VVec, Wrap};

pub use num_complex::Complex;
