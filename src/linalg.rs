/// Errors from the strict linear algebra entry points.
///
/// The default paths ([`Matrix::inverse`](crate::Matrix::inverse),
/// [`poly::solve`](crate::poly::solve)) never fail; these variants come
/// from their opt-in checked counterparts.
///
/// ```
/// use vecmat::{LinalgError, Matrix};
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.try_inverse().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix determinant is zero.
    Singular,
    /// Iterative root finding did not converge within the iteration budget.
    ConvergenceFailure,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::ConvergenceFailure => write!(f, "iterative algorithm did not converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
