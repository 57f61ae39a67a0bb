use core::fmt;
use core::str::FromStr;

use super::Vector;
use crate::traits::Scalar;

/// Error from parsing a comma-separated vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseVecError {
    /// The field at `index` is not a valid element.
    InvalidElement { index: usize },
    /// More non-empty fields than the vector holds.
    TooManyElements { expected: usize, got: usize },
}

impl fmt::Display for ParseVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseVecError::InvalidElement { index } => {
                write!(f, "invalid vector element at field {}", index)
            }
            ParseVecError::TooManyElements { expected, got } => {
                write!(f, "too many vector elements: expected at most {}, got {}", expected, got)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseVecError {}

impl<T: Scalar + FromStr, const N: usize> Vector<T, N> {
    /// Overwrite from comma-separated text.
    ///
    /// Fields are trimmed. Empty fields and missing trailing fields become
    /// zero. Each field goes through `T`'s own [`FromStr`], so a negative
    /// field for an unsigned `T` is an [`InvalidElement`] error rather than
    /// a wrapped value. On error `self` is left unchanged.
    ///
    /// [`InvalidElement`]: ParseVecError::InvalidElement
    ///
    /// ```
    /// use vecmat::{ParseVecError, Vector};
    /// let mut v = Vector::<i32, 4>::filled(9);
    /// v.set_from("1,,3,").unwrap();
    /// assert_eq!(v, Vector::from_array([1, 0, 3, 0]));
    ///
    /// let mut u = Vector::<u32, 2>::zeros();
    /// assert_eq!(u.set_from("-3,1"), Err(ParseVecError::InvalidElement { index: 0 }));
    /// ```
    pub fn set_from(&mut self, s: &str) -> Result<(), ParseVecError> {
        let mut out = Self::zeros();
        let mut count = 0;
        for (index, field) in s.split(',').enumerate() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            if index >= N {
                count = count.max(index + 1);
                continue;
            }
            out.data[index] = field
                .parse()
                .map_err(|_| ParseVecError::InvalidElement { index })?;
        }
        if count > N {
            return Err(ParseVecError::TooManyElements { expected: N, got: count });
        }
        *self = out;
        Ok(())
    }
}

impl<T: Scalar + FromStr, const N: usize> FromStr for Vector<T, N> {
    type Err = ParseVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut v = Self::zeros();
        v.set_from(s)?;
        Ok(v)
    }
}
