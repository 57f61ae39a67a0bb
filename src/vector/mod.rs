mod compare;
mod math;
mod ops;
mod parse;

pub use parse::ParseVecError;

use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::{Bounded, NumCast};

use crate::traits::Scalar;

/// Fixed-size numeric vector with `N` elements.
///
/// An owning `[T; N]` aggregate: stack-allocated, `Copy` whenever `T` is,
/// no-std compatible. Arithmetic between two vectors is elementwise
/// (`*` and `/` are Hadamard operations); use [`dot`](Vector::dot) and
/// [`cross`](Vector::cross) for the algebraic products.
///
/// # Examples
///
/// ```
/// use vecmat::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v * v, Vector::from_array([9.0, 16.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from an array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Alias for [`from_array`](Self::from_array).
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the vector, returning its array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Apply `f` to every element, producing a new vector.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::from_array([1, 2, 3]);
    /// assert_eq!(v.map(|x| x as f64 * 0.5), Vector::from_array([0.5, 1.0, 1.5]));
    /// ```
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// All-zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    /// Vector with every element set to `value`.
    #[inline]
    pub fn filled(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Build a vector by calling `f(i)` for each index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(f),
        }
    }

    /// Copy from a slice of exactly `N` elements.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v: Vector<f32, 3> = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v[2], 3.0);
    /// assert!(Vector::<f32, 3>::from_slice(&[1.0]).is_err());
    /// ```
    pub fn from_slice(s: &[T]) -> Result<Self, DimensionMismatch> {
        if s.len() != N {
            return Err(DimensionMismatch {
                expected: (1, N),
                got: (1, s.len()),
            });
        }
        let mut v = Self::zeros();
        v.data.copy_from_slice(s);
        Ok(v)
    }

    /// Unit vector along axis `i`. Panics if `i >= N`.
    #[inline]
    pub fn unit(i: usize) -> Self {
        let mut v = Self::zeros();
        v.data[i] = T::one();
        v
    }

    /// Unit vector along the first axis.
    #[inline]
    pub fn ux() -> Self {
        Self::unit(0)
    }

    /// Unit vector along the second axis.
    #[inline]
    pub fn uy() -> Self {
        Self::unit(1)
    }

    /// Unit vector along the third axis.
    #[inline]
    pub fn uz() -> Self {
        Self::unit(2)
    }

    /// Unit vector along the fourth axis.
    #[inline]
    pub fn uw() -> Self {
        Self::unit(3)
    }

    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// First element. Panics for `N == 0`.
    #[inline]
    pub fn first(&self) -> T {
        self.data[0]
    }

    /// Last element. Panics for `N == 0`.
    #[inline]
    pub fn last(&self) -> T {
        self.data[N - 1]
    }

    /// `(first, last)` as a 2-vector.
    #[inline]
    pub fn firstlast(&self) -> Vector<T, 2> {
        Vector::from_array([self.first(), self.last()])
    }

    /// Set every element to zero.
    #[inline]
    pub fn zero(&mut self) {
        self.data = [T::zero(); N];
    }

    /// Set every element to the largest value of `T`.
    #[inline]
    pub fn set_max(&mut self)
    where
        T: Bounded,
    {
        self.data = [T::max_value(); N];
    }

    /// Set every element to the lowest (most negative) value of `T`.
    #[inline]
    pub fn set_lowest(&mut self)
    where
        T: Bounded,
    {
        self.data = [T::min_value(); N];
    }

    /// Convert element type with [`NumCast`]. `None` if any element does not fit.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::from_array([1.7_f64, -2.2]);
    /// assert_eq!(v.cast::<i32>(), Some(Vector::from_array([1, -2])));
    /// assert_eq!(Vector::from_array([-1_i32]).cast::<u8>(), None);
    /// ```
    pub fn cast<U: Scalar + NumCast>(&self) -> Option<Vector<U, N>>
    where
        T: NumCast,
    {
        let mut out = Vector::<U, N>::zeros();
        for (o, &x) in out.data.iter_mut().zip(self.data.iter()) {
            *o = U::from(x)?;
        }
        Some(out)
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// ── Dimension change ────────────────────────────────────────────────

macro_rules! impl_dim_change {
    ($($n:literal => $n1:literal),*) => {
        $(
            impl<T: Scalar> Vector<T, $n1> {
                /// Drop the last element.
                #[inline]
                pub fn less_one_dim(&self) -> Vector<T, $n> {
                    Vector::from_fn(|i| self.data[i])
                }
            }

            impl<T: Scalar> Vector<T, $n> {
                /// Append `value` as a new last element.
                #[inline]
                pub fn plus_one_dim(&self, value: T) -> Vector<T, $n1> {
                    Vector::from_fn(|i| if i < $n { self.data[i] } else { value })
                }
            }
        )*
    };
}

impl_dim_change!(1 => 2, 2 => 3, 3 => 4, 4 => 5);

// ── Size aliases ────────────────────────────────────────────────────

/// A 1-element vector.
pub type Vector1<T> = Vector<T, 1>;
/// A 2-element vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element vector.
pub type Vector4<T> = Vector<T, 4>;
/// A 5-element vector.
pub type Vector5<T> = Vector<T, 5>;
/// A 6-element vector.
pub type Vector6<T> = Vector<T, 6>;

// ── Errors ──────────────────────────────────────────────────────────

/// Dimension mismatch error for fallible slice conversions.
///
/// Returned by [`Vector::from_slice`] and
/// [`Matrix::from_col_major_slice`](crate::Matrix::from_col_major_slice)
/// when the runtime length does not match the compile-time shape.
///
/// # Example
///
/// ```
/// use vecmat::{DimensionMismatch, Matrix};
///
/// let r = Matrix::<f64, 2, 2>::from_col_major_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(r.unwrap_err(), DimensionMismatch { expected: (2, 2), got: (1, 3) });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Expected `(rows, cols)`.
    pub expected: (usize, usize),
    /// Got `(rows, cols)`.
    pub got: (usize, usize),
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dimension mismatch: expected {}x{}, got {}x{}",
            self.expected.0, self.expected.1, self.got.0, self.got.1
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimensionMismatch {}

// ── Display ─────────────────────────────────────────────────────────

/// Comma-separated rendering between an opening and a closing delimiter.
pub(crate) struct Delimited<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) open: &'static str,
    pub(crate) close: &'static str,
}

impl<T: fmt::Display> fmt::Display for Delimited<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.open)?;
        for (i, x) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str(self.close)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Delimited {
            items: &self.data,
            open: "(",
            close: ")",
        }
        .fmt(f)
    }
}

#[cfg(feature = "alloc")]
impl<T: fmt::Display, const N: usize> Vector<T, N> {
    /// Same text as `Display`: `(a,b,c)`.
    pub fn str(&self) -> alloc::string::String {
        alloc::format!("{}", self)
    }

    /// Bracketed form: `[a,b,c]`.
    pub fn str_mat(&self) -> alloc::string::String {
        let d = Delimited { items: &self.data, open: "[", close: "]" };
        alloc::format!("{}", d)
    }

    /// Python form: `np.array((a,b,c))`.
    pub fn str_numpy(&self) -> alloc::string::String {
        let d = Delimited { items: &self.data, open: "np.array((", close: "))" };
        alloc::format!("{}", d)
    }

    /// Brace-initializer form: `{a,b,c}`.
    pub fn str_initializer(&self) -> alloc::string::String {
        let d = Delimited { items: &self.data, open: "{", close: "}" };
        alloc::format!("{}", d)
    }
}
