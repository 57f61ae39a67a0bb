mod ops;
mod signal;

pub use signal::Wrap;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::elements;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::{Delimited, Vector};

/// Runtime-sized numeric vector.
///
/// Backed by a `Vec<T>`, it shares the fixed [`Vector`]'s vocabulary
/// (arithmetic, reductions, maps, extrema, comparisons, rescaling) and adds
/// size-changing operations and signal processing: [`convolve`](VVec::convolve),
/// [`diff`](VVec::diff), [`zerocross`](VVec::zerocross) and
/// [`shuffle`](VVec::shuffle).
///
/// Binary elementwise operations require equal lengths and panic with
/// `"vvec length mismatch"` otherwise.
///
/// # Examples
///
/// ```
/// use vecmat::VVec;
///
/// let mut v = VVec::from_vec(vec![1.0_f64, 2.0, 3.0]);
/// v.push(4.0);
/// assert_eq!(v.len(), 4);
/// assert_eq!(v.sum(), 10.0);
/// assert_eq!(&v * 2.0, VVec::from_vec(vec![2.0, 4.0, 6.0, 8.0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VVec<T> {
    pub(crate) data: Vec<T>,
}

impl<T> VVec<T> {
    /// Empty vector.
    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Take ownership of a `Vec`.
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
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
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> VVec<U> {
        VVec {
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Panics with `"vvec length mismatch"` unless `other` has the same length.
    #[inline]
    pub(crate) fn check_len<U>(&self, other: &VVec<U>) {
        assert_eq!(self.len(), other.len(), "vvec length mismatch");
    }
}

impl<T: Scalar> VVec<T> {
    /// `n` zeros.
    ///
    /// ```
    /// use vecmat::VVec;
    /// let v = VVec::<i32>::with_len(3);
    /// assert_eq!(v.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn with_len(n: usize) -> Self {
        Self::filled(n, T::zero())
    }

    /// `n` copies of `value`.
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            data: alloc::vec![value; n],
        }
    }

    pub fn from_slice(s: &[T]) -> Self {
        Self { data: s.to_vec() }
    }

    /// Resize to `n` elements, zero-filling new ones.
    pub fn resize(&mut self, n: usize) {
        self.data.resize(n, T::zero());
    }

    /// Set every element to zero, keeping the length.
    pub fn zero(&mut self) {
        self.data.iter_mut().for_each(|x| *x = T::zero());
    }

    /// Copy into a fixed-size vector.
    pub fn to_vector<const N: usize>(&self) -> Result<Vector<T, N>, crate::DimensionMismatch> {
        Vector::from_slice(&self.data)
    }

    /// Dot product. Panics on a length mismatch.
    pub fn dot(&self, rhs: &Self) -> T {
        self.check_len(rhs);
        elements::dot(&self.data, &rhs.data)
    }

    pub fn length_sq(&self) -> T {
        elements::dot(&self.data, &self.data)
    }

    pub fn sum(&self) -> T {
        elements::sum(&self.data)
    }

    pub fn product(&self) -> T {
        elements::product(&self.data)
    }

    pub fn sq(&self) -> Self {
        self.map(|&x| x * x)
    }

    pub fn sq_inplace(&mut self) {
        self.data.iter_mut().for_each(|x| *x = *x * *x);
    }

    pub fn has_zero(&self) -> bool {
        self.data.iter().any(|&x| x == T::zero())
    }

    /// Move every element one place toward the front; the first becomes the last.
    pub fn rotate(&mut self) {
        elements::rotate_by(&mut self.data, 1);
    }

    /// Rotate left by `n` places. Negative `n` rotates right.
    pub fn rotate_by(&mut self, n: isize) {
        elements::rotate_by(&mut self.data, n);
    }

    /// Swap neighbouring pairs. Panics on an odd length.
    pub fn rotate_pairs(&mut self) {
        elements::rotate_pairs(&mut self.data);
    }
}

impl<T: Scalar + PartialOrd> VVec<T> {
    /// Largest element, `None` if empty.
    pub fn max(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.data[self.argmax()])
    }

    /// Smallest element, `None` if empty.
    pub fn min(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.data[self.argmin()])
    }

    /// Index of the largest element (0 when empty).
    pub fn argmax(&self) -> usize {
        elements::argmax(&self.data)
    }

    /// Index of the smallest element (0 when empty).
    pub fn argmin(&self) -> usize {
        elements::argmin(&self.data)
    }

    /// `(min, max)`, `None` if empty.
    pub fn range(&self) -> Option<(T, T)> {
        elements::range(&self.data)
    }

    pub fn all_lt(&self, rhs: T) -> bool {
        elements::all(&self.data, |x| x < rhs)
    }

    pub fn all_le(&self, rhs: T) -> bool {
        elements::all(&self.data, |x| x <= rhs)
    }

    pub fn all_gt(&self, rhs: T) -> bool {
        elements::all(&self.data, |x| x > rhs)
    }

    pub fn all_ge(&self, rhs: T) -> bool {
        elements::all(&self.data, |x| x >= rhs)
    }

    /// Elementwise `<` for every pair. Panics on a length mismatch.
    pub fn all_lt_vec(&self, rhs: &Self) -> bool {
        self.check_len(rhs);
        elements::all_pairs(&self.data, &rhs.data, |a, b| a < b)
    }

    pub fn all_le_vec(&self, rhs: &Self) -> bool {
        self.check_len(rhs);
        elements::all_pairs(&self.data, &rhs.data, |a, b| a <= b)
    }

    pub fn all_gt_vec(&self, rhs: &Self) -> bool {
        self.check_len(rhs);
        elements::all_pairs(&self.data, &rhs.data, |a, b| a > b)
    }

    pub fn all_ge_vec(&self, rhs: &Self) -> bool {
        self.check_len(rhs);
        elements::all_pairs(&self.data, &rhs.data, |a, b| a >= b)
    }

    /// Lexicographic ordering; a shorter prefix sorts first.
    pub fn lexical_cmp(&self, rhs: &Self) -> Option<Ordering> {
        elements::lexical_cmp(&self.data, &rhs.data)
    }

    pub fn lexical_lt(&self, rhs: &Self) -> bool {
        self.lexical_cmp(rhs) == Some(Ordering::Less)
    }
}

impl<T: FloatScalar> VVec<T> {
    /// `n` evenly spaced values from `start` to `stop` inclusive.
    ///
    /// ```
    /// use vecmat::VVec;
    /// let v = VVec::linspace(0.0_f64, 1.0, 3);
    /// assert_eq!(v.as_slice(), &[0.0, 0.5, 1.0]);
    /// ```
    pub fn linspace(start: T, stop: T, n: usize) -> Self {
        let mut v = Self::with_len(n);
        elements::linspace(&mut v.data, start, stop);
        v
    }

    /// `start, start + step, ...` stopping before `stop`. Empty if the
    /// range holds no steps.
    pub fn arange(start: T, stop: T, step: T) -> Self {
        let n = elements::arange_len(start, stop, step);
        (0..n).map(|i| start + step * T::lit(i as f64)).collect()
    }

    pub fn length(&self) -> T {
        self.length_sq().sqrt()
    }

    /// Scale to unit length in place. The zero vector is left as is.
    pub fn renormalize(&mut self) {
        elements::renormalize(&mut self.data);
    }

    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.renormalize();
        v
    }

    pub fn checkunit(&self) -> bool {
        (T::one() - self.length()).abs() <= T::unit_thresh()
    }

    /// Copy with the length reduced by `dl`. Zero if that would leave no length.
    pub fn shorten(&self, dl: T) -> Self {
        self.with_length(self.length() - dl)
    }

    /// Copy with the length increased by `dl`. Zero if the result is not positive.
    pub fn lengthen(&self, dl: T) -> Self {
        self.with_length(self.length() + dl)
    }

    fn with_length(&self, newlen: T) -> Self {
        let len = self.length();
        if newlen <= T::zero() || len == T::zero() {
            Self::with_len(self.len())
        } else {
            self * (newlen / len)
        }
    }

    pub fn mean(&self) -> T {
        elements::mean(&self.data)
    }

    pub fn variance(&self) -> T {
        elements::variance(&self.data)
    }

    pub fn std(&self) -> T {
        self.variance().sqrt()
    }

    pub fn sqrt(&self) -> Self {
        self.map(|x| x.sqrt())
    }

    pub fn sqrt_inplace(&mut self) {
        self.data.iter_mut().for_each(|x| *x = x.sqrt());
    }

    pub fn log(&self) -> Self {
        self.map(|x| x.ln())
    }

    pub fn log10(&self) -> Self {
        self.map(|x| x.log10())
    }

    pub fn exp(&self) -> Self {
        self.map(|x| x.exp())
    }

    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }

    pub fn abs_inplace(&mut self) {
        self.data.iter_mut().for_each(|x| *x = x.abs());
    }

    pub fn signum(&self) -> Self {
        self.map(|x| x.signum())
    }

    pub fn floor(&self) -> Self {
        self.map(|x| x.floor())
    }

    pub fn ceil(&self) -> Self {
        self.map(|x| x.ceil())
    }

    pub fn trunc(&self) -> Self {
        self.map(|x| x.trunc())
    }

    pub fn pow(&self, p: T) -> Self {
        self.map(|x| x.powf(p))
    }

    /// Raise each element to the matching element of `p`. Panics on a length mismatch.
    pub fn pow_vec(&self, p: &Self) -> Self {
        self.check_len(p);
        self.data
            .iter()
            .zip(p.data.iter())
            .map(|(&x, &e)| x.powf(e))
            .collect()
    }

    pub fn longest(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.data[self.arglongest()])
    }

    pub fn shortest(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.data[self.argshortest()])
    }

    pub fn arglongest(&self) -> usize {
        elements::arglongest(&self.data)
    }

    pub fn argshortest(&self) -> usize {
        elements::argshortest(&self.data)
    }

    pub fn has_nan(&self) -> bool {
        self.data.iter().any(|x| x.is_nan())
    }

    pub fn has_inf(&self) -> bool {
        self.data.iter().any(|x| x.is_infinite())
    }

    pub fn replace_nan_with(&mut self, value: T) {
        self.data
            .iter_mut()
            .filter(|x| x.is_nan())
            .for_each(|x| *x = value);
    }

    /// Map linearly into `[0, 1]`. A constant vector becomes all zeros.
    pub fn rescale(&mut self) {
        if let Some((lo, hi)) = self.range() {
            self.rescale_with(lo, hi - lo);
        }
    }

    /// Map linearly into `[-1, 0]`.
    pub fn rescale_neg(&mut self) {
        if let Some((lo, hi)) = self.range() {
            self.rescale_with(hi, hi - lo);
        }
    }

    /// Map linearly into `[-1, 1]`.
    pub fn rescale_sym(&mut self) {
        if let Some((lo, hi)) = self.range() {
            let half = (hi - lo) / T::lit(2.0);
            self.rescale_with(lo + half, half);
        }
    }

    fn rescale_with(&mut self, offset: T, span: T) {
        if span == T::zero() {
            self.zero();
        } else {
            elements::affine_rescale(&mut self.data, offset, span);
        }
    }

    /// Angle between `self` and `other`, in `[0, π]`.
    pub fn angle(&self, other: &Self) -> T {
        let denom = self.length() * other.length();
        if denom == T::zero() {
            return T::zero();
        }
        let cos = self.dot(other) / denom;
        cos.max(-T::one()).min(T::one()).acos()
    }

    pub fn lexical_lt_beyond_epsilon(&self, rhs: &Self, n_eps: u32) -> bool {
        elements::lexical_lt_beyond_epsilon(&self.data, &rhs.data, n_eps)
    }

    pub fn length_lt(&self, rhs: &Self) -> bool {
        self.length_sq() < rhs.length_sq()
    }

    pub fn length_le(&self, rhs: &Self) -> bool {
        self.length_sq() <= rhs.length_sq()
    }

    pub fn length_gt(&self, rhs: &Self) -> bool {
        self.length_sq() > rhs.length_sq()
    }

    pub fn length_ge(&self, rhs: &Self) -> bool {
        self.length_sq() >= rhs.length_sq()
    }
}

impl<T> Default for VVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for VVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for VVec<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> From<Vec<T>> for VVec<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for VVec<T> {
    /// ```
    /// use vecmat::{Vector, VVec};
    /// let v: VVec<f64> = Vector::from_array([1.0, 2.0]).into();
    /// assert_eq!(v.len(), 2);
    /// ```
    fn from(v: Vector<T, N>) -> Self {
        Self {
            data: v.data.into_iter().collect(),
        }
    }
}

impl<T> FromIterator<T> for VVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for VVec<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a VVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut VVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for VVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Delimited {
            items: &self.data,
            open: "(",
            close: ")",
        }
        .fmt(f)
    }
}

impl<T: fmt::Display> VVec<T> {
    pub fn str(&self) -> alloc::string::String {
        alloc::format!("{}", self)
    }

    pub fn str_mat(&self) -> alloc::string::String {
        let d = Delimited { items: &self.data, open: "[", close: "]" };
        alloc::format!("{}", d)
    }

    pub fn str_numpy(&self) -> alloc::string::String {
        let d = Delimited { items: &self.data, open: "np.array((", close: "))" };
        alloc::format!("{}", d)
    }
}
