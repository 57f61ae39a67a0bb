use num_traits::{NumCast, ToPrimitive};

use super::{Vector, Vector2, Vector3};
use crate::elements;
use crate::matrix::Matrix;
use crate::traits::{FloatScalar, Scalar};

// ── Products ────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Dot (inner) product.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let a = Vector::from_array([1, 2, 3]);
    /// let b = Vector::from_array([4, 5, 6]);
    /// assert_eq!(a.dot(&b), 32);
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        elements::dot(&self.data, &rhs.data)
    }

    /// Outer product `self · otherᵀ`, an `N × P` matrix.
    pub fn outer<const P: usize>(&self, other: &Vector<T, P>) -> Matrix<T, N, P> {
        Matrix::from_fn(|r, c| self.data[r] * other.data[c])
    }

    /// Sum of squared elements.
    #[inline]
    pub fn length_sq(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length converted to another float type.
    ///
    /// Works for integer vectors too; the sum of squares is taken in `T`.
    pub fn length_as<U: FloatScalar>(&self) -> U
    where
        T: ToPrimitive,
    {
        let ss = self.length_sq().to_f64().unwrap_or(f64::NAN);
        U::lit(num_traits::Float::sqrt(ss))
    }

    /// Euclidean length rounded to the nearest value of `U`.
    ///
    /// `None` if the rounded length does not fit in `U`.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::from_array([2_i32, 2]);
    /// assert_eq!(v.length_rounded::<u8>(), Some(3));
    /// ```
    pub fn length_rounded<U: NumCast>(&self) -> Option<U>
    where
        T: ToPrimitive,
    {
        let ss = self.length_sq().to_f64()?;
        U::from(num_traits::Float::round(num_traits::Float::sqrt(ss)))
    }

    /// Sum of the elements.
    #[inline]
    pub fn sum(&self) -> T {
        elements::sum(&self.data)
    }

    /// Product of the elements.
    #[inline]
    pub fn product(&self) -> T {
        elements::product(&self.data)
    }

    /// Every element squared.
    #[inline]
    pub fn sq(&self) -> Self {
        self.map(|x| x * x)
    }

    pub fn sq_inplace(&mut self) {
        self.data.iter_mut().for_each(|x| *x = *x * *x);
    }

    /// True if any element equals zero.
    pub fn has_zero(&self) -> bool {
        self.data.iter().any(|&x| x == T::zero())
    }

    /// Move every element one place toward the front; the first becomes the last.
    pub fn rotate(&mut self) {
        elements::rotate_by(&mut self.data, 1);
    }

    /// Rotate left by `n` places. Negative `n` rotates right.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let mut v = Vector::from_array([1, 2, 3, 4]);
    /// v.rotate_by(-1);
    /// assert_eq!(v, Vector::from_array([4, 1, 2, 3]));
    /// ```
    pub fn rotate_by(&mut self, n: isize) {
        elements::rotate_by(&mut self.data, n);
    }

    /// Swap neighbouring pairs. Panics if `N` is odd.
    pub fn rotate_pairs(&mut self) {
        elements::rotate_pairs(&mut self.data);
    }
}

impl<T: Scalar> Vector3<T> {
    /// Cross product.
    ///
    /// ```
    /// use vecmat::Vector3;
    /// assert_eq!(Vector3::<i32>::ux().cross(&Vector3::uy()), Vector3::uz());
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [a0, a1, a2] = self.data;
        let [b0, b1, b2] = rhs.data;
        Vector::from_array([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }
}

impl<T: Scalar> Vector2<T> {
    /// Two-dimensional cross product: the z component of the 3D cross
    /// of `(x0, x1, 0)` and `(w0, w1, 0)`.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> T {
        self.data[0] * rhs.data[1] - self.data[1] * rhs.data[0]
    }
}

// ── Ordered element types ───────────────────────────────────────────

impl<T: Scalar + PartialOrd, const N: usize> Vector<T, N> {
    /// Largest element. Panics for `N == 0`.
    pub fn max(&self) -> T {
        self.data[self.argmax()]
    }

    /// Smallest element. Panics for `N == 0`.
    pub fn min(&self) -> T {
        self.data[self.argmin()]
    }

    /// Index of the largest element. Ties resolve to the lowest index.
    pub fn argmax(&self) -> usize {
        elements::argmax(&self.data)
    }

    /// Index of the smallest element. Ties resolve to the lowest index.
    pub fn argmin(&self) -> usize {
        elements::argmin(&self.data)
    }

    /// `(min, max)`. Both zero for an empty vector.
    pub fn range(&self) -> (T, T) {
        elements::range(&self.data).unwrap_or((T::zero(), T::zero()))
    }
}

// ── Float element types ─────────────────────────────────────────────

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Evenly spaced values from `start` to `stop`, both ends included.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::<f64, 5>::linspace(0.0, 1.0);
    /// assert_eq!(v, Vector::from_array([0.0, 0.25, 0.5, 0.75, 1.0]));
    /// ```
    pub fn linspace(start: T, stop: T) -> Self {
        let mut v = Self::zeros();
        elements::linspace(&mut v.data, start, stop);
        v
    }

    /// `start, start + step, ...` up to (not including) `stop`, clipped to `N`.
    /// Remaining elements are zero.
    pub fn arange(start: T, stop: T, step: T) -> Self {
        let count = elements::arange_len(start, stop, step).min(N);
        let mut v = Self::zeros();
        for (i, x) in v.data.iter_mut().take(count).enumerate() {
            *x = start + step * T::lit(i as f64);
        }
        v
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.length_sq().sqrt()
    }

    /// Scale to unit length in place. The zero vector is left as is.
    #[inline]
    pub fn renormalize(&mut self) {
        elements::renormalize(&mut self.data);
    }

    /// Unit-length copy. The zero vector stays zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.renormalize();
        v
    }

    /// True if the length is within [`unit_thresh`](FloatScalar::unit_thresh) of one.
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
            Self::zeros()
        } else {
            *self * (newlen / len)
        }
    }

    /// Arithmetic mean. Zero for `N == 0`.
    pub fn mean(&self) -> T {
        elements::mean(&self.data)
    }

    /// Sample variance (`N - 1` denominator).
    pub fn variance(&self) -> T {
        elements::variance(&self.data)
    }

    /// Sample standard deviation.
    pub fn std(&self) -> T {
        self.variance().sqrt()
    }

    pub fn sqrt(&self) -> Self {
        self.map(T::sqrt)
    }

    pub fn sqrt_inplace(&mut self) {
        self.data.iter_mut().for_each(|x| *x = x.sqrt());
    }

    /// Natural logarithm of every element.
    pub fn log(&self) -> Self {
        self.map(T::ln)
    }

    pub fn log10(&self) -> Self {
        self.map(T::log10)
    }

    pub fn exp(&self) -> Self {
        self.map(T::exp)
    }

    pub fn abs(&self) -> Self {
        self.map(T::abs)
    }

    pub fn abs_inplace(&mut self) {
        self.data.iter_mut().for_each(|x| *x = x.abs());
    }

    pub fn signum(&self) -> Self {
        self.map(T::signum)
    }

    pub fn floor(&self) -> Self {
        self.map(T::floor)
    }

    pub fn ceil(&self) -> Self {
        self.map(T::ceil)
    }

    pub fn trunc(&self) -> Self {
        self.map(T::trunc)
    }

    /// Raise every element to the power `p`.
    pub fn pow(&self, p: T) -> Self {
        self.map(|x| x.powf(p))
    }

    /// Raise each element to the matching element of `p`.
    pub fn pow_vec(&self, p: &Self) -> Self {
        let mut out = *self;
        for (x, &e) in out.data.iter_mut().zip(p.data.iter()) {
            *x = x.powf(e);
        }
        out
    }

    /// Element with the largest magnitude (sign kept).
    pub fn longest(&self) -> T {
        self.data[self.arglongest()]
    }

    /// Element with the smallest magnitude (sign kept).
    pub fn shortest(&self) -> T {
        self.data[self.argshortest()]
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

    /// Overwrite every NaN element with `value`.
    pub fn replace_nan_with(&mut self, value: T) {
        self.data
            .iter_mut()
            .filter(|x| x.is_nan())
            .for_each(|x| *x = value);
    }

    /// Map linearly into `[0, 1]`. A constant vector becomes all zeros.
    pub fn rescale(&mut self) {
        let (lo, hi) = self.range();
        self.rescale_with(lo, hi - lo);
    }

    /// Map linearly into `[-1, 0]`.
    pub fn rescale_neg(&mut self) {
        let (lo, hi) = self.range();
        self.rescale_with(hi, hi - lo);
    }

    /// Map linearly into `[-1, 1]`.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let mut v = Vector::from_array([2.0, 4.0, 6.0]);
    /// v.rescale_sym();
    /// assert_eq!(v, Vector::from_array([-1.0, 0.0, 1.0]));
    /// ```
    pub fn rescale_sym(&mut self) {
        let (lo, hi) = self.range();
        let half = (hi - lo) / T::lit(2.0);
        self.rescale_with(lo + half, half);
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
}

impl<T: FloatScalar> Vector3<T> {
    /// Angle from `self` to `other`, signed by the rotation sense about `axis`.
    ///
    /// Positive when `self × other` points along `axis`.
    pub fn angle_signed(&self, other: &Self, axis: &Self) -> T {
        let magnitude = self.angle(other);
        if self.cross(other).dot(axis) > T::zero() {
            magnitude
        } else {
            -magnitude
        }
    }

    /// `(rho, theta, phi)`: radius, azimuth `atan2(y, x)` and polar angle from +z.
    pub fn cartesian_to_spherical(&self) -> Self {
        let rho = self.length();
        let [x, y, z] = self.data;
        Vector::from_array([rho, y.atan2(x), (z / rho).acos()])
    }
}

impl<T: FloatScalar> Vector2<T> {
    /// Angle to the +x axis, `atan2(y, x)`.
    pub fn angle_2d(&self) -> T {
        self.data[1].atan2(self.data[0])
    }

    /// Point in direction `theta`, keeping the length (or unit length if zero).
    pub fn set_angle(&mut self, theta: T) {
        let l = self.length();
        let l = if l > T::zero() { l } else { T::one() };
        self.data = [theta.cos() * l, theta.sin() * l];
    }
}
