use alloc::vec::Vec;

use rand::Rng;

use super::VVec;
use crate::traits::{FloatScalar, Scalar};

/// Edge policy for convolution, differentiation and zero crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    /// Samples outside the data do not exist (treated as zero where a value is needed).
    #[default]
    NoWrap,
    /// The data is circular: index `n` is index `0`.
    Wrap,
}

impl<T: Scalar> VVec<T> {
    /// Correlate with a centred `kernel`, keeping the input length.
    ///
    /// `out[i] = Σ_j self[i + j - k/2] · kernel[j]`, with out-of-range
    /// samples zero under [`Wrap::NoWrap`] and taken modulo the length under
    /// [`Wrap::Wrap`].
    ///
    /// ```
    /// use vecmat::{VVec, Wrap};
    /// let a = VVec::from_vec(vec![1.0, 2.0, 3.0]);
    /// let k = VVec::from_vec(vec![2.0, 3.0, 2.0]);
    /// assert_eq!(a.convolve(&k, Wrap::NoWrap).as_slice(), &[7.0, 14.0, 13.0]);
    /// assert_eq!(a.convolve(&k, Wrap::Wrap).as_slice(), &[13.0, 14.0, 15.0]);
    /// ```
    pub fn convolve(&self, kernel: &Self, wrap: Wrap) -> Self {
        let n = self.len() as isize;
        let half = (kernel.len() / 2) as isize;
        let mut out = Self::with_len(self.len());
        if n == 0 {
            return out;
        }
        for (i, o) in out.data.iter_mut().enumerate() {
            let mut acc = T::zero();
            for (j, &k) in kernel.data.iter().enumerate() {
                let idx = i as isize + j as isize - half;
                let idx = match wrap {
                    Wrap::Wrap => idx.rem_euclid(n),
                    Wrap::NoWrap if idx < 0 || idx >= n => continue,
                    Wrap::NoWrap => idx,
                };
                acc = acc + self.data[idx as usize] * k;
            }
            *o = acc;
        }
        out
    }

    pub fn convolve_inplace(&mut self, kernel: &Self, wrap: Wrap) {
        *self = self.convolve(kernel, wrap);
    }

    /// Randomly permute in place (Fisher–Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.data.swap(i, j);
        }
    }

    /// Shuffled copy; `self` is unchanged.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut v = self.clone();
        v.shuffle(rng);
        v
    }
}

impl<T: FloatScalar> VVec<T> {
    /// Centred first difference.
    ///
    /// Interior elements are `(a[i+1] - a[i-1]) / 2`. The ends use one-sided
    /// differences under [`Wrap::NoWrap`] and the circular neighbour under
    /// [`Wrap::Wrap`]. Fewer than two elements give zeros.
    pub fn diff(&self, wrap: Wrap) -> Self {
        let a = &self.data;
        let n = a.len();
        let mut out = Self::with_len(n);
        if n < 2 {
            return out;
        }
        let half = T::lit(0.5);
        for i in 1..n - 1 {
            out.data[i] = (a[i + 1] - a[i - 1]) * half;
        }
        match wrap {
            Wrap::NoWrap => {
                out.data[0] = a[1] - a[0];
                out.data[n - 1] = a[n - 1] - a[n - 2];
            }
            Wrap::Wrap => {
                out.data[0] = (a[1] - a[n - 1]) * half;
                out.data[n - 1] = (a[0] - a[n - 2]) * half;
            }
        }
        out
    }

    pub fn diff_inplace(&mut self, wrap: Wrap) {
        *self = self.diff(wrap);
    }

    /// Zero-crossing positions, ascending, signed by direction.
    ///
    /// A sign change between samples `i-1` and `i` is reported at `i - 0.5`;
    /// a run of exact zeros between samples of opposite sign is reported at
    /// the middle of the run, so a single zero at `i` gives `i`. Rising
    /// crossings are positive, falling ones negative. Under [`Wrap::Wrap`]
    /// the last sample also neighbours the first and that crossing is
    /// reported past `n - 1`: `n - 0.5` for the pair `(n-1, 0)` itself. A
    /// leading zero has no left neighbour without wrapping.
    ///
    /// ```
    /// use vecmat::{VVec, Wrap};
    /// let a = VVec::from_vec(vec![-1.0, 2.0, 3.0, 2.0, 0.0, -1.0, -2.0, -3.0, -2.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(a.zerocross(Wrap::NoWrap).as_slice(), &[0.5, -4.0, 8.5]);
    /// assert_eq!(a.zerocross(Wrap::Wrap).as_slice(), &[0.5, -4.0, 8.5, -11.5]);
    ///
    /// let b = VVec::from_vec(vec![1.0, 0.0, 0.0, -1.0]);
    /// assert_eq!(b.zerocross(Wrap::NoWrap).as_slice(), &[-1.5]);
    /// ```
    pub fn zerocross(&self, wrap: Wrap) -> Self {
        let a = &self.data;
        let n = a.len();
        let zero = T::zero();
        let mut out = Vec::new();

        let half = T::lit(0.5);
        let opposite = |l: T, r: T| (l < zero && r > zero) || (l > zero && r < zero);
        // midway between nonzero samples j and i, signed by the sample at i
        let crossing = |j: usize, i: usize, r: T| {
            let pos = T::lit((j + i) as f64) * half;
            if r > zero {
                pos
            } else {
                -pos
            }
        };

        let mut first = None;
        let mut last: Option<usize> = None;
        for (i, &x) in a.iter().enumerate() {
            if x == zero {
                continue;
            }
            if let Some(j) = last {
                if opposite(a[j], x) {
                    out.push(crossing(j, i, x));
                }
            }
            if first.is_none() {
                first = Some(i);
            }
            last = Some(i);
        }

        if let (Wrap::Wrap, Some(f), Some(l)) = (wrap, first, last) {
            if opposite(a[l], a[f]) {
                out.push(crossing(l, f + n, a[f]));
            }
        }
        Self::from_vec(out)
    }
}
