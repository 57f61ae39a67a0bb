//! Slice kernels shared by [`Vector`](crate::Vector) and `VVec`.
//!
//! Everything here works on plain `&[T]` / `&mut [T]` so the fixed and the
//! runtime-sized containers reduce to the same code.

use core::cmp::Ordering;

use crate::traits::{FloatScalar, Scalar};

pub(crate) fn sum<T: Scalar>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x)
}

pub(crate) fn product<T: Scalar>(a: &[T]) -> T {
    a.iter().fold(T::one(), |acc, &x| acc * x)
}

pub(crate) fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Arithmetic mean. Zero for an empty slice.
pub(crate) fn mean<T: FloatScalar>(a: &[T]) -> T {
    if a.is_empty() {
        return T::zero();
    }
    sum(a) / T::lit(a.len() as f64)
}

/// Sample variance with an `n - 1` denominator. Zero for fewer than two elements.
pub(crate) fn variance<T: FloatScalar>(a: &[T]) -> T {
    if a.len() < 2 {
        return T::zero();
    }
    let m = mean(a);
    let ss = a.iter().fold(T::zero(), |acc, &x| acc + (x - m) * (x - m));
    ss / T::lit((a.len() - 1) as f64)
}

/// Index of the extreme element under `key`. Ties keep the earliest index.
fn arg_select<T: Copy, K: PartialOrd>(a: &[T], key: impl Fn(T) -> K, want: Ordering) -> usize {
    let mut best = 0;
    for i in 1..a.len() {
        if key(a[i]).partial_cmp(&key(a[best])) == Some(want) {
            best = i;
        }
    }
    best
}

pub(crate) fn argmax<T: Copy + PartialOrd>(a: &[T]) -> usize {
    arg_select(a, |x| x, Ordering::Greater)
}

pub(crate) fn argmin<T: Copy + PartialOrd>(a: &[T]) -> usize {
    arg_select(a, |x| x, Ordering::Less)
}

pub(crate) fn arglongest<T: FloatScalar>(a: &[T]) -> usize {
    arg_select(a, |x: T| x.abs(), Ordering::Greater)
}

pub(crate) fn argshortest<T: FloatScalar>(a: &[T]) -> usize {
    arg_select(a, |x: T| x.abs(), Ordering::Less)
}

/// `(min, max)` of the elements. `None` when empty.
pub(crate) fn range<T: Copy + PartialOrd>(a: &[T]) -> Option<(T, T)> {
    let first = *a.first()?;
    Some(a.iter().fold((first, first), |(lo, hi), &x| {
        (
            if x < lo { x } else { lo },
            if x > hi { x } else { hi },
        )
    }))
}

/// Scale to unit Euclidean length. The zero vector is left untouched.
pub(crate) fn renormalize<T: FloatScalar>(a: &mut [T]) {
    let len = dot(a, a).sqrt();
    if len != T::zero() {
        let inv = T::one() / len;
        a.iter_mut().for_each(|x| *x = *x * inv);
    }
}

/// Map every element through `(x - offset) / span`.
pub(crate) fn affine_rescale<T: FloatScalar>(a: &mut [T], offset: T, span: T) {
    a.iter_mut().for_each(|x| *x = (*x - offset) / span);
}

/// Rotate left by `n` places (negative `n` rotates right).
pub(crate) fn rotate_by<T>(a: &mut [T], n: isize) {
    if a.is_empty() {
        return;
    }
    let len = a.len() as isize;
    let shift = n.rem_euclid(len) as usize;
    a.rotate_left(shift);
}

/// Swap neighbouring pairs: `0<->1, 2<->3, ...`
pub(crate) fn rotate_pairs<T>(a: &mut [T]) {
    assert!(a.len() % 2 == 0, "rotate_pairs requires an even number of elements");
    for pair in a.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}

pub(crate) fn lexical_cmp<T: PartialOrd>(a: &[T], b: &[T]) -> Option<Ordering> {
    a.partial_cmp(b)
}

/// Lexicographic less-than where elements only differ if they are more than
/// `n_eps` machine epsilons apart.
pub(crate) fn lexical_lt_beyond_epsilon<T: FloatScalar>(a: &[T], b: &[T], n_eps: u32) -> bool {
    let eps = T::epsilon() * T::lit(f64::from(n_eps));
    for (&x, &y) in a.iter().zip(b.iter()) {
        if y - x > eps {
            return true;
        } else if x - y > eps {
            return false;
        }
    }
    false
}

pub(crate) fn all<T: Copy>(a: &[T], pred: impl Fn(T) -> bool) -> bool {
    a.iter().all(|&x| pred(x))
}

pub(crate) fn all_pairs<T: Copy>(a: &[T], b: &[T], pred: impl Fn(T, T) -> bool) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| pred(x, y))
}

/// Evenly spaced values from `start` to `stop` inclusive.
pub(crate) fn linspace<T: FloatScalar>(out: &mut [T], start: T, stop: T) {
    match out.len() {
        0 => {}
        1 => out[0] = start,
        n => {
            let step = (stop - start) / T::lit((n - 1) as f64);
            for (i, x) in out.iter_mut().enumerate() {
                *x = start + step * T::lit(i as f64);
            }
        }
    }
}

/// Number of elements `arange(start, stop, step)` would produce.
pub(crate) fn arange_len<T: FloatScalar>(start: T, stop: T, step: T) -> usize {
    let n = ((stop - start) / step).ceil();
    if n > T::zero() {
        n.to_usize().unwrap_or(0)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reductions() {
        let a = [1.0_f64, 2.0, 3.0, 4.0];
        assert_eq!(sum(&a), 10.0);
        assert_eq!(product(&a), 24.0);
        assert_eq!(mean(&a), 2.5);
        // (2.25 + 0.25 + 0.25 + 2.25) / 3
        assert!((variance(&a) - 5.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn degenerate_statistics() {
        let empty: [f64; 0] = [];
        assert_eq!(mean(&empty), 0.0);
        assert_eq!(variance(&[3.0]), 0.0);
    }

    #[test]
    fn arg_extrema_first_wins() {
        let a = [1.0, 5.0, -7.0, 5.0, -7.0];
        assert_eq!(argmax(&a), 1);
        assert_eq!(argmin(&a), 2);
        assert_eq!(arglongest(&a), 2);
        assert_eq!(argshortest(&a), 0);
        assert_eq!(range(&a), Some((-7.0, 5.0)));
    }

    #[test]
    fn rotations() {
        let mut a = [1, 2, 3, 4];
        rotate_by(&mut a, 1);
        assert_eq!(a, [2, 3, 4, 1]);
        rotate_by(&mut a, -2);
        assert_eq!(a, [4, 1, 2, 3]);
        rotate_pairs(&mut a);
        assert_eq!(a, [1, 4, 3, 2]);
    }

    #[test]
    fn lexical_with_tolerance() {
        let a = [1.0_f64, 2.0];
        let b = [1.0 + f64::EPSILON * 0.5, 1.0];
        assert!(!lexical_lt_beyond_epsilon(&a, &b, 1));
        assert!(lexical_lt_beyond_epsilon(&b, &a, 1));
    }

    #[test]
    fn linspace_and_arange_len() {
        let mut out = [0.0; 5];
        linspace(&mut out, 0.0, 1.0);
        assert_eq!(out, [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(arange_len(0.0, 1.0, 0.3), 4);
        assert_eq!(arange_len(1.0, 0.0, 0.3), 0);
    }
}
