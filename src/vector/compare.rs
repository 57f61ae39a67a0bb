//! Comparisons for [`Vector`].
//!
//! `Vector` deliberately has no `PartialOrd`. The `all_*` family answers
//! "does every element satisfy the relation", which is not an order: neither
//! `a.all_lt_vec(&b)` nor `b.all_lt_vec(&a)` need hold for distinct vectors.
//! For sort keys use the `lexical_*` methods; to compare magnitudes use the
//! `length_*` methods.

use core::cmp::Ordering;

use super::Vector;
use crate::elements;
use crate::traits::{FloatScalar, Scalar};

impl<T: Scalar + PartialOrd, const N: usize> Vector<T, N> {
    /// True if every element is `< rhs`.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::from_array([1, 2, 3]);
    /// assert!(v.all_lt(4));
    /// assert!(!v.all_lt(3));
    /// ```
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

    /// True if every element is `<` the matching element of `rhs`.
    pub fn all_lt_vec(&self, rhs: &Self) -> bool {
        elements::all_pairs(&self.data, &rhs.data, |a, b| a < b)
    }

    pub fn all_le_vec(&self, rhs: &Self) -> bool {
        elements::all_pairs(&self.data, &rhs.data, |a, b| a <= b)
    }

    pub fn all_gt_vec(&self, rhs: &Self) -> bool {
        elements::all_pairs(&self.data, &rhs.data, |a, b| a > b)
    }

    pub fn all_ge_vec(&self, rhs: &Self) -> bool {
        elements::all_pairs(&self.data, &rhs.data, |a, b| a >= b)
    }

    /// Lexicographic ordering, first element most significant.
    ///
    /// `None` if a NaN is reached before the vectors differ.
    pub fn lexical_cmp(&self, rhs: &Self) -> Option<Ordering> {
        elements::lexical_cmp(&self.data, &rhs.data)
    }

    /// Lexicographic less-than.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let a = Vector::from_array([1, 9]);
    /// let b = Vector::from_array([2, 0]);
    /// assert!(a.lexical_lt(&b));
    /// assert!(!a.all_lt_vec(&b));
    /// ```
    pub fn lexical_lt(&self, rhs: &Self) -> bool {
        self.lexical_cmp(rhs) == Some(Ordering::Less)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Lexicographic less-than that only treats two elements as different
    /// when they are more than `n_eps` machine epsilons apart.
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
