// internal utilities for dealing with Complex annoyiances

use std::cmp::Ordering;

use itertools::Itertools;
use num::{Complex, One, Zero};

use crate::RealScalar;

/// Indices that sort `v` by ascending magnitude. NaN magnitudes compare as
/// equal, so they stay where they are relative to each other.
pub(crate) fn norm_sort_indices<T: RealScalar>(v: &[Complex<T>]) -> Vec<usize> {
    (0..v.len())
        .sorted_by(|&a, &b| {
            v[a].norm()
                .partial_cmp(&v[b].norm())
                .unwrap_or(Ordering::Equal)
        })
        .collect_vec()
}

/// Reorder `v` in-place so that `v[i]` becomes `v[perm[i]]`.
pub(crate) fn permute<E: Clone>(v: &mut [E], perm: &[usize]) {
    debug_assert_eq!(v.len(), perm.len());
    let permuted = perm.iter().map(|&i| v[i].clone()).collect_vec();
    v.clone_from_slice(&permuted);
}

pub(crate) fn c_is_finite<T: RealScalar>(z: &Complex<T>) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

/// formatting for Complex, because the implementation is not good enough for me
pub(crate) fn complex_fmt<T: std::fmt::Display + Zero + One + PartialEq>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}
