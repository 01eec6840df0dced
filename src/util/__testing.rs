//! Testing utilities, do not depend on any of these in production!

use std::ops::Range;

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, Complex};

use crate::{Poly, Poly64, RealScalar, RootFinder};

/// Uniform sample in `range`
fn sample(rng: &mut Rng, range: &Range<f64>) -> f64 {
    rng.f64().mul_add(range.end - range.start, range.start)
}

/// Endless stream of real roots (zero imaginary part)
pub struct RandStreamR64 {
    rng: Rng,
    re: Range<f64>,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, re: Range<f64>) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            re,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(Complex::new(sample(&mut self.rng, &self.re), 0.0))
    }
}

/// Endless stream of complex roots, uniform in the rectangle `re x im`
pub struct RandStreamC64Cartesian {
    rng: Rng,
    re: Range<f64>,
    im: Range<f64>,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, re: Range<f64>, im: Range<f64>) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            re,
            im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = sample(&mut self.rng, &self.re);
        let im = sample(&mut self.rng, &self.im);
        Some(Complex::new(re, im))
    }
}

/// Endless stream of complex roots in an annulus, `turns` is the angle as a
/// fraction of a full turn.
pub struct RandStreamC64Polar {
    rng: Rng,
    radius: Range<f64>,
    turns: Range<f64>,
}

impl RandStreamC64Polar {
    /// # Panics
    /// If the radius can be negative.
    #[must_use]
    pub fn new(seed: u64, radius: Range<f64>, turns: Range<f64>) -> Self {
        assert!(radius.start >= 0.0, "radius should be non-negative");
        Self {
            rng: Rng::with_seed(seed),
            radius,
            turns,
        }
    }
}

impl Iterator for RandStreamC64Polar {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let r = sample(&mut self.rng, &self.radius);
        let a = sample(&mut self.rng, &self.turns);
        Some(Complex::from_polar(r, a * std::f64::consts::TAU))
    }
}

/// Generate one test case where the roots are known and can be compared
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Poly64, Vec<Complex64>) {
    let roots = roots_stream.take(degree).collect_vec();
    let poly = Poly64::from_roots(&roots)
        .scaled(&scale_stream.next().expect("rng stream should be infinite"));
    (poly, roots)
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

/// Check that every root has a residual `|p(z)|` below `tol`
#[must_use]
pub fn check_residuals<T: RealScalar>(poly: &Poly<T>, roots: &[Complex<T>], tol: T) -> bool {
    roots.iter().all(|z| poly.eval(*z).norm() < tol)
}

/// Check that every estimate is finite, and that every estimate flagged as
/// converged has a residual below the tolerance of the finder
#[must_use]
pub fn check_flags<T: RealScalar>(finder: &RootFinder<T>) -> bool {
    let poly = finder.polynomial();
    finder
        .zeros()
        .iter()
        .zip(finder.converged_flags())
        .all(|(z, &conv)| {
            z.re.is_finite()
                && z.im.is_finite()
                && (!conv || poly.eval(*z).norm() < finder.tolerance())
        })
}

/// Check that roots are sorted by ascending magnitude
#[must_use]
pub fn check_sorted<T: RealScalar>(roots: &[Complex<T>]) -> bool {
    roots
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.norm() <= b.norm())
}

/// The `n`-th roots of unity
#[must_use]
pub fn unity_roots(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|k| Complex::from_polar(1.0, std::f64::consts::TAU * k as f64 / n as f64))
        .collect_vec()
}
