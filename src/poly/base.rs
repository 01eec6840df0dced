use itertools::Itertools;
use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    /// The coefficient of the highest degree term
    #[must_use]
    pub fn leading(&self) -> Complex<T> {
        self.0[self.len_raw() - 1]
    }

    /// The polynomial with its coefficients in reverse order.
    ///
    /// For a polynomial `p` of degree `n`, the reversal satisfies
    /// `p(z) = z^n * p_rev(1/z)`, which allows evaluating `p` near infinity
    /// without overflowing.
    ///
    /// ```
    /// use aberth::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].reversed(), poly![3.0, 2.0, 1.0]);
    /// ```
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().copied().rev().collect_vec())
    }

    /// [Cauchy's bound](https://en.wikipedia.org/wiki/Geometrical_properties_of_polynomial_roots)
    /// on the magnitude of the roots, `1 + max |a_i| / |a_n|`.
    ///
    /// The maximum includes the leading coefficient itself, so the bound is
    /// never smaller than 2. It is infinite or NaN if the leading coefficient
    /// is zero.
    #[must_use]
    pub fn cauchy_bound(&self) -> T {
        let lead = self.leading().norm();
        let best = self
            .0
            .iter()
            .map(|c| c.norm() / lead)
            .fold(T::zero(), |best, curr| if best < curr { curr } else { best });
        best + T::one()
    }

    /// Monic polynomial from its complex roots.
    ///
    /// # Examples
    /// ```
    /// use aberth::{poly, Poly};
    /// use num::Complex;
    /// use num::{Zero, One};
    ///
    /// let p = Poly::from_roots(&[Complex::new(-1.0, 0.0), Complex::zero(), Complex::one()]);
    /// assert_eq!(p, poly![0.0, -1.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex<T>]) -> Self {
        let mut coeffs = Vec::with_capacity(roots.len() + 1);
        coeffs.push(Complex::<T>::one());
        for r in roots {
            // multiply in-place by (x - r)
            coeffs.push(Complex::zero());
            for i in (0..coeffs.len()).rev() {
                let lower = if i == 0 { Complex::zero() } else { coeffs[i - 1] };
                coeffs[i] = lower - coeffs[i] * r;
            }
        }
        Self(coeffs)
    }

    /// Multiply every coefficient by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: &Complex<T>) -> Self {
        for c in &mut self.0 {
            *c = *c * factor;
        }
        self
    }
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    #[test]
    fn reversed() {
        let p = poly![(1.0, 1.0), (0.0, 0.0), (3.0, -2.0)];
        assert_eq!(p.reversed(), poly![(3.0, -2.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(p.reversed().reversed(), p);
    }

    #[test]
    fn reversal_identity() {
        // p(z) = z^n * p_rev(1/z)
        let p = poly![(1.0, 2.0), (-3.0, 0.5), (0.25, 0.0), (2.0, -1.0)];
        let z = complex!(1.5, -0.75);
        let lhs = p.eval(z);
        let rhs = z.powu(3) * p.reversed().eval(z.inv());
        assert!((lhs - rhs).norm() < 1E-12);
    }

    #[test]
    fn cauchy_bound() {
        // max(|-6|, |11|, |-6|, |1|) / 1 + 1
        let p = poly![-6.0, 11.0, -6.0, 1.0];
        assert_eq!(p.cauchy_bound(), 12.0);

        // leading coefficient dominates
        let p = poly![1.0, 2.0, 4.0];
        assert_eq!(p.cauchy_bound(), 2.0);
    }

    #[test]
    fn cauchy_bound_contains_roots() {
        let roots = [complex!(3.0, 4.0), complex!(-0.5), complex!(0.0, -2.0)];
        let p = crate::Poly::from_roots(&roots);
        let bound = p.cauchy_bound();
        assert!(roots.iter().all(|r: &Complex64| r.norm() <= bound));
    }

    #[test]
    fn from_roots() {
        // (x - 1)(x - 2)(x - 3)
        let p = crate::Poly::from_roots(&[complex!(1.0), complex!(2.0), complex!(3.0)]);
        assert_eq!(p, poly![-6.0, 11.0, -6.0, 1.0]);
    }

    #[test]
    fn from_no_roots() {
        let p = crate::Poly64::from_roots(&[]);
        assert_eq!(p, poly![1.0]);
    }

    #[test]
    fn leading() {
        let p = poly![(1.0, 0.0), (0.0, 3.0)];
        assert_eq!(p.leading(), complex!(0.0, 3.0));
    }
}
