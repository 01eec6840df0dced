//! Families of test polynomials, taken from the
//! [MPSolve](https://numpi.dm.unipi.it/mpsolve-2.2/mpsolve.pdf) test suite.

use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The "easy" polynomial of degree `n`, `1 + 2x + 3x^2 + ... + (n+1)x^n`.
    ///
    /// Returns `None` for degrees above 100.
    ///
    /// ```
    /// use aberth::{poly, Poly64};
    ///
    /// assert_eq!(Poly64::easy(3).unwrap(), poly![1.0, 2.0, 3.0, 4.0]);
    /// assert!(Poly64::easy(101).is_none());
    /// ```
    #[must_use]
    pub fn easy(n: usize) -> Option<Self> {
        if n > 100 {
            return None;
        }
        let coeffs: Option<Vec<_>> = (1..=n + 1)
            .map(|k| T::from_usize(k).map(Complex::from))
            .collect();
        Some(Self(coeffs?))
    }

    /// The exponential series truncated at degree `n`, the coefficient of
    /// `x^k` is `1/k!`.
    ///
    /// Returns `None` for degrees above 10.
    #[must_use]
    pub fn truncated_exp(n: usize) -> Option<Self> {
        if n > 10 {
            return None;
        }
        let mut factorial = T::one();
        let mut coeffs = Vec::with_capacity(n + 1);
        for k in 0..=n {
            if k >= 2 {
                factorial = factorial * T::from_usize(k)?;
            }
            coeffs.push(Complex::from(factorial.recip()));
        }
        Some(Self(coeffs))
    }

    /// The degree 7 "kam1" polynomial, `9c^4 + 6c^2 x + x^2 + ic x^7`.
    ///
    /// It has a double root very close to zero and five roots of magnitude
    /// around `c^(-1/5)`. Returns `None` unless `1e-20 < c < 1e-6`.
    #[must_use]
    pub fn kam1(c: T) -> Option<Self> {
        let low = T::from_f64(1E-20)?;
        let high = T::from_f64(1E-6)?;
        if !(low < c && c < high) {
            return None;
        }
        let mut coeffs = vec![Complex::<T>::zero(); 8];
        coeffs[0] = Complex::from(T::from_u8(9)? * c.powi(4));
        coeffs[1] = Complex::from(T::from_u8(6)? * c.powi(2));
        coeffs[2] = Complex::one();
        coeffs[7] = Complex::new(T::zero(), c);
        Some(Self(coeffs))
    }

    /// `x^n - 1`, whose roots are the `n`-th roots of unity.
    ///
    /// ```
    /// use aberth::{poly, Poly64};
    ///
    /// assert_eq!(Poly64::unity_roots(3), poly![-1.0, 0.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn unity_roots(n: usize) -> Self {
        let mut coeffs = vec![Complex::<T>::zero(); n + 1];
        coeffs[n] = Complex::one();
        coeffs[0] = coeffs[0] - Complex::one();
        Self(coeffs)
    }
}
