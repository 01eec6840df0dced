use std::fmt::Display;

use num::{Complex, Zero};

use crate::{util::complex::complex_fmt, RealScalar};

mod base;
mod calculus;
mod conversions;
mod special_funcs;

/// Polynomial with complex coefficients, stored from the least significant
/// term upwards.
///
/// Coefficients are never trimmed, so the degree is always one less than the
/// number of coefficients. Keeping the leading coefficient non-zero is up to
/// the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from complex coefficients of ascending degree.
    ///
    /// # Panics
    /// If `coeffs` is empty, a polynomial needs at least one coefficient.
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        assert!(
            !coeffs.is_empty(),
            "a polynomial needs at least one coefficient"
        );
        Self(coeffs.to_owned())
    }

    /// The degree of the polynomial, i.e. the number of coefficients minus one.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree_raw()
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use aberth::Poly;
    /// use num::Complex;
    ///
    /// let p = Poly::new(&[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]);
    /// let x = Complex::new(1.0, 0.0);
    /// assert_eq!(p.eval(x), Complex::new(6.0, 0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        // Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
        let mut coeffs = self.0.iter().rev();
        let mut eval = coeffs.next().copied().unwrap_or_else(Complex::zero);
        for c in coeffs {
            eval = eval * x + *c;
        }
        eval
    }

    /// Evaluate at many points at once, `out` must be as long as `points`.
    pub fn eval_multiple(&self, points: &[Complex<T>], out: &mut [Complex<T>]) {
        debug_assert_eq!(points.len(), out.len());
        for (y, x) in out.iter_mut().zip(points) {
            *y = self.eval(*x);
        }
    }
}

impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter().enumerate();
        if let Some((_, c)) = iter.next() {
            write!(f, "{}", complex_fmt(c))?;
        } else {
            return Ok(());
        }
        for (i, c) in iter {
            write!(f, " + {}*x^{}", complex_fmt(c), i)?;
        }
        Ok(())
    }
}
