use num::{Complex, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Coefficients of the derivative, in ascending degree.
    ///
    /// The derivative of a constant is the zero polynomial, represented by a
    /// single zero coefficient.
    ///
    /// # Panics
    /// If the degree does not fit in `T`, which cannot happen for `f32` or
    /// `f64` with any polynomial that fits in memory.
    #[must_use]
    pub fn derivative_coeffs(&self) -> Vec<Complex<T>> {
        // derivative of constant is zero
        if self.degree_raw() == 0 {
            return vec![Complex::zero()];
        }

        self.0
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(i, c)| c.scale(T::from_usize(i).expect("degree too high to convert to T")))
            .collect()
    }

    /// Derivative
    #[must_use]
    pub fn diff(&self) -> Self {
        Self(self.derivative_coeffs())
    }
}
