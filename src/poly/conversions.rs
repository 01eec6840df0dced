use itertools::Itertools;
use num::Complex;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The coefficients, from the least significant
    #[must_use]
    pub fn coefficients(&self) -> &[Complex<T>] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        self.0.clone()
    }

    /// The same as `Poly::new()`
    #[must_use]
    pub fn from_complex_slice(value: &[Complex<T>]) -> Self {
        Self::new(value)
    }

    #[must_use]
    pub fn from_real_slice(value: &[T]) -> Self {
        Self::new(&value.iter().copied().map(Complex::from).collect_vec())
    }
}

impl<T: RealScalar> From<&[Complex<T>]> for Poly<T> {
    fn from(value: &[Complex<T>]) -> Self {
        Self::from_complex_slice(value)
    }
}

impl<T: RealScalar> From<Vec<Complex<T>>> for Poly<T> {
    fn from(value: Vec<Complex<T>>) -> Self {
        Self::new(&value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<Complex<T>> {
    fn from(value: Poly<T>) -> Self {
        value.0
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type Item = &'a Complex<T>;
    type IntoIter = std::slice::Iter<'a, Complex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
