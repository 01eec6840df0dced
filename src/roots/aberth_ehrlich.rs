use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

/// Repulsion term of the Aberth-Ehrlich method, the sum of the reciprocal
/// distances from each point to all other points.
///
/// Needs `points.len() == out.len()`. Coincident points are not guarded
/// against, they produce infinite or NaN sums.
pub(crate) fn inv_diff_sums<T: RealScalar>(points: &[Complex<T>], out: &mut [Complex<T>]) {
    debug_assert_eq!(points.len(), out.len());

    let n = points.len();
    out.fill(Complex::zero());
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            out[i] = out[i] + Complex::<T>::one() / (points[i] - points[j]);
        }
    }
}

/// The Newton ratio `p(z) / p'(z)`.
///
/// Outside the unit disk the ratio is computed from the reversed polynomial
/// instead (see [Bini 1996](https://doi.org/10.1007/BF02207694)), because
/// `p(z) = z^n p_rev(1/z)` gives
/// `p(z) / p'(z) = 1 / (n g - g^2 p_rev'(g) / p_rev(g))` with `g = 1/z`,
/// which never evaluates anything at a large argument.
///
/// An estimate that is exactly on a root gets a zero ratio, so it stays
/// where it is.
pub(crate) fn newton_ratio<T: RealScalar>(polys: &AuxPolys<T>, z: Complex<T>) -> Complex<T> {
    if z.norm() < T::one() {
        let p = polys.poly.eval(z);
        if p.is_zero() {
            return Complex::zero();
        }
        return p / polys.deriv.eval(z);
    }

    let gamma = z.inv();
    let p_rev = polys.rev.eval(gamma);
    if p_rev.is_zero() {
        return Complex::zero();
    }
    (polys.degree * gamma - gamma * gamma * polys.rev_deriv.eval(gamma) / p_rev).inv()
}

/// Aberth-Ehrlich correction from the Newton ratio and the repulsion term of
/// one estimate. The new estimate is `z - correction`.
#[inline]
pub(crate) fn correction<T: RealScalar>(ratio: Complex<T>, inv_diff_sum: Complex<T>) -> Complex<T> {
    ratio / (Complex::<T>::one() - ratio * inv_diff_sum)
}

/// A polynomial together with the polynomials derived from it that the
/// correction step evaluates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AuxPolys<T: RealScalar> {
    pub(crate) poly: Poly<T>,
    pub(crate) deriv: Poly<T>,
    pub(crate) rev: Poly<T>,
    pub(crate) rev_deriv: Poly<T>,

    /// degree of `poly`, as a coefficient
    pub(crate) degree: Complex<T>,
}

impl<T: RealScalar> AuxPolys<T> {
    pub(crate) fn new(poly: Poly<T>) -> Self {
        let deriv = poly.diff();
        let rev = poly.reversed();
        let rev_deriv = rev.diff();
        let degree = Complex::from(
            T::from_usize(poly.degree_raw()).expect("degree too high to convert to T"),
        );
        Self {
            poly,
            deriv,
            rev,
            rev_deriv,
            degree,
        }
    }
}
