//! Macros for reducing doc comment boilerplate.

/// Documents panics from casting small integers into `T`.
macro_rules! panic_t_from_usize {
    () => {
        r"If `T` is `f32` or `f64`, this function does not panic. However, if `T` cannot represent the degree of the polynomial, this might panic under certain circumstances (casting of extreme values, usually)\n\n"
    };
}
pub(crate) use panic_t_from_usize;

/// Default explanation for [`crate::Error::NoConverge`] errors.
macro_rules! errors_no_converge {
    () => {
        r"- `NoConverge`: the root finder did not converge within the given number of iterations. The best estimates so far, sorted by magnitude, are returned with the error.\n"
    };
}
pub(crate) use errors_no_converge;

/// Default explanation for construction errors.
macro_rules! errors_construction {
    () => {
        r"- `EmptyPolynomial`: no coefficients were given.
- `ZeroLeadingCoefficient`: the highest degree coefficient is exactly zero.
- `ToleranceTooSmall`: the tolerance is below the smallest positive normal value of `T`, or NaN.
- `ZeroMaxIter`: the iteration budget is zero.
"
    };
}
pub(crate) use errors_construction;
