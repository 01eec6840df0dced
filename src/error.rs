use thiserror::Error;

/// The top-level error type for this crate.
///
/// `T` is the payload of [`Error::NoConverge`], usually the best estimates
/// found before the iteration budget ran out.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error<T> {
    #[error("tolerance must be at least the smallest positive normal value")]
    ToleranceTooSmall,

    #[error("the iteration budget must be at least one")]
    ZeroMaxIter,

    #[error("unknown initial guess mode `{0}`, expected `random` or `symmetric`")]
    UnknownInitMode(String),

    #[error("a polynomial needs at least one coefficient")]
    EmptyPolynomial,

    #[error("the leading coefficient is zero")]
    ZeroLeadingCoefficient,

    #[error("root finder did not converge within the given number of iterations")]
    NoConverge(T),
}
