//! Approximate all roots of a polynomial with complex coefficients at once,
//! using the [Aberth-Ehrlich method](https://en.wikipedia.org/wiki/Aberth_method).
//!
//! ```
//! use aberth::{poly, FinderConfig, RootFinder};
//! use fastrand::Rng;
//!
//! // x^4 - 1
//! let p = poly![-1.0_f64, 0.0, 0.0, 0.0, 1.0];
//! let mut rng = Rng::with_seed(8_008_335);
//! let mut finder = RootFinder::from_poly(p, FinderConfig::default(), &mut rng).unwrap();
//! assert!(finder.compute(false));
//! assert_eq!(finder.zeros().len(), 4);
//! assert!(finder.zeros().iter().all(|z| (z.norm() - 1.0).abs() < 1E-9));
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub use num;

/// Shorthand for creating a complex number, the imaginary part defaults to
/// zero.
///
/// ```
/// use aberth::complex;
/// use num::Complex;
///
/// assert_eq!(complex!(1.0), Complex::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, 2.0), Complex::new(1.0, 2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
    ($re:expr) => {
        $crate::num::Complex::new($re, $crate::num::Zero::zero())
    };
}

/// Shorthand for creating a polynomial from coefficients of ascending degree.
///
/// Takes either real coefficients or `(re, im)` pairs.
///
/// ```
/// use aberth::{complex, poly, Poly};
///
/// let p = poly![(1.0, 2.0), (3.0, 0.0)];
/// assert_eq!(p, Poly::new(&[complex!(1.0, 2.0), complex!(3.0)]));
/// assert_eq!(poly![1.0, 2.0], Poly::from_real_slice(&[1.0, 2.0]));
/// ```
#[macro_export]
macro_rules! poly {
    ($(($re:expr, $im:expr)),+ $(,)?) => {
        $crate::Poly::new(&[$($crate::complex!($re, $im)),+])
    };
    ($($re:expr),+ $(,)?) => {
        $crate::Poly::from_real_slice(&[$($re),+])
    };
}

mod error;
pub use error::Error;

mod poly;
pub use poly::Poly;

pub mod roots;
pub use roots::{Diagnostics, FinderConfig, FinderState, InitMode, RootFinder};

mod scalar;
pub use scalar::{RealScalar, SafeConstants};

mod util;
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
pub type RootFinder32 = RootFinder<f32>;
pub type RootFinder64 = RootFinder<f64>;
