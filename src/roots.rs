//! Simultaneous root finding with the Aberth-Ehrlich method.

use fastrand::Rng;
use num::Complex;

use crate::{
    util::doc_macros::{errors_construction, errors_no_converge, panic_t_from_usize},
    Error, Poly, RealScalar,
};

mod aberth_ehrlich;
mod finder;
pub use finder::{
    Diagnostics, FinderConfig, FinderState, RootFinder, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE,
};
mod initial_guess;
pub use initial_guess::{
    initial_guesses, initial_guesses_random, initial_guesses_symmetric, InitMode,
};

/// Result of the root finders, `V` is the value on success, by default the
/// roots.
pub type Result<T, V = Vec<Complex<T>>> = std::result::Result<V, Error<Vec<Complex<T>>>>;

impl<T: RealScalar> Poly<T> {
    /// A convenient way of finding roots with randomly placed initial
    /// guesses. Use a [`RootFinder`] if you need more control.
    ///
    /// The roots are sorted by ascending magnitude.
    ///
    /// ```
    /// use aberth::poly;
    /// use fastrand::Rng;
    ///
    /// let roots = poly![-1.0_f64, 0.0, 1.0].aberth_roots(1E-12, 100, &mut Rng::with_seed(0)).unwrap();
    /// assert_eq!(roots.len(), 2);
    /// assert!(roots.iter().all(|z| (z.norm() - 1.0).abs() < 1E-9));
    /// ```
    ///
    /// # Errors
    #[doc = errors_construction!()]
    #[doc = errors_no_converge!()]
    ///
    /// # Panics
    #[doc = panic_t_from_usize!()]
    pub fn aberth_roots(&self, tolerance: T, max_iter: usize, rng: &mut Rng) -> Result<T> {
        let config = FinderConfig::default()
            .with_tolerance(tolerance)
            .with_max_iter(max_iter);
        RootFinder::from_poly(self.clone(), config, rng)?.try_compute()
    }
}
