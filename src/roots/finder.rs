use std::fmt::Display;

use fastrand::Rng;
use num::{Complex, Zero};

use crate::{
    roots::{self, aberth_ehrlich::AuxPolys, initial_guess::initial_guesses, InitMode},
    util::{
        complex::{c_is_finite, norm_sort_indices, permute},
        doc_macros::{errors_construction, errors_no_converge, panic_t_from_usize},
    },
    Error, Poly, RealScalar,
};

use super::aberth_ehrlich::{correction, inv_diff_sums, newton_ratio};

/// Default tolerance on the residual `|p(z)|` of each root.
pub const DEFAULT_TOLERANCE: f64 = 1E-9;

/// Default iteration budget.
pub const DEFAULT_MAX_ITER: usize = 200;

/// Settings of a [`RootFinder`].
///
/// ```
/// use aberth::{FinderConfig, InitMode};
///
/// let config = FinderConfig::<f64>::default()
///     .with_tolerance(1E-12)
///     .with_max_iter(1000)
///     .with_init_mode(InitMode::Symmetric);
/// assert_eq!(config.max_iter, 1000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinderConfig<T> {
    /// A root counts as converged once `|p(z)|` drops below this.
    pub tolerance: T,

    /// Maximum number of iterations, each one updates every root once.
    pub max_iter: usize,

    pub init_mode: InitMode,
}

impl<T: RealScalar> Default for FinderConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from_f64(DEFAULT_TOLERANCE).unwrap_or_else(T::tiny_safe),
            max_iter: DEFAULT_MAX_ITER,
            init_mode: InitMode::default(),
        }
    }
}

impl<T> FinderConfig<T> {
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    #[must_use]
    pub fn with_init_mode(mut self, init_mode: InitMode) -> Self {
        self.init_mode = init_mode;
        self
    }
}

/// Where a [`RootFinder`] is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FinderState {
    /// Initial guesses are generated, [`RootFinder::compute`] has not
    /// finished yet.
    Initialized,

    /// Every root is within tolerance.
    Converged,

    /// The iteration budget ran out before every root converged.
    BudgetExhausted,
}

/// Summary of the current estimates of a [`RootFinder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagnostics<T> {
    pub iterations: usize,

    /// Index of the estimate with the largest residual, `0` if all residuals
    /// are zero or there are no estimates.
    pub worst_index: usize,

    /// The largest residual `|p(z)|` among the estimates.
    pub worst_residual: T,
}

impl<T: Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Iterations performed = {}", self.iterations)?;
        writeln!(f, "Index of max error   = {}", self.worst_index)?;
        write!(f, "Max error            = {:.15}", self.worst_residual)
    }
}

/// Finds all roots of a polynomial at once with the Aberth-Ehrlich method.
///
/// All estimates are updated in every iteration with a Newton step, corrected
/// by a repulsion term that keeps estimates from collapsing onto the same
/// root. A root counts as converged once its residual `|p(z)|` is below the
/// tolerance, and stays converged from then on.
///
/// Cloning makes an independent copy, including the iteration state.
///
/// ```
/// use aberth::{poly, RootFinder};
/// use fastrand::Rng;
///
/// // (x - 1)(x - 2)(x - 3)
/// let p = poly![-6.0_f64, 11.0, -6.0, 1.0];
/// let mut finder = RootFinder::from_poly(p, Default::default(), &mut Rng::with_seed(1)).unwrap();
/// assert!(finder.compute(false));
/// let zeros = finder.zeros();
/// assert!((zeros[0].re - 1.0).abs() < 1E-6);
/// assert!((zeros[2].re - 3.0).abs() < 1E-6);
/// ```
#[derive(Clone, Debug)]
pub struct RootFinder<T: RealScalar> {
    polys: AuxPolys<T>,

    /// current estimates, not necessarily converged
    zeros: Vec<Complex<T>>,

    /// which estimates are within tolerance
    conv: Vec<bool>,

    /// repulsion term of each estimate
    inv_diff_sum: Vec<Complex<T>>,

    iters: usize,
    all_conv: bool,
    config: FinderConfig<T>,
}

impl<T: RealScalar> RootFinder<T> {
    /// Set up a root finder with the default [`FinderConfig`].
    ///
    /// # Errors
    #[doc = errors_construction!()]
    ///
    /// # Panics
    #[doc = panic_t_from_usize!()]
    pub fn new(coeffs: &[Complex<T>], rng: &mut Rng) -> roots::Result<T, Self> {
        Self::with_config(coeffs, FinderConfig::default(), rng)
    }

    /// Set up a root finder for the polynomial with the given coefficients of
    /// ascending degree.
    ///
    /// The initial guesses are drawn from `rng`, so equally seeded generators
    /// give identical results.
    ///
    /// # Errors
    #[doc = errors_construction!()]
    ///
    /// # Panics
    #[doc = panic_t_from_usize!()]
    pub fn with_config(
        coeffs: &[Complex<T>],
        config: FinderConfig<T>,
        rng: &mut Rng,
    ) -> roots::Result<T, Self> {
        if coeffs.is_empty() {
            return Err(Error::EmptyPolynomial);
        }
        Self::from_poly(Poly::new(coeffs), config, rng)
    }

    /// Same as [`RootFinder::with_config`], but takes ownership of an
    /// existing polynomial.
    ///
    /// # Errors
    #[doc = errors_construction!()]
    ///
    /// # Panics
    #[doc = panic_t_from_usize!()]
    pub fn from_poly(poly: Poly<T>, config: FinderConfig<T>, rng: &mut Rng) -> roots::Result<T, Self> {
        if poly.leading().is_zero() {
            return Err(Error::ZeroLeadingCoefficient);
        }
        if config.tolerance.is_nan() || config.tolerance < T::tiny_safe() {
            return Err(Error::ToleranceTooSmall);
        }
        if config.max_iter == 0 {
            return Err(Error::ZeroMaxIter);
        }

        let n = poly.degree_raw();
        let bound = poly.cauchy_bound();
        log::debug!(
            "{{degree: {n}, bound: {bound}, mode: {}, tolerance: {}}}",
            config.init_mode,
            config.tolerance
        );

        Ok(Self {
            polys: AuxPolys::new(poly),
            zeros: initial_guesses(config.init_mode, bound, n, rng),
            conv: vec![false; n],
            inv_diff_sum: vec![Complex::zero(); n],
            iters: 0,
            all_conv: false,
            config,
        })
    }

    /// Run the Aberth-Ehrlich iteration until every root has converged or the
    /// iteration budget is used up, then sort the roots by magnitude.
    ///
    /// Returns `true` if every root converged. Running out of iterations is
    /// logged as a warning. With `verbose`, [`RootFinder::diagnostics`] is
    /// logged at `info` level.
    ///
    /// Calling this again after it returned does not iterate any further.
    pub fn compute(&mut self, verbose: bool) -> bool {
        while self.iters < self.config.max_iter && !self.all_conv {
            inv_diff_sums(&self.zeros, &mut self.inv_diff_sum);
            self.newton_step();
            self.all_conv = self.conv.iter().all(|&c| c);
            self.iters += 1;
            log::trace!("{:?}", self.zeros);
        }

        self.sort_zeros();

        if !self.all_conv {
            log::warn!(
                "failed to converge all zeros after maximum ({}) iterations",
                self.config.max_iter
            );
            if !self.zeros.iter().all(c_is_finite) {
                log::warn!("some estimates are not finite, two or more estimates may have collided");
            }
        }
        log::debug!(
            "{{iterations: {}, converged: {}}}",
            self.iters,
            self.conv.iter().filter(|&&c| c).count()
        );

        if verbose {
            log::info!("{}", self.diagnostics());
        }

        self.all_conv
    }

    /// Like [`RootFinder::compute`], but returns the roots, and treats running
    /// out of iterations as an error.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn try_compute(&mut self) -> roots::Result<T> {
        if self.compute(false) {
            Ok(self.zeros.clone())
        } else {
            Err(Error::NoConverge(self.zeros.clone()))
        }
    }

    /// One Aberth-Ehrlich update of every estimate, using the repulsion terms
    /// computed at the start of the iteration.
    fn newton_step(&mut self) {
        for ((z, conv), inv_diff_sum) in self
            .zeros
            .iter_mut()
            .zip(self.conv.iter_mut())
            .zip(&self.inv_diff_sum)
        {
            let ratio = newton_ratio(&self.polys, *z);
            *z = *z - correction(ratio, *inv_diff_sum);

            // once converged, always converged
            if !*conv && self.polys.poly.eval(*z).norm() < self.config.tolerance {
                *conv = true;
            }
        }
    }

    /// Sort estimates by ascending magnitude, keeping the per-root state
    /// aligned with them.
    fn sort_zeros(&mut self) {
        let perm = norm_sort_indices(&self.zeros);
        permute(&mut self.zeros, &perm);
        permute(&mut self.conv, &perm);
        permute(&mut self.inv_diff_sum, &perm);
    }

    /// Iteration count, the largest residual and where it occurs.
    #[must_use]
    pub fn diagnostics(&self) -> Diagnostics<T> {
        let mut worst_index = 0;
        let mut worst_residual = T::zero();
        for (i, z) in self.zeros.iter().enumerate() {
            let residual = self.polys.poly.eval(*z).norm();
            if worst_residual < residual {
                worst_residual = residual;
                worst_index = i;
            }
        }
        Diagnostics {
            iterations: self.iters,
            worst_index,
            worst_residual,
        }
    }

    /// The current estimates. After [`RootFinder::compute`] these are sorted
    /// by ascending magnitude.
    #[must_use]
    pub fn zeros(&self) -> &[Complex<T>] {
        &self.zeros
    }

    /// Whether each estimate in [`RootFinder::zeros`] has converged.
    #[must_use]
    pub fn converged_flags(&self) -> &[bool] {
        &self.conv
    }

    #[must_use]
    pub const fn is_converged(&self) -> bool {
        self.all_conv
    }

    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iters
    }

    #[must_use]
    pub fn state(&self) -> FinderState {
        if self.all_conv {
            FinderState::Converged
        } else if self.iters >= self.config.max_iter {
            FinderState::BudgetExhausted
        } else {
            FinderState::Initialized
        }
    }

    /// The polynomial whose roots are being found
    #[must_use]
    pub const fn polynomial(&self) -> &Poly<T> {
        &self.polys.poly
    }

    #[must_use]
    pub const fn derivative(&self) -> &Poly<T> {
        &self.polys.deriv
    }

    /// The polynomial with reversed coefficients
    #[must_use]
    pub const fn reversed(&self) -> &Poly<T> {
        &self.polys.rev
    }

    /// The derivative of [`RootFinder::reversed`]
    #[must_use]
    pub const fn reversed_derivative(&self) -> &Poly<T> {
        &self.polys.rev_deriv
    }

    #[must_use]
    pub const fn config(&self) -> &FinderConfig<T> {
        &self.config
    }

    #[must_use]
    pub const fn tolerance(&self) -> T {
        self.config.tolerance
    }

    #[must_use]
    pub const fn max_iter(&self) -> usize {
        self.config.max_iter
    }

    #[must_use]
    pub const fn init_mode(&self) -> InitMode {
        self.config.init_mode
    }
}

#[cfg(test)]
mod test {
    use fastrand::Rng;

    use super::{FinderConfig, FinderState, RootFinder};
    use crate::{
        util::__testing::{check_flags, check_residuals, check_roots, check_sorted},
        Error, InitMode, Poly64,
    };

    fn finder(p: Poly64, seed: u64) -> RootFinder<f64> {
        RootFinder::from_poly(p, FinderConfig::default(), &mut Rng::with_seed(seed)).unwrap()
    }

    #[test]
    fn construction() {
        let f = finder(poly![1.0, 2.0, 3.0], 1);
        assert_eq!(f.zeros().len(), 2);
        assert_eq!(f.converged_flags(), &[false, false]);
        assert_eq!(f.iterations(), 0);
        assert!(!f.is_converged());
        assert_eq!(f.state(), FinderState::Initialized);
        assert_eq!(f.derivative(), &poly![2.0, 6.0]);
        assert_eq!(f.reversed(), &poly![3.0, 2.0, 1.0]);
        assert_eq!(f.reversed_derivative(), &poly![2.0, 2.0]);
        assert_eq!(f.config(), &FinderConfig::default());
        assert_eq!(f.tolerance(), 1E-9);
        assert_eq!(f.max_iter(), 200);
        assert_eq!(f.init_mode(), InitMode::Random);
    }

    #[test]
    fn defaults() {
        let config = FinderConfig::<f64>::default();
        assert_eq!(config.tolerance, 1E-9);
        assert_eq!(config.max_iter, 200);
        assert_eq!(config.init_mode, InitMode::Random);
    }

    #[test]
    fn tolerance_too_small() {
        let config = FinderConfig::default().with_tolerance(f64::MIN_POSITIVE / 2.0);
        let res = RootFinder::with_config(&[complex!(1.0), complex!(1.0)], config, &mut Rng::new());
        assert_eq!(res.unwrap_err(), Error::ToleranceTooSmall);

        let config = FinderConfig::default().with_tolerance(f64::NAN);
        let res = RootFinder::with_config(&[complex!(1.0), complex!(1.0)], config, &mut Rng::new());
        assert_eq!(res.unwrap_err(), Error::ToleranceTooSmall);
    }

    #[test]
    fn smallest_tolerance_is_accepted() {
        let config = FinderConfig::default().with_tolerance(f64::MIN_POSITIVE);
        let res = RootFinder::with_config(&[complex!(1.0), complex!(1.0)], config, &mut Rng::new());
        assert!(res.is_ok());
    }

    /// the floor is the smallest positive normal value of `T` itself
    #[test]
    fn f32_tolerance_floor() {
        let config = FinderConfig::<f32>::default().with_tolerance(1E-40);
        let res = RootFinder::with_config(&[complex!(1.0f32), complex!(1.0)], config, &mut Rng::new());
        assert_eq!(res.unwrap_err(), Error::ToleranceTooSmall);

        let config = FinderConfig::<f32>::default().with_tolerance(f32::MIN_POSITIVE);
        let res = RootFinder::with_config(&[complex!(1.0f32), complex!(1.0)], config, &mut Rng::new());
        assert!(res.is_ok());
    }

    #[test]
    fn zero_max_iter() {
        let config = FinderConfig::default().with_max_iter(0);
        let res = RootFinder::with_config(&[complex!(1.0), complex!(1.0)], config, &mut Rng::new());
        assert_eq!(res.unwrap_err(), Error::ZeroMaxIter);
    }

    #[test]
    fn degenerate_polynomials() {
        let res = RootFinder::<f64>::new(&[], &mut Rng::new());
        assert_eq!(res.unwrap_err(), Error::EmptyPolynomial);
        let res = RootFinder::new(&[complex!(1.0), complex!(0.0)], &mut Rng::new());
        assert_eq!(res.unwrap_err(), Error::ZeroLeadingCoefficient);
    }

    #[test]
    fn constant() {
        let mut f = finder(poly![(2.0, 1.0)], 1);
        assert!(f.zeros().is_empty());
        assert!(f.compute(false));
        assert_eq!(f.iterations(), 1);
        assert_eq!(f.state(), FinderState::Converged);
    }

    #[test]
    fn linear() {
        let mut f = finder(poly![-2.0, 4.0], 5);
        assert!(f.compute(false));
        assert!((f.zeros()[0] - complex!(0.5)).norm() < 1E-12);
    }

    #[test]
    fn degree_3() {
        let roots_expected = vec![complex!(1.0), complex!(2.0), complex!(3.0)];
        let p = crate::Poly::from_roots(&roots_expected);
        let mut f = finder(p.clone(), 3);
        assert!(f.compute(false));
        assert!(check_roots(f.zeros().to_vec(), roots_expected, 1E-8));
        assert!(check_residuals(&p, f.zeros(), 1E-9));
        assert!(check_sorted(f.zeros()));
    }

    #[test]
    fn degree_3_complex() {
        let roots_expected = vec![complex!(1.0), complex!(0.0, 1.0), complex!(0.0, -1.0)];
        let p = crate::Poly::from_roots(&roots_expected);
        let mut f = finder(p, 4);
        assert!(f.compute(true));
        assert!(check_roots(f.zeros().to_vec(), roots_expected, 1E-8));
    }

    #[test]
    fn symmetric_mode() {
        let roots_expected = vec![complex!(1.0), complex!(2.0), complex!(3.0)];
        let p = crate::Poly::from_roots(&roots_expected);
        let config = FinderConfig::default()
            .with_init_mode(InitMode::Symmetric)
            .with_max_iter(1000);
        let mut f = RootFinder::from_poly(p, config, &mut Rng::with_seed(6)).unwrap();
        assert!(f.compute(false));
        assert!(check_roots(f.zeros().to_vec(), roots_expected, 1E-8));
    }

    #[test]
    fn budget_exhausted() {
        let config = FinderConfig::default().with_max_iter(1);
        let p = Poly64::easy(30).unwrap();
        let mut f = RootFinder::from_poly(p, config, &mut Rng::with_seed(7)).unwrap();
        assert!(!f.compute(false));
        assert_eq!(f.iterations(), 1);
        assert_eq!(f.state(), FinderState::BudgetExhausted);
        assert!(check_sorted(f.zeros()));

        // nothing left to do
        assert!(!f.compute(false));
        assert_eq!(f.iterations(), 1);

        match f.try_compute() {
            Err(Error::NoConverge(zeros)) => assert_eq!(zeros, f.zeros()),
            other => panic!("expected NoConverge, got {other:?}"),
        }
    }

    #[test]
    fn all_flags_set_when_converged() {
        let p = Poly64::easy(30).unwrap();
        let mut f = finder(p.clone(), 8);
        assert!(f.compute(false));
        assert!(f.converged_flags().iter().all(|&c| c));
        assert!(check_residuals(&p, f.zeros(), 1E-9));
    }

    /// estimates that land exactly on a root must not turn into NaN and
    /// spread to the other estimates
    #[test]
    fn exact_roots_stay_finite() {
        for seed in 0..200 {
            let mut f = finder(Poly64::unity_roots(8), seed);
            assert!(f.compute(false), "seed {seed}: {:?}", f.zeros());
            assert!(check_flags(&f), "seed {seed}: {:?}", f.zeros());
        }
    }

    #[test]
    fn kam1_stays_finite() {
        for seed in 0..50 {
            let mut f = finder(Poly64::kam1(1E-6 / 60.0).unwrap(), seed);
            assert!(f.compute(false), "seed {seed}: {:?}", f.zeros());
            assert!(check_flags(&f), "seed {seed}: {:?}", f.zeros());
        }
    }

    #[test]
    fn idempotent_reads() {
        let mut f = finder(Poly64::unity_roots(5), 9);
        assert!(f.compute(false));
        let first = f.zeros().to_vec();
        let second = f.zeros().to_vec();
        assert_eq!(first, second);
        assert!(f.compute(false));
        assert_eq!(f.zeros(), first.as_slice());
    }

    #[test]
    fn clone_is_independent() {
        let original = finder(Poly64::unity_roots(4), 10);
        let before = original.zeros().to_vec();
        let mut copy = original.clone();
        assert!(copy.compute(false));
        assert_eq!(original.zeros(), before.as_slice());
        assert_eq!(original.iterations(), 0);
        assert!(!original.is_converged());
        assert_ne!(copy.zeros(), before.as_slice());
        assert_eq!(copy.polynomial(), original.polynomial());
    }

    #[test]
    fn deterministic_with_seed() {
        let mut a = finder(Poly64::truncated_exp(8).unwrap(), 11);
        let mut b = finder(Poly64::truncated_exp(8).unwrap(), 11);
        assert_eq!(a.zeros(), b.zeros());
        a.compute(false);
        b.compute(false);
        assert_eq!(a.zeros(), b.zeros());
        assert_eq!(a.iterations(), b.iterations());
    }

    #[test]
    fn diagnostics() {
        let mut f = finder(poly![-1.0, 0.0, 1.0], 12);
        let d = f.diagnostics();
        assert_eq!(d.iterations, 0);
        assert!(d.worst_residual > 0.0);
        assert!(f.compute(false));
        let d = f.diagnostics();
        assert_eq!(d.iterations, f.iterations());
        assert!(d.worst_index < 2);
        assert!(d.worst_residual < 1E-9);
        assert!(d.to_string().starts_with("Iterations performed = "));
    }

    #[test]
    fn diagnostics_without_zeros() {
        let f = finder(poly![3.0], 13);
        let d = f.diagnostics();
        assert_eq!(d.worst_index, 0);
        assert_eq!(d.worst_residual, 0.0);
    }

    #[test]
    fn f32_roots() {
        let p = crate::Poly::<f32>::from_roots(&[complex!(0.5f32), complex!(-0.25f32, 0.5f32)]);
        let config = FinderConfig::default().with_tolerance(1E-5);
        let mut f = RootFinder::from_poly(p, config, &mut Rng::with_seed(14)).unwrap();
        assert!(f.compute(false));
        assert_eq!(f.zeros().len(), 2);
        assert!(f.zeros().iter().all(|z| z.norm() < 1.0));
    }
}
