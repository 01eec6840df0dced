use std::{fmt::Display, str::FromStr};

use fastrand::Rng;
use num::{Complex, Zero};

use crate::{Error, RealScalar};

/// How the initial guesses of the root finder are generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InitMode {
    /// Every guess is drawn independently, see [`initial_guesses_random`].
    #[default]
    Random,

    /// One random guess, the others are derived from it by doubling its
    /// angle, see [`initial_guesses_symmetric`].
    Symmetric,
}

impl FromStr for InitMode {
    type Err = Error<()>;

    /// Accepts `random` (or `rand`) and `symmetric` (or `symm`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" | "rand" => Ok(Self::Random),
            "symmetric" | "symm" => Ok(Self::Symmetric),
            _ => Err(Error::UnknownInitMode(s.to_owned())),
        }
    }
}

impl Display for InitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Symmetric => write!(f, "symmetric"),
        }
    }
}

/// Uniform sample in `[0, 1)`
fn uniform<T: RealScalar>(rng: &mut Rng) -> T {
    T::from_f64(rng.f64()).unwrap_or_else(T::zero)
}

/// A random point `a + ib` with `a = r * u1` and `b = sqrt(r^2 - a^2) * u2`.
///
/// Both parts are non-negative, so the point lies in the quarter of the disk
/// of radius `r` inside the first quadrant.
fn quarter_disk_sample<T: RealScalar>(radius: T, rng: &mut Rng) -> Complex<T> {
    let a = radius * uniform::<T>(rng);
    let b = (radius * radius - a * a).sqrt() * uniform::<T>(rng);
    Complex::new(a, b)
}

/// Fill `out` with independent random guesses inside the quarter disk of
/// radius `bound`.
///
/// The guesses are not spread over the whole disk that contains the roots,
/// the repulsion between estimates in the Aberth-Ehrlich iteration pushes
/// them apart.
pub fn initial_guesses_random<T: RealScalar>(bound: T, rng: &mut Rng, out: &mut [Complex<T>]) {
    for y in out {
        *y = quarter_disk_sample(bound, rng);
    }
}

/// Fill `out` with guesses of equal magnitude. The first one is random as in
/// [`initial_guesses_random`], every following guess has twice the angle of
/// the previous one, `z_k = z_{k-1}^2 / |z_{k-1}|`.
pub fn initial_guesses_symmetric<T: RealScalar>(
    bound: T,
    rng: &mut Rng,
    out: &mut [Complex<T>],
) {
    if out.is_empty() {
        return;
    }
    let mut z = quarter_disk_sample(bound, rng);
    for y in out {
        *y = z;
        z = (z * z).unscale(z.norm());
    }
}

/// Generate `n` initial guesses for a polynomial whose roots are bounded by
/// `bound` in magnitude.
#[must_use]
pub fn initial_guesses<T: RealScalar>(
    mode: InitMode,
    bound: T,
    n: usize,
    rng: &mut Rng,
) -> Vec<Complex<T>> {
    let mut guesses = vec![Complex::zero(); n];
    match mode {
        InitMode::Random => initial_guesses_random(bound, rng, &mut guesses),
        InitMode::Symmetric => initial_guesses_symmetric(bound, rng, &mut guesses),
    }
    guesses
}
