//! Sweeps the MPSolve test families and fails if any polynomial does not
//! converge.
//!
//! ```sh
//! cargo run --example sweep -- [seed] [random|symmetric]
//! ```

use aberth::{FinderConfig, InitMode, Poly64, RootFinder};
use anyhow::{bail, Context};
use fastrand::Rng;

fn run(name: &str, poly: &Poly64, config: FinderConfig<f64>, rng: &mut Rng) -> anyhow::Result<()> {
    let mut finder = RootFinder::from_poly(poly.clone(), config, rng)
        .with_context(|| format!("could not set up \"{name}\" polynomial"))?;
    if !finder.compute(false) {
        bail!(
            "failed \"{name}\" polynomial with degree {}\n{}",
            poly.degree(),
            finder.diagnostics()
        );
    }
    log::debug!("{name}: {:?}", finder.zeros());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed should be an unsigned integer")?
        .unwrap_or(8_008_335);
    let mode = args
        .next()
        .map(|s| s.parse::<InitMode>())
        .transpose()?
        .unwrap_or_default();
    let config = FinderConfig::default().with_init_mode(mode);

    // every polynomial draws its guesses from the same source
    let mut rng = Rng::with_seed(seed);

    log::info!("testing \"easy\" polynomials ({mode} guesses, seed {seed})");
    for i in 1..=10 {
        let poly = Poly64::easy(10 * i).context("degree out of range")?;
        run("easy", &poly, config, &mut rng)?;
    }

    log::info!("testing \"exp\" polynomials");
    for deg in 1..=10 {
        let poly = Poly64::truncated_exp(deg).context("degree out of range")?;
        run("exp", &poly, config, &mut rng)?;
    }

    log::info!("testing \"kam1\" polynomials");
    for i in 1..=10u32 {
        let c = 1E-6 / f64::from(i * 10);
        let poly = Poly64::kam1(c).with_context(|| format!("c = {c} out of range"))?;
        run("kam1", &poly, config, &mut rng)?;
    }

    log::info!("testing \"roots of unity\" polynomials");
    for deg in 1..=10 {
        run("roots of unity", &Poly64::unity_roots(deg), config, &mut rng)?;
    }

    log::info!("all polynomials converged");
    Ok(())
}
