//! Logistic map and a chaotic field-optimization search.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One logistic-map step: `r * x * (1 - x)`.
#[must_use]
pub fn logistic_map(x: f64, rate: f64) -> f64 {
    rate * x * (1.0 - x)
}

/// Iterates the map `steps` times from `x0`, returning the orbit
/// including the starting point.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidParameter`] when `x0` lies outside
/// `[0, 1]` or `rate` outside `[0, 4]` (the map leaves the unit
/// interval otherwise).
pub fn logistic_orbit(x0: f64, rate: f64, steps: usize) -> Result<Vec<f64>> {
    if !(0.0..=1.0).contains(&x0) {
        return Err(AlgorithmError::InvalidParameter {
            name: "x0",
            reason: format!("must be in [0, 1], got {x0}"),
        }
        .into());
    }
    if !(0.0..=4.0).contains(&rate) {
        return Err(AlgorithmError::InvalidParameter {
            name: "rate",
            reason: format!("must be in [0, 4], got {rate}"),
        }
        .into());
    }

    let mut orbit = Vec::with_capacity(steps + 1);
    let mut x = x0;
    orbit.push(x);
    for _ in 0..steps {
        x = logistic_map(x, rate);
        orbit.push(x);
    }
    Ok(orbit)
}

/// Field energy: sum of squared amplitudes.
#[must_use]
pub fn field_energy(field: &[f64]) -> f64 {
    field.iter().map(|v| v * v).sum()
}

/// Randomized search for a low-energy field configuration.
///
/// Each iteration perturbs every component by a uniform draw in
/// `[-amplitude/2, amplitude/2]` and keeps the lowest-energy
/// configuration seen. Returns the best field and its energy.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for an empty field and
/// [`AlgorithmError::InvalidParameter`] for a non-finite or
/// non-positive amplitude.
pub fn chaotic_search(
    field: &[f64],
    iterations: usize,
    amplitude: f64,
    rng: &mut impl Rng,
) -> Result<(Vec<f64>, f64)> {
    if field.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "field" }.into());
    }
    if !amplitude.is_finite() || amplitude <= 0.0 {
        return Err(AlgorithmError::InvalidParameter {
            name: "amplitude",
            reason: format!("must be finite and > 0, got {amplitude}"),
        }
        .into());
    }

    let mut current = field.to_vec();
    let mut best = current.clone();
    let mut best_energy = field_energy(&best);

    for _ in 0..iterations {
        for site in &mut current {
            *site += (rng.random::<f64>() - 0.5) * amplitude;
        }
        let energy = field_energy(&current);
        if energy < best_energy {
            best_energy = energy;
            best = current.clone();
        }
    }
    Ok((best, best_energy))
}

/// Demo: a small three-site field search plus a sample chaotic orbit.
pub fn demo(seed: u64) -> Result<Report> {
    let mut rng = StdRng::seed_from_u64(seed);
    let field = [0.1, 0.2, 0.3];
    let rate = super::DEFAULT_RATE;

    let mut report = Report::new("Chaotic field search");
    report.line(format!("initial field: {field:?}"));
    report.metric("initial energy", field_energy(&field));

    let (best, energy) = chaotic_search(&field, 100, 0.1, &mut rng)?;
    report.line(format!(
        "best field after 100 iterations: {:?}",
        best.iter().map(|v| (v * 1000.0).round() / 1000.0).collect::<Vec<_>>()
    ));
    report.metric("best energy", energy);

    let orbit = logistic_orbit(0.1, rate, 5)?;
    report.line(format!("logistic orbit from 0.1 at r = {rate}: {orbit:?}"));
    Ok(report)
}
