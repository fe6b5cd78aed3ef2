//! Exponential moving average.
//!
//! The EMA blends each new sample into a running average:
//! `ema = alpha * value + (1 - alpha) * ema`. A small `alpha` favors
//! history; `alpha = 1` tracks the raw signal.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;

/// Applies one EMA update step.
///
/// # Examples
///
/// ```
/// use vignette::smoothing::ema_update;
///
/// let ema = ema_update(100.0, 110.0, 0.5);
/// assert!((ema - 105.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn ema_update(previous: f64, value: f64, alpha: f64) -> f64 {
    alpha.mul_add(value, (1.0 - alpha) * previous)
}

/// Computes the EMA over a series of samples.
///
/// The first sample seeds the average; the output has the same length as
/// the input.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for an empty series and
/// [`AlgorithmError::InvalidParameter`] when `alpha` is outside `(0, 1]`
/// or not finite.
pub fn ema_series(samples: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "samples" }.into());
    }
    if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
        return Err(AlgorithmError::InvalidParameter {
            name: "alpha",
            reason: format!("must be in (0, 1], got {alpha}"),
        }
        .into());
    }

    let mut out = Vec::with_capacity(samples.len());
    let mut ema = samples[0];
    out.push(ema);
    for &value in &samples[1..] {
        ema = ema_update(ema, value, alpha);
        out.push(ema);
    }
    Ok(out)
}

/// Demo: smooths a short market series.
pub fn demo(_seed: u64) -> Result<Report> {
    let market_data = [100.0, 105.0, 110.0, 115.0, 120.0];
    let alpha = super::DEFAULT_SMOOTHING;

    let series = ema_series(&market_data, alpha)?;
    let mut report = Report::new("Exponential moving average");
    report.line(format!(
        "smoothing market data {market_data:?} with alpha {alpha}"
    ));
    for (i, value) in series.iter().enumerate().skip(1) {
        report.line(format!("forecast for period {}: {value:.2}", i + 1));
    }
    if let Some(&last) = series.last() {
        report.metric("final ema", last);
    }
    Ok(report)
}
