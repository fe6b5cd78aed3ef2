//! Growth, cycle, and disruption formulas.

use crate::error::{AlgorithmError, Result};

/// Compound growth with a constant volatility drag:
/// `value * (1 + trend + volatility)^periods`.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidParameter`] for non-finite inputs
/// or a growth base at or below zero.
pub fn compound_growth(value: f64, trend: f64, volatility: f64, periods: u32) -> Result<f64> {
    if !value.is_finite() || !trend.is_finite() || !volatility.is_finite() {
        return Err(AlgorithmError::InvalidParameter {
            name: "growth inputs",
            reason: "must be finite".to_owned(),
        }
        .into());
    }
    let base = 1.0 + trend + volatility;
    if base <= 0.0 {
        return Err(AlgorithmError::InvalidParameter {
            name: "trend",
            reason: format!("1 + trend + volatility must be > 0, got {base}"),
        }
        .into());
    }
    Ok(value * base.powi(i32::try_from(periods).unwrap_or(i32::MAX)))
}

/// Business-cycle factor: `phase * exp(rate * months) * (1 + adjustment)`.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidParameter`] for non-finite inputs.
pub fn business_cycle(phase: f64, rate: f64, months: f64, adjustment: f64) -> Result<f64> {
    if !phase.is_finite() || !rate.is_finite() || !months.is_finite() || !adjustment.is_finite() {
        return Err(AlgorithmError::InvalidParameter {
            name: "cycle inputs",
            reason: "must be finite".to_owned(),
        }
        .into());
    }
    Ok(phase * (rate * months).exp() * (1.0 + adjustment))
}

/// Applies an innovation shock to market shares in place:
/// `share += innovation * (1 - share) * sensitivity`.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for empty shares,
/// [`AlgorithmError::DimensionMismatch`] when sensitivities do not
/// match, and [`AlgorithmError::InvalidParameter`] for shares outside
/// `[0, 1]` or a negative innovation level.
pub fn market_disruption(
    shares: &mut [f64],
    innovation: f64,
    sensitivities: &[f64],
) -> Result<()> {
    if shares.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "shares" }.into());
    }
    if shares.len() != sensitivities.len() {
        return Err(AlgorithmError::DimensionMismatch {
            left: shares.len(),
            right: sensitivities.len(),
        }
        .into());
    }
    if !innovation.is_finite() || innovation < 0.0 {
        return Err(AlgorithmError::InvalidParameter {
            name: "innovation",
            reason: format!("must be finite and >= 0, got {innovation}"),
        }
        .into());
    }
    for &share in shares.iter() {
        if !(0.0..=1.0).contains(&share) {
            return Err(AlgorithmError::InvalidParameter {
                name: "shares",
                reason: format!("must be in [0, 1], got {share}"),
            }
            .into());
        }
    }

    for (share, &sensitivity) in shares.iter_mut().zip(sensitivities) {
        *share += innovation * (1.0 - *share) * sensitivity;
    }
    Ok(())
}

/// Combined innovation impact: the product of individual factors.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for an empty factor list.
pub fn innovation_impact(factors: &[f64]) -> Result<f64> {
    if factors.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "factors" }.into());
    }
    Ok(factors.iter().product())
}
