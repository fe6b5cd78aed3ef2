//! Hebbian weight update: `w_i += rate * x_i * y`.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;

/// Applies one Hebbian update in place.
///
/// # Errors
///
/// Returns [`AlgorithmError::DimensionMismatch`] when `weights` and
/// `inputs` differ in length, and [`AlgorithmError::EmptyInput`] when
/// both are empty.
pub fn hebbian_update(weights: &mut [f64], inputs: &[f64], rate: f64, output: f64) -> Result<()> {
    if weights.len() != inputs.len() {
        return Err(AlgorithmError::DimensionMismatch {
            left: weights.len(),
            right: inputs.len(),
        }
        .into());
    }
    if weights.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "weights" }.into());
    }

    for (w, &x) in weights.iter_mut().zip(inputs) {
        *w += rate * x * output;
    }
    Ok(())
}

/// Demo: one update over three inputs.
pub fn demo(_seed: u64) -> Result<Report> {
    let mut weights = [0.5, -0.3, 0.8];
    let inputs = [1.0, 0.5, -0.6];

    hebbian_update(&mut weights, &inputs, 0.1, 1.0)?;

    let mut report = Report::new("Hebbian learning step");
    report.line(format!("inputs:          {inputs:?}"));
    report.line(format!("updated weights: {weights:?}"));
    report.metric("w0", weights[0]);
    report.metric("w1", weights[1]);
    report.metric("w2", weights[2]);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_known_values() {
        // weights {0.5, -0.3, 0.8}, inputs {1.0, 0.5, -0.6}, rate 0.1,
        // output 1.0 -> {0.6, -0.25, 0.74}.
        let mut weights = [0.5, -0.3, 0.8];
        hebbian_update(&mut weights, &[1.0, 0.5, -0.6], 0.1, 1.0).unwrap();
        assert!((weights[0] - 0.6).abs() < 1e-12);
        assert!((weights[1] - (-0.25)).abs() < 1e-12);
        assert!((weights[2] - 0.74).abs() < 1e-12);
    }

    #[test]
    fn test_zero_output_is_noop() {
        let mut weights = [1.0, 2.0];
        hebbian_update(&mut weights, &[3.0, 4.0], 0.1, 0.0).unwrap();
        assert_eq!(weights, [1.0, 2.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut weights = [1.0];
        assert!(hebbian_update(&mut weights, &[1.0, 2.0], 0.1, 1.0).is_err());
    }

    #[test]
    fn test_empty() {
        let mut weights: [f64; 0] = [];
        assert!(hebbian_update(&mut weights, &[], 0.1, 1.0).is_err());
    }
}
