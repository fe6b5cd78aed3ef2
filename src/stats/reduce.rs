//! Row-wise and weighted aggregation.

use crate::error::{AlgorithmError, Result};

/// Mean of each row of a matrix.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for an empty matrix or an
/// empty row.
#[allow(clippy::cast_precision_loss)]
pub fn row_means(matrix: &[Vec<f64>]) -> Result<Vec<f64>> {
    if matrix.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "matrix" }.into());
    }
    matrix
        .iter()
        .map(|row| {
            if row.is_empty() {
                return Err(AlgorithmError::EmptyInput { what: "row" }.into());
            }
            Ok(row.iter().sum::<f64>() / row.len() as f64)
        })
        .collect()
}

/// Weighted mean: `sum(v_i * w_i) / sum(w_i)`.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for empty inputs,
/// [`AlgorithmError::DimensionMismatch`] when lengths differ, and
/// [`AlgorithmError::InvalidParameter`] for negative weights or a zero
/// weight sum.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "values" }.into());
    }
    if values.len() != weights.len() {
        return Err(AlgorithmError::DimensionMismatch {
            left: values.len(),
            right: weights.len(),
        }
        .into());
    }
    if weights.iter().any(|&w| !w.is_finite() || w < 0.0) {
        return Err(AlgorithmError::InvalidParameter {
            name: "weights",
            reason: "weights must be finite and non-negative".to_owned(),
        }
        .into());
    }

    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(AlgorithmError::InvalidParameter {
            name: "weights",
            reason: "weight sum must be positive".to_owned(),
        }
        .into());
    }
    let dot: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    Ok(dot / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_means() {
        let matrix = vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0]];
        let means = row_means(&matrix).unwrap();
        assert!((means[0] - 2.0).abs() < 1e-12);
        assert!((means[1] - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_row_means_validation() {
        assert!(row_means(&[]).is_err());
        assert!(row_means(&[vec![1.0], vec![]]).is_err());
    }

    #[test]
    fn test_weighted_mean_normalizes() {
        // Weights sum to 2: (1*1 + 3*1) / 2 = 2.
        let m = weighted_mean(&[1.0, 3.0], &[1.0, 1.0]).unwrap();
        assert!((m - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean_unit_weights_match_plain_mean() {
        let values = [75.0, 80.0, 85.0, 90.0, 95.0];
        let weights = [1.0; 5];
        let m = weighted_mean(&values, &weights).unwrap();
        assert!((m - 85.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean_stays_in_value_range() {
        let m = weighted_mean(&[10.0, 20.0], &[0.25, 0.75]).unwrap();
        assert!((10.0..=20.0).contains(&m));
        assert!((m - 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean_validation() {
        assert!(weighted_mean(&[], &[]).is_err());
        assert!(weighted_mean(&[1.0], &[1.0, 2.0]).is_err());
        assert!(weighted_mean(&[1.0], &[-1.0]).is_err());
        assert!(weighted_mean(&[1.0, 2.0], &[0.0, 0.0]).is_err());
    }
}
