//! Relative-deviation anomaly scoring.

use crate::error::{AlgorithmError, Result};

/// Relative deviation of an observation from its baseline:
/// `|current - baseline| / baseline`.
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidParameter`] for a non-positive or
/// non-finite baseline.
pub fn anomaly_score(baseline: f64, current: f64) -> Result<f64> {
    if !baseline.is_finite() || baseline <= 0.0 {
        return Err(AlgorithmError::InvalidParameter {
            name: "baseline",
            reason: format!("must be finite and > 0, got {baseline}"),
        }
        .into());
    }
    Ok((current - baseline).abs() / baseline)
}

/// Flags observations whose relative deviation exceeds a threshold.
#[derive(Debug, Clone, Copy)]
pub struct AnomalyDetector {
    threshold: f64,
}

impl AnomalyDetector {
    /// Creates a detector.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidParameter`] for a non-positive
    /// or non-finite threshold.
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(AlgorithmError::InvalidParameter {
                name: "threshold",
                reason: format!("must be finite and > 0, got {threshold}"),
            }
            .into());
        }
        Ok(Self { threshold })
    }

    /// Detection threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `current` deviates from `baseline` by more than the
    /// threshold. The boundary itself is not anomalous.
    ///
    /// # Errors
    ///
    /// Propagates [`anomaly_score`]'s baseline check.
    pub fn is_anomalous(&self, baseline: f64, current: f64) -> Result<bool> {
        Ok(anomaly_score(baseline, current)? > self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(100.0, 180.0, 0.8 ; "above baseline")]
    #[test_case(100.0, 20.0, 0.8 ; "below baseline")]
    #[test_case(100.0, 100.0, 0.0 ; "on baseline")]
    fn test_score(baseline: f64, current: f64, expected: f64) {
        assert!((anomaly_score(baseline, current).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_baseline_rejected() {
        assert!(anomaly_score(0.0, 10.0).is_err());
        assert!(anomaly_score(-5.0, 10.0).is_err());
        assert!(anomaly_score(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_detector_threshold_is_exclusive() {
        let d = AnomalyDetector::new(0.5).unwrap();
        assert!(!d.is_anomalous(100.0, 150.0).unwrap());
        assert!(d.is_anomalous(100.0, 151.0).unwrap());
        assert!(d.is_anomalous(100.0, 40.0).unwrap());
    }

    #[test]
    fn test_detector_validation() {
        assert!(AnomalyDetector::new(0.0).is_err());
        assert!(AnomalyDetector::new(f64::INFINITY).is_err());
    }
}
