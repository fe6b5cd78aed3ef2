//! Savitzky–Golay smoothing.
//!
//! 5-point quadratic least-squares filter with the classic precomputed
//! kernel `[-3, 12, 17, 12, -3] / 35`. Window entries that fall outside
//! the signal are skipped (truncated windows), so edge outputs come out
//! attenuated.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;

/// 5-point quadratic Savitzky–Golay convolution weights.
const KERNEL: [f64; 5] = [-3.0, 12.0, 17.0, 12.0, -3.0];

/// Kernel normalization factor.
const NORM: f64 = 35.0;

/// Smooths a signal with the 5-point Savitzky–Golay filter.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for an empty signal.
pub fn savgol_smooth(signal: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "signal" }.into());
    }

    let half = KERNEL.len() / 2;
    let mut out = Vec::with_capacity(signal.len());
    for i in 0..signal.len() {
        let mut acc = 0.0;
        for (k, weight) in KERNEL.iter().enumerate() {
            // Window index relative to the center tap.
            let Some(j) = (i + k).checked_sub(half) else {
                continue;
            };
            if let Some(&sample) = signal.get(j) {
                acc += sample * weight;
            }
        }
        out.push(acc / NORM);
    }
    Ok(out)
}

/// Demo: smooths a ramp with an injected spike.
pub fn demo(_seed: u64) -> Result<Report> {
    let signal = [1.0, 2.0, 3.0, 9.0, 5.0, 6.0, 7.0, 8.0];
    let smoothed = savgol_smooth(&signal)?;

    let mut report = Report::new("Savitzky-Golay smoothing");
    report.line(format!("input signal:   {signal:?}"));
    report.line(format!(
        "smoothed:       {:?}",
        smoothed.iter().map(|v| (v * 100.0).round() / 100.0).collect::<Vec<_>>()
    ));
    report.metric("spike before", signal[3]);
    report.metric("spike after", smoothed[3]);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_preserves_constant_interior() {
        // Away from the edges a constant signal passes through unchanged:
        // the kernel weights sum to the normalization factor.
        let signal = [4.0; 9];
        let smoothed = savgol_smooth(&signal).unwrap();
        for &value in &smoothed[2..7] {
            assert!((value - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_preserves_linear_interior() {
        // A quadratic-exact filter reproduces straight lines exactly.
        let signal: Vec<f64> = (0..10).map(f64::from).collect();
        let smoothed = savgol_smooth(&signal).unwrap();
        for (i, &value) in smoothed.iter().enumerate().take(8).skip(2) {
            #[allow(clippy::cast_precision_loss)]
            let expected = i as f64;
            assert!((value - expected).abs() < 1e-9, "index {i}: {value}");
        }
    }

    #[test]
    fn test_attenuates_spike() {
        let signal = [1.0, 2.0, 3.0, 9.0, 5.0, 6.0, 7.0, 8.0];
        let smoothed = savgol_smooth(&signal).unwrap();
        assert!(smoothed[3] < signal[3]);
    }

    #[test]
    fn test_truncated_edges() {
        // Edge windows drop out-of-range taps, so a constant signal is
        // attenuated at the boundary.
        let signal = [7.0; 6];
        let smoothed = savgol_smooth(&signal).unwrap();
        assert!(smoothed[0] < 7.0);
        assert!((smoothed[2] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_signal() {
        assert!(savgol_smooth(&[]).is_err());
    }

    #[test]
    fn test_short_signal_is_accepted() {
        // Shorter than the window: every window is truncated.
        let smoothed = savgol_smooth(&[1.0, 2.0]).unwrap();
        assert_eq!(smoothed.len(), 2);
    }

    #[test]
    fn test_demo() {
        let report = demo(0).unwrap();
        let before = report.get_metric("spike before").unwrap();
        let after = report.get_metric("spike after").unwrap();
        assert!(after < before);
    }
}
