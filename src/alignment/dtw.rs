//! Dynamic time warping.
//!
//! Full dynamic-programming alignment with absolute-difference local
//! cost. O(n·m) time and memory, which is fine at demo scale.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;

/// Computes the DTW alignment cost between two signals.
///
/// Identical signals align at zero cost; warping lets one signal stretch
/// against the other, so shifted copies score close to zero too.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] when either signal is empty.
pub fn dtw(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "first signal" }.into());
    }
    if b.is_empty() {
        return Err(AlgorithmError::EmptyInput {
            what: "second signal",
        }
        .into());
    }

    let (n, m) = (a.len(), b.len());
    let mut table = vec![f64::INFINITY; n * m];
    let at = |table: &[f64], i: usize, j: usize| table[i * m + j];

    table[0] = (a[0] - b[0]).abs();
    for j in 1..m {
        table[j] = table[j - 1] + (a[0] - b[j]).abs();
    }
    for i in 1..n {
        table[i * m] = table[(i - 1) * m] + (a[i] - b[0]).abs();
    }
    for i in 1..n {
        for j in 1..m {
            let cost = (a[i] - b[j]).abs();
            let best = at(&table, i - 1, j)
                .min(at(&table, i, j - 1))
                .min(at(&table, i - 1, j - 1));
            table[i * m + j] = cost + best;
        }
    }
    Ok(table[n * m - 1])
}

/// Demo: aligns a reference pulse against shifted and scaled copies.
pub fn demo(_seed: u64) -> Result<Report> {
    let reference = [0.0, 0.0, 1.0, 2.0, 1.0, 0.0, 0.0];
    let shifted = [0.0, 1.0, 2.0, 1.0, 0.0, 0.0, 0.0];
    let scaled = [0.0, 0.0, 2.0, 4.0, 2.0, 0.0, 0.0];

    let mut report = Report::new("Dynamic time warping");
    report.line(format!("reference pulse: {reference:?}"));
    report.metric("self alignment", dtw(&reference, &reference)?);
    report.metric("shifted copy", dtw(&reference, &shifted)?);
    report.metric("scaled copy", dtw(&reference, &scaled)?);
    Ok(report)
}
