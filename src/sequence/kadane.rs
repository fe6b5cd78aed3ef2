//! Maximum subarray sum (Kadane's algorithm).

use crate::error::{AlgorithmError, Result};
use crate::report::Report;
use std::ops::Range;

/// Result of a maximum-subarray scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxSubarray {
    /// The maximum contiguous sum.
    pub sum: i64,
    /// Half-open index range of the winning subarray.
    pub range: Range<usize>,
}

impl MaxSubarray {
    /// Returns the winning subarray as a slice of the original values.
    #[must_use]
    pub fn slice<'a>(&self, values: &'a [i64]) -> &'a [i64] {
        &values[self.range.clone()]
    }
}

/// Finds the contiguous subarray with the largest sum.
///
/// Single pass, O(n). All-negative input yields the largest single
/// element.
///
/// # Examples
///
/// ```
/// use vignette::sequence::max_subarray;
///
/// let best = max_subarray(&[2, -3, 5, -1, 4]).unwrap();
/// assert_eq!(best.sum, 8);
/// assert_eq!(best.range, 2..5);
/// ```
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for an empty slice.
pub fn max_subarray(values: &[i64]) -> Result<MaxSubarray> {
    let Some(&first) = values.first() else {
        return Err(AlgorithmError::EmptyInput { what: "values" }.into());
    };

    let mut best = MaxSubarray {
        sum: first,
        range: 0..1,
    };
    let mut current = first;
    let mut current_start = 0;

    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > current + value {
            current = value;
            current_start = i;
        } else {
            current += value;
        }
        if current > best.sum {
            best.sum = current;
            best.range = current_start..i + 1;
        }
    }
    Ok(best)
}

/// Demo: scans a small sample array for its best runs.
pub fn demo(_seed: u64) -> Result<Report> {
    let values = [2, -3, 5, -1, 4, -2, 1, 3, -6, 9];
    let target = 7;

    let best = max_subarray(&values)?;
    let mut report = Report::new("Maximum subarray sum");
    report.line(format!("values: {values:?}"));
    report.line(format!(
        "maximum subarray {:?} over indices {:?}",
        best.slice(&values),
        best.range
    ));

    let hits = super::subarrays_with_sum(&values, target);
    report.line(format!("subarrays summing to {target}:"));
    for range in &hits {
        report.line(format!("  {:?} at {range:?}", &values[range.clone()]));
    }

    let segments = super::non_negative_segments(&values);
    report.line(format!("non-negative segments: {segments:?}"));

    #[allow(clippy::cast_precision_loss)]
    {
        report.metric("max sum", best.sum as f64);
        report.metric("target matches", hits.len() as f64);
        report.metric("non-negative segments", segments.len() as f64);
    }
    Ok(report)
}
