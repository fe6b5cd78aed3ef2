//! Target-sum subarrays and non-negative segment identification.

use std::ops::Range;

/// Enumerates every contiguous range whose values sum to `target`.
///
/// Quadratic scan over all start positions. An empty input yields no
/// ranges.
#[must_use]
pub fn subarrays_with_sum(values: &[i64], target: i64) -> Vec<Range<usize>> {
    let mut hits = Vec::new();
    for start in 0..values.len() {
        let mut sum = 0;
        for (end, &value) in values.iter().enumerate().skip(start) {
            sum += value;
            if sum == target {
                hits.push(start..end + 1);
            }
        }
    }
    hits
}

/// Identifies maximal runs of non-negative values.
#[must_use]
pub fn non_negative_segments(values: &[i64]) -> Vec<Range<usize>> {
    let mut segments = Vec::new();
    let mut start = None;

    for (i, &value) in values.iter().enumerate() {
        if value >= 0 {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            segments.push(s..i);
        }
    }
    if let Some(s) = start {
        segments.push(s..values.len());
    }
    segments
}
