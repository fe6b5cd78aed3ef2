//! Small statistical kernels shared by the business vignettes.

pub mod cosine;
pub mod reduce;

pub use cosine::cosine_similarity;
pub use reduce::{row_means, weighted_mean};

use crate::error::Result;
use crate::report::Report;

/// Demo: similarity and weighted aggregation over the sample business
/// figures.
pub fn demo(_seed: u64) -> Result<Report> {
    let business_data = [75.0, 80.0, 85.0, 90.0, 95.0];
    let weights = [0.1, 0.2, 0.3, 0.2, 0.2];
    let reference = [70.0, 78.0, 88.0, 92.0, 96.0];

    let similarity = cosine_similarity(&business_data, &reference)?;
    let weighted = weighted_mean(&business_data, &weights)?;

    let matrix = vec![business_data.to_vec(), reference.to_vec()];
    let means = row_means(&matrix)?;

    let mut report = Report::new("Business similarity");
    report.line(format!("series a: {business_data:?}"));
    report.line(format!("series b: {reference:?}"));
    report.metric("cosine similarity", similarity);
    report.metric("weighted mean", weighted);
    report.metric("series a mean", means[0]);
    report.metric("series b mean", means[1]);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_deterministic() {
        assert_eq!(demo(1).unwrap(), demo(2).unwrap());
    }

    #[test]
    fn test_demo_weighted_mean() {
        // 7.5 + 16 + 25.5 + 18 + 19 = 86, weights sum to 1.
        let report = demo(0).unwrap();
        assert!((report.get_metric("weighted mean").unwrap() - 86.0).abs() < 1e-9);
    }
}
