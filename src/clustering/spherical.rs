//! Adaptive spherical k-means.
//!
//! Clusters unit vectors by arc distance (the angle between directions).
//! Input points are normalized up front; centers are re-normalized after
//! each mean update so they stay on the sphere. The dot product is
//! clamped before `acos` so the distance is total.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the k-means loop.
#[derive(Debug, Clone, Copy)]
pub struct KMeansConfig {
    /// Number of clusters.
    pub clusters: usize,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Convergence threshold on the largest center movement (radians).
    pub tolerance: f64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            clusters: 3,
            max_iterations: super::MAX_ITERATIONS,
            tolerance: super::TOLERANCE,
        }
    }
}

/// Result of a k-means fit.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    /// Final cluster centers (unit vectors).
    pub centers: Vec<Vec<f64>>,
    /// Cluster index per input point.
    pub assignments: Vec<usize>,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the loop converged before the iteration cap.
    pub converged: bool,
}

impl KMeansFit {
    /// Number of points assigned to each cluster.
    #[must_use]
    pub fn cluster_sizes(&self, clusters: usize) -> Vec<usize> {
        let mut sizes = vec![0; clusters];
        for &a in &self.assignments {
            sizes[a] += 1;
        }
        sizes
    }
}

/// Arc distance between two unit vectors.
///
/// The dot product is clamped to `[-1, 1]` before `acos`, so rounding
/// noise cannot produce NaN.
#[must_use]
pub fn arc_distance(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot.clamp(-1.0, 1.0).acos()
}

fn normalize(v: &[f64], what: &'static str) -> Result<Vec<f64>> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return Err(AlgorithmError::ZeroNorm { what }.into());
    }
    Ok(v.iter().map(|x| x / norm).collect())
}

/// Runs spherical k-means over the given points.
///
/// Centers are seeded from randomly chosen input points; the loop
/// alternates assignment and mean-update until the largest center
/// movement drops below `tolerance` or the iteration cap is hit. Empty
/// clusters keep their previous center.
///
/// # Errors
///
/// Returns an error for empty data, inconsistent dimensions, zero-norm
/// points, or a cluster count of zero or beyond the number of points.
pub fn fit(data: &[Vec<f64>], config: &KMeansConfig, rng: &mut impl Rng) -> Result<KMeansFit> {
    if data.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "data" }.into());
    }
    if config.clusters == 0 || config.clusters > data.len() {
        return Err(AlgorithmError::InvalidParameter {
            name: "clusters",
            reason: format!(
                "must be in 1..={} for {} points, got {}",
                data.len(),
                data.len(),
                config.clusters
            ),
        }
        .into());
    }
    let dim = data[0].len();
    if dim == 0 {
        return Err(AlgorithmError::EmptyInput { what: "point" }.into());
    }
    for point in data {
        if point.len() != dim {
            return Err(AlgorithmError::DimensionMismatch {
                left: dim,
                right: point.len(),
            }
            .into());
        }
    }

    let points: Vec<Vec<f64>> = data
        .iter()
        .map(|p| normalize(p, "data point"))
        .collect::<Result<_>>()?;

    // Seed centers from random input points.
    let mut centers: Vec<Vec<f64>> = (0..config.clusters)
        .map(|_| points[rng.random_range(0..points.len())].clone())
        .collect();

    let mut assignments = vec![0usize; points.len()];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        for (i, point) in points.iter().enumerate() {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (j, center) in centers.iter().enumerate() {
                let distance = arc_distance(point, center);
                if distance < best_distance {
                    best_distance = distance;
                    best = j;
                }
            }
            assignments[i] = best;
        }

        let mut movement = 0.0_f64;
        for (j, center) in centers.iter_mut().enumerate() {
            let mut sum = vec![0.0; dim];
            let mut count = 0usize;
            for (point, &a) in points.iter().zip(&assignments) {
                if a == j {
                    for (s, x) in sum.iter_mut().zip(point) {
                        *s += x;
                    }
                    count += 1;
                }
            }
            if count == 0 {
                continue;
            }
            // Mean direction, re-projected onto the sphere. A degenerate
            // mean (opposing members cancelling out) keeps the old center.
            if let Ok(updated) = normalize(&sum, "center") {
                movement = movement.max(arc_distance(center, &updated));
                *center = updated;
            }
        }

        if movement <= config.tolerance {
            converged = true;
            break;
        }
    }

    Ok(KMeansFit {
        centers,
        assignments,
        iterations,
        converged,
    })
}

/// Demo: clusters seeded random 3-D directions into three groups.
pub fn demo(seed: u64) -> Result<Report> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<Vec<f64>> = (0..60)
        .map(|_| (0..3).map(|_| rng.random::<f64>() * 10.0 - 5.0).collect())
        .collect();

    let config = KMeansConfig::default();
    let fitted = fit(&data, &config, &mut rng)?;

    let mut report = Report::new("Adaptive spherical k-means");
    report.line(format!(
        "clustered {} random 3-d directions into {} groups",
        data.len(),
        config.clusters
    ));
    let sizes = fitted.cluster_sizes(config.clusters);
    for (j, size) in sizes.iter().enumerate() {
        report.line(format!("cluster {j}: {size} points"));
    }
    #[allow(clippy::cast_precision_loss)]
    {
        report.metric("iterations", fitted.iterations as f64);
        report.metric("converged", f64::from(u8::from(fitted.converged)));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_arc_distance_clamped() {
        // Numerically identical unit vectors can dot to slightly above 1.
        let v = vec![0.6, 0.8];
        let d = arc_distance(&v, &v);
        assert!(d.abs() < 1e-7);
        assert!(!d.is_nan());
    }

    #[test]
    fn test_arc_distance_orthogonal() {
        let d = arc_distance(&[1.0, 0.0], &[0.0, 1.0]);
        assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_fit_separable_directions() {
        // Two tight bundles pointing along +x and +y.
        let mut data = Vec::new();
        for i in 0..10 {
            let eps = f64::from(i) * 0.001;
            data.push(vec![1.0, eps, 0.0]);
            data.push(vec![eps, 1.0, 0.0]);
        }
        let config = KMeansConfig {
            clusters: 2,
            ..KMeansConfig::default()
        };
        let fitted = fit(&data, &config, &mut rng()).unwrap();
        assert!(fitted.converged);

        // Points of the same bundle end up together.
        let bundle_x: Vec<usize> = fitted.assignments.iter().step_by(2).copied().collect();
        let bundle_y: Vec<usize> = fitted.assignments.iter().skip(1).step_by(2).copied().collect();
        assert!(bundle_x.windows(2).all(|w| w[0] == w[1]));
        assert!(bundle_y.windows(2).all(|w| w[0] == w[1]));
        assert_ne!(bundle_x[0], bundle_y[0]);
    }

    #[test]
    fn test_fit_assignment_len_matches() {
        let data: Vec<Vec<f64>> = (0..8).map(|i| vec![f64::from(i) + 1.0, 1.0]).collect();
        let fitted = fit(&data, &KMeansConfig::default(), &mut rng()).unwrap();
        assert_eq!(fitted.assignments.len(), 8);
        assert!(fitted.assignments.iter().all(|&a| a < 3));
    }

    #[test]
    fn test_fit_centers_are_unit() {
        let data: Vec<Vec<f64>> = (0..12)
            .map(|i| vec![f64::from(i % 4) + 0.5, f64::from(i % 3) + 0.5])
            .collect();
        let fitted = fit(&data, &KMeansConfig::default(), &mut rng()).unwrap();
        for center in &fitted.centers {
            let norm: f64 = center.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fit_empty_data() {
        assert!(fit(&[], &KMeansConfig::default(), &mut rng()).is_err());
    }

    #[test]
    fn test_fit_zero_clusters() {
        let config = KMeansConfig {
            clusters: 0,
            ..KMeansConfig::default()
        };
        assert!(fit(&[vec![1.0]], &config, &mut rng()).is_err());
    }

    #[test]
    fn test_fit_more_clusters_than_points() {
        let config = KMeansConfig {
            clusters: 5,
            ..KMeansConfig::default()
        };
        assert!(fit(&[vec![1.0], vec![2.0]], &config, &mut rng()).is_err());
    }

    #[test]
    fn test_fit_dimension_mismatch() {
        let data = vec![vec![1.0, 0.0], vec![1.0]];
        assert!(fit(&data, &KMeansConfig::default(), &mut rng()).is_err());
    }

    #[test]
    fn test_fit_zero_vector() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
        let config = KMeansConfig {
            clusters: 2,
            ..KMeansConfig::default()
        };
        assert!(fit(&data, &config, &mut rng()).is_err());
    }

    #[test]
    fn test_demo_deterministic() {
        let a = demo(7).unwrap();
        let b = demo(7).unwrap();
        assert_eq!(a, b);
    }
}
