//! Nearest-centroid classification with open-set rejection.
//!
//! Classifies a point by its nearest codebook center and flags points
//! beyond a rejection radius as an unknown class, keeping the
//! classifier honest on open-set input.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;

/// One labeled codebook center.
#[derive(Debug, Clone)]
pub struct CodeEntry {
    /// Class label.
    pub label: String,
    /// Center vector.
    pub center: Vec<f64>,
}

impl CodeEntry {
    /// Creates a labeled center.
    #[must_use]
    pub fn new(label: impl Into<String>, center: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            center,
        }
    }
}

/// Outcome of classifying a point.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Point fell within the rejection radius of its nearest center.
    Known {
        /// Label of the nearest center.
        label: String,
        /// Euclidean distance to that center.
        distance: f64,
    },
    /// Point was too far from every center.
    Unknown {
        /// Label of the nearest (still rejected) center.
        nearest: String,
        /// Euclidean distance to that center.
        distance: f64,
    },
}

/// A fixed codebook of labeled centers with a rejection radius.
#[derive(Debug, Clone)]
pub struct Codebook {
    entries: Vec<CodeEntry>,
    radius: f64,
}

impl Codebook {
    /// Builds a codebook.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty codebook, inconsistent center
    /// dimensions, or a non-positive rejection radius.
    pub fn new(entries: Vec<CodeEntry>, radius: f64) -> Result<Self> {
        let Some(first) = entries.first() else {
            return Err(AlgorithmError::EmptyInput { what: "codebook" }.into());
        };
        let dim = first.center.len();
        for entry in &entries {
            if entry.center.len() != dim {
                return Err(AlgorithmError::DimensionMismatch {
                    left: dim,
                    right: entry.center.len(),
                }
                .into());
            }
        }
        if radius.is_nan() || radius <= 0.0 {
            return Err(AlgorithmError::InvalidParameter {
                name: "radius",
                reason: format!("must be > 0, got {radius}"),
            }
            .into());
        }
        Ok(Self { entries, radius })
    }

    /// Dimension of the codebook centers.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.entries[0].center.len()
    }

    /// Classifies a point by its nearest center.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::DimensionMismatch`] when the point's
    /// dimension differs from the codebook's.
    pub fn classify(&self, point: &[f64]) -> Result<Classification> {
        if point.len() != self.dim() {
            return Err(AlgorithmError::DimensionMismatch {
                left: self.dim(),
                right: point.len(),
            }
            .into());
        }

        let mut nearest = &self.entries[0];
        let mut best = f64::INFINITY;
        for entry in &self.entries {
            let distance = euclidean(point, &entry.center);
            if distance < best {
                best = distance;
                nearest = entry;
            }
        }

        if best <= self.radius {
            Ok(Classification::Known {
                label: nearest.label.clone(),
                distance: best,
            })
        } else {
            Ok(Classification::Unknown {
                nearest: nearest.label.clone(),
                distance: best,
            })
        }
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Demo: a three-class codebook over 2-D sensor features.
pub fn demo(_seed: u64) -> Result<Report> {
    let codebook = Codebook::new(
        vec![
            CodeEntry::new("idle", vec![0.0, 0.0]),
            CodeEntry::new("walking", vec![1.0, 2.0]),
            CodeEntry::new("running", vec![4.0, 5.0]),
        ],
        1.5,
    )?;

    let mut report = Report::new("Nearest-centroid classification");
    let mut unknown = 0u32;
    for point in [[0.9, 1.8], [4.2, 4.9], [10.0, -3.0]] {
        match codebook.classify(&point)? {
            Classification::Known { label, distance } => {
                report.line(format!("{point:?} -> {label} (distance {distance:.2})"));
            }
            Classification::Unknown { nearest, distance } => {
                unknown += 1;
                report.line(format!(
                    "{point:?} -> unknown class detected (nearest {nearest}, distance {distance:.2})"
                ));
            }
        }
    }
    report.metric("unknown points", f64::from(unknown));
    Ok(report)
}
