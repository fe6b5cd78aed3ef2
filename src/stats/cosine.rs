//! Cosine similarity between dense vectors.

use crate::error::{AlgorithmError, Result};

/// Cosine similarity of two vectors. Returns 0 when either vector has
/// zero norm.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for empty vectors and
/// [`AlgorithmError::DimensionMismatch`] when lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.is_empty() {
        return Err(AlgorithmError::EmptyInput { what: "vector" }.into());
    }
    if a.len() != b.len() {
        return Err(AlgorithmError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        }
        .into());
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}
