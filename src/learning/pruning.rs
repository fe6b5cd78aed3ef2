//! Relevance-based pruning of a dense layer.
//!
//! Each node's relevance is the L1 mass of its incoming weights; nodes
//! below a threshold are removed, shrinking the layer in place.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A dense layer: one weight row and bias per output node.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
    inputs: usize,
}

impl DenseLayer {
    /// Creates a layer with weights and biases drawn uniformly from
    /// `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::EmptyInput`] for zero inputs or nodes.
    pub fn random(inputs: usize, nodes: usize, rng: &mut impl Rng) -> Result<Self> {
        if inputs == 0 {
            return Err(AlgorithmError::EmptyInput { what: "inputs" }.into());
        }
        if nodes == 0 {
            return Err(AlgorithmError::EmptyInput { what: "nodes" }.into());
        }
        let weights = (0..nodes)
            .map(|_| (0..inputs).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect())
            .collect();
        let biases = (0..nodes).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect();
        Ok(Self {
            weights,
            biases,
            inputs,
        })
    }

    /// Creates a layer from explicit weights and biases.
    ///
    /// # Errors
    ///
    /// Returns an error for empty or ragged rows, or a bias count that
    /// does not match the node count.
    pub fn from_weights(weights: Vec<Vec<f64>>, biases: Vec<f64>) -> Result<Self> {
        let Some(first) = weights.first() else {
            return Err(AlgorithmError::EmptyInput { what: "weights" }.into());
        };
        let inputs = first.len();
        if inputs == 0 {
            return Err(AlgorithmError::EmptyInput { what: "weight row" }.into());
        }
        for row in &weights {
            if row.len() != inputs {
                return Err(AlgorithmError::DimensionMismatch {
                    left: inputs,
                    right: row.len(),
                }
                .into());
            }
        }
        if biases.len() != weights.len() {
            return Err(AlgorithmError::DimensionMismatch {
                left: weights.len(),
                right: biases.len(),
            }
            .into());
        }
        Ok(Self {
            weights,
            biases,
            inputs,
        })
    }

    /// Number of active output nodes.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.weights.len()
    }

    /// Input dimension.
    #[must_use]
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Forward pass with `tanh` activation.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::DimensionMismatch`] on a wrong-sized
    /// input.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.inputs {
            return Err(AlgorithmError::DimensionMismatch {
                left: self.inputs,
                right: input.len(),
            }
            .into());
        }
        Ok(self
            .weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                let sum: f64 = row.iter().zip(input).map(|(w, x)| w * x).sum();
                (sum + bias).tanh()
            })
            .collect())
    }

    /// Per-node relevance: L1 mass of the incoming weights.
    #[must_use]
    pub fn relevance(&self) -> Vec<f64> {
        self.weights
            .iter()
            .map(|row| row.iter().map(|w| w.abs()).sum())
            .collect()
    }

    /// Removes nodes whose relevance falls below `threshold`. Returns
    /// the number of nodes removed. The last surviving node is never
    /// removed, so the layer stays usable.
    pub fn prune(&mut self, threshold: f64) -> usize {
        let scores = self.relevance();
        let before = self.nodes();

        let mut keep: Vec<bool> = scores.iter().map(|&s| s >= threshold).collect();
        if keep.iter().all(|&k| !k) {
            // Keep the most relevant node rather than emptying the layer.
            let mut best = 0;
            for (i, &s) in scores.iter().enumerate() {
                if s > scores[best] {
                    best = i;
                }
            }
            keep[best] = true;
        }

        let mut keep_flags = keep.iter().copied();
        self.weights.retain(|_| keep_flags.next().unwrap_or(false));
        let mut keep_flags = keep.iter().copied();
        self.biases.retain(|_| keep_flags.next().unwrap_or(false));

        before - self.nodes()
    }
}

/// Demo: prunes a seeded random layer at increasing thresholds.
pub fn demo(seed: u64) -> Result<Report> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut layer = DenseLayer::random(8, 16, &mut rng)?;

    let mut report = Report::new("Relevance pruning");
    report.line(format!(
        "dense layer: {} inputs, {} nodes",
        layer.inputs(),
        layer.nodes()
    ));
    #[allow(clippy::cast_precision_loss)]
    {
        report.metric("nodes before", layer.nodes() as f64);
        let removed = layer.prune(4.0);
        report.metric("removed at threshold 4.0", removed as f64);
        report.metric("nodes after", layer.nodes() as f64);
    }

    let input = vec![0.5; 8];
    let output = layer.forward(&input)?;
    report.line(format!("forward pass produced {} activations", output.len()));
    Ok(report)
}
