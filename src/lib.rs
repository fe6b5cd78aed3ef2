//! # Vignette
//!
//! A gallery of small, seeded algorithm demos.
//!
//! Each module packages one self-contained algorithm walkthrough —
//! sample data, a pure computation, and a [`Report`] of what happened.
//! Demos share nothing beyond the report type and the registry, so any
//! one of them can be read, run, and tested on its own.
//!
//! ## Features
//!
//! - **Smoothing**: exponential moving average, Savitzky-Golay
//! - **Sequences**: Kadane maximum subarray, target-sum scans
//! - **Clustering**: spherical k-means, nearest-centroid with rejection
//! - **Alignment**: dynamic time warping, tree edit distance
//! - **Dynamics**: driven Potts spins, logistic-map chaos
//! - **Learning**: Q-tables, Hebbian updates, relevance pruning
//! - **Detection**: anomaly scores, packet rules, SHA-256 handshakes

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod alignment;
pub mod chaos;
pub mod cli;
pub mod clustering;
pub mod demo;
pub mod detect;
pub mod error;
pub mod forecast;
pub mod learning;
pub mod logic;
pub mod report;
pub mod sequence;
pub mod smoothing;
pub mod spin;
pub mod stats;

// Re-export commonly used types at crate root
pub use error::{AlgorithmError, CommandError, DemoError, Error, Result};
pub use report::{Metric, Report};

// Re-export the demo registry
pub use demo::{DemoEntry, available_demos, find_demo, run_all, run_demo};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};

// Re-export the most commonly used algorithm types
pub use alignment::{TreeNode, dtw};
pub use clustering::{Codebook, KMeansConfig, KMeansFit};
pub use learning::{DenseLayer, QTable};
pub use sequence::MaxSubarray;
pub use spin::{PottsConfig, PottsModel};
