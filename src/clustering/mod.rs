//! Clustering vignettes.
//!
//! - **Spherical k-means**: arc-distance clustering of unit vectors with
//!   an assign/update/convergence loop
//! - **Nearest centroid**: vector-quantization style classification with
//!   an open-set rejection radius

pub mod nearest;
pub mod spherical;

pub use nearest::{Classification, CodeEntry, Codebook};
pub use spherical::{KMeansConfig, KMeansFit, arc_distance, fit};

/// Default iteration cap for the k-means loop.
pub const MAX_ITERATIONS: usize = 100;

/// Default convergence threshold on center movement.
pub const TOLERANCE: f64 = 1e-3;
