//! Demo registry.
//!
//! Every vignette exposes a seeded `demo` function producing a
//! [`Report`]; this module names them and runs them by name.

use crate::error::{DemoError, Result};
use crate::report::Report;
use rayon::prelude::*;

/// One registered demo.
#[derive(Debug, Clone, Copy)]
pub struct DemoEntry {
    /// Registry name used on the command line.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    run: fn(u64) -> Result<Report>,
}

impl DemoEntry {
    /// Runs the demo with a seed.
    ///
    /// # Errors
    ///
    /// Propagates the demo's own failure.
    pub fn run(&self, seed: u64) -> Result<Report> {
        (self.run)(seed)
    }
}

const DEMOS: &[DemoEntry] = &[
    DemoEntry {
        name: "ema",
        summary: "Exponential moving average over a price series",
        run: crate::smoothing::ema::demo,
    },
    DemoEntry {
        name: "savgol",
        summary: "Savitzky-Golay smoothing of a spiky signal",
        run: crate::smoothing::savgol::demo,
    },
    DemoEntry {
        name: "max-subarray",
        summary: "Kadane maximum subarray and target-sum scan",
        run: crate::sequence::kadane::demo,
    },
    DemoEntry {
        name: "spherical-kmeans",
        summary: "K-means on the unit sphere with arc distance",
        run: crate::clustering::spherical::demo,
    },
    DemoEntry {
        name: "nearest-centroid",
        summary: "Nearest-centroid classification with a rejection radius",
        run: crate::clustering::nearest::demo,
    },
    DemoEntry {
        name: "dtw",
        summary: "Dynamic time warping distance between two series",
        run: crate::alignment::dtw::demo,
    },
    DemoEntry {
        name: "tree-edit",
        summary: "Tree edit distance and best-match scoring",
        run: crate::alignment::tree_edit::demo,
    },
    DemoEntry {
        name: "potts",
        summary: "Driven Potts spin ring under Metropolis dynamics",
        run: crate::spin::potts::demo,
    },
    DemoEntry {
        name: "q-learning",
        summary: "Tabular Q-learning update",
        run: crate::learning::qtable::demo,
    },
    DemoEntry {
        name: "hebbian",
        summary: "Hebbian weight update",
        run: crate::learning::hebbian::demo,
    },
    DemoEntry {
        name: "pruning",
        summary: "Relevance-based pruning of a dense layer",
        run: crate::learning::pruning::demo,
    },
    DemoEntry {
        name: "logistic-map",
        summary: "Logistic-map orbits and a best-kept field search",
        run: crate::chaos::logistic::demo,
    },
    DemoEntry {
        name: "logic-minimize",
        summary: "Term deduplication and state minimization",
        run: crate::logic::simplify::demo,
    },
    DemoEntry {
        name: "cyber-defense",
        summary: "Anomaly scoring, packet inspection, handshake, TOTP",
        run: crate::detect::demo,
    },
    DemoEntry {
        name: "similarity",
        summary: "Cosine similarity and weighted aggregation",
        run: crate::stats::demo,
    },
    DemoEntry {
        name: "business-forecast",
        summary: "Compound growth, cycles, and market disruption",
        run: crate::forecast::demo,
    },
];

/// All registered demos, in registry order.
#[must_use]
pub fn available_demos() -> &'static [DemoEntry] {
    DEMOS
}

/// Looks up a demo by name.
///
/// # Errors
///
/// Returns [`DemoError::UnknownDemo`] when no demo has that name.
pub fn find_demo(name: &str) -> Result<&'static DemoEntry> {
    DEMOS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| DemoError::UnknownDemo { name: name.to_owned() }.into())
}

/// Runs one demo by name.
///
/// # Errors
///
/// Returns [`DemoError::UnknownDemo`] for an unknown name and wraps a
/// demo failure in [`DemoError::RunFailed`].
pub fn run_demo(name: &str, seed: u64) -> Result<Report> {
    let entry = find_demo(name)?;
    tracing::debug!(demo = entry.name, seed, "running demo");
    entry.run(seed).map_err(|source| {
        DemoError::RunFailed {
            name: entry.name.to_owned(),
            reason: source.to_string(),
        }
        .into()
    })
}

/// Runs every demo with the same seed, preserving registry order.
///
/// # Errors
///
/// Fails on the first demo that fails.
pub fn run_all(seed: u64) -> Result<Vec<Report>> {
    tracing::debug!(seed, count = DEMOS.len(), "running all demos");
    DEMOS
        .par_iter()
        .map(|entry| {
            entry.run(seed).map_err(|source| {
                DemoError::RunFailed {
                    name: entry.name.to_owned(),
                    reason: source.to_string(),
                }
                .into()
            })
        })
        .collect()
}
