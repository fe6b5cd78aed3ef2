//! Chaotic-dynamics vignettes built on the logistic map.

pub mod logistic;

pub use logistic::{chaotic_search, field_energy, logistic_map, logistic_orbit};

/// Default logistic-map growth rate (deep in the chaotic regime).
pub const DEFAULT_RATE: f64 = 3.8;
