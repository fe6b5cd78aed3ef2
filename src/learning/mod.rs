//! Learning-rule vignettes.
//!
//! - **Q-table**: the tabular Q-learning update
//! - **Hebbian**: correlation-driven weight update
//! - **Pruning**: relevance-based removal of dense-layer nodes

pub mod hebbian;
pub mod pruning;
pub mod qtable;

pub use hebbian::hebbian_update;
pub use pruning::DenseLayer;
pub use qtable::QTable;

/// Default learning rate.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Default discount factor.
pub const DEFAULT_GAMMA: f64 = 0.9;
