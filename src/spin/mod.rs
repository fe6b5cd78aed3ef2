//! Spin-model vignettes: the driven Potts ring.

pub mod potts;

pub use potts::{PottsConfig, PottsModel};
