//! Boolean-logic simplification vignettes.

pub mod simplify;

pub use simplify::{dedupe_terms, minimize_states};
