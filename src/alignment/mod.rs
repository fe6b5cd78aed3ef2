//! Alignment and similarity vignettes.
//!
//! - **DTW**: dynamic time warping over numeric signals
//! - **Tree edit distance**: similarity scoring over small labeled
//!   binary trees, with the question-answer retrieval loop on top

pub mod dtw;
pub mod tree_edit;

pub use dtw::dtw;
pub use tree_edit::{TreeNode, best_match, edit_distance, similarity_score, weighted_similarity};
