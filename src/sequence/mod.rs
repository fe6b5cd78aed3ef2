//! Sequence analysis vignettes.
//!
//! Contiguous-subarray routines: Kadane's maximum subarray, target-sum
//! subarray enumeration, and non-negative segment identification.

pub mod kadane;
pub mod segments;

pub use kadane::{MaxSubarray, max_subarray};
pub use segments::{non_negative_segments, subarrays_with_sum};
