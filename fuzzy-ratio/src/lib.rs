//! Similarity ratios in the range of [0,100] built on the indel distance,
//! i.e., the edit distance allowing only insertions and deletions.
//!
//! The indel distance is computed from the length of the longest common subsequence
//! with a bit-parallel algorithm processing 64 characters per machine word.
#![deny(missing_docs)]

pub mod indel;
pub mod token;

pub use indel::ratio;
pub use token::{token_set_ratio, token_sort_ratio};
