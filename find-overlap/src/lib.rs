//! Detection of overlapping passages between two documents.
//!
//! Each document is cleaned up, split into sentences, and grouped into chunks of consecutive
//! sentences called partitions. Citations are masked before scoring, and every partition of the
//! source document is paired with its best-scoring partition of the target document.
//! Pairs whose score reaches a cutoff are reported.
//!
//! # Examples
//!
//! ```
//! use find_overlap::{OverlapConfig, OverlapSearcher};
//!
//! let config = OverlapConfig::default().sentence_chunk_size(1).min_partition_length(32);
//! let searcher = OverlapSearcher::new(config).unwrap();
//!
//! let source = searcher.partition("The cat sat on the mat very quietly today afternoon.");
//! let target = searcher.partition("The cat sat on the mat very quietly today afternoon.");
//! let report = searcher.compare(&source, &target);
//!
//! assert_eq!(report.summary.matching_pairs_count, 1);
//! assert_eq!(report.matches[0].similarity_score, 100);
//! ```
#![deny(missing_docs)]

pub mod citation;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod normalizer;
pub mod partition;
pub mod report;
pub mod searcher;
pub mod segmenter;

pub use config::OverlapConfig;
pub use matcher::MatchedPair;
pub use partition::Partition;
pub use report::Report;
pub use searcher::OverlapSearcher;
