//! Serializable summary of a comparison.
use serde::Serialize;

use crate::config::OverlapConfig;
use crate::matcher::MatchedPair;
use crate::partition::Partition;

/// Counts of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of partitions in the source document.
    pub total_partitions_source: usize,
    /// Number of partitions in the target document.
    pub total_partitions_target: usize,
    /// Number of matched pairs.
    pub matching_pairs_count: usize,
}

/// Matched pairs of a comparison, together with the configuration that produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    /// Minimum score of the reported pairs.
    pub similarity_cutoff: u8,
    /// Minimum number of characters in a partition.
    pub minimum_partition_length: usize,
    /// Number of sentences per partition.
    pub sentence_chunk_size: usize,
    /// Name of the similarity metric.
    pub similarity_metric: &'static str,
    /// Counts.
    pub summary: Summary,
    /// Matched pairs in the order of the source partitions.
    pub matches: Vec<MatchedPair<'a>>,
}

impl<'a> Report<'a> {
    /// Creates an instance.
    pub fn new(
        config: &OverlapConfig,
        source: &[Partition],
        target: &[Partition],
        matches: Vec<MatchedPair<'a>>,
    ) -> Self {
        Self {
            similarity_cutoff: config.similarity_cutoff,
            minimum_partition_length: config.min_partition_length,
            sentence_chunk_size: config.sentence_chunk_size,
            similarity_metric: config.metric.name(),
            summary: Summary {
                total_partitions_source: source.len(),
                total_partitions_target: target.len(),
                matching_pairs_count: matches.len(),
            },
            matches,
        }
    }

    /// Gets the share in [0,1] of source partitions having a match.
    ///
    /// Returns 0 if the source document has no partition.
    pub fn coverage(&self) -> f64 {
        if self.summary.total_partitions_source == 0 {
            return 0.;
        }
        self.summary.matching_pairs_count as f64 / self.summary.total_partitions_source as f64
    }

    /// Checks if no pair was matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
