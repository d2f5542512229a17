//! Comparison units built from chunks of sentences.
use serde::{Deserialize, Serialize};

use crate::citation::{mask_range, CitationDetector, DEFAULT_DETECTOR};
use crate::config::OverlapConfig;
use crate::normalizer::Normalizer;
use crate::segmenter::{join_sentences, sentence_spans};

/// Chunk of consecutive sentences compared across documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// 1-based position among the retained partitions of a document.
    pub partition_index: usize,
    /// Text of the chunk.
    pub content: String,
    /// Text of the chunk with citations masked, used for scoring.
    pub normalized_content: String,
    /// Does the original chunk contain a citation?
    pub contains_citation: bool,
}

/// Builder of partitions from a cleaned text.
pub struct PartitionBuilder<'a> {
    config: &'a OverlapConfig,
    detector: &'a CitationDetector,
}

impl<'a> PartitionBuilder<'a> {
    /// Creates an instance.
    pub const fn new(config: &'a OverlapConfig, detector: &'a CitationDetector) -> Self {
        Self { config, detector }
    }

    /// Normalizes a raw text, and then builds its partitions.
    pub fn build_from_raw<S>(&self, raw_text: S) -> Vec<Partition>
    where
        S: AsRef<str>,
    {
        let cleaned = Normalizer::new(self.config.reference_mode).normalize(raw_text);
        self.build(&cleaned)
    }

    /// Builds partitions from a cleaned text.
    ///
    /// Citation spans and sentence boundaries both come from `cleaned_text` itself,
    /// so every chunk has exactly one masked counterpart.
    /// Chunks shorter than the minimum length in characters are skipped without
    /// consuming an index.
    ///
    /// # Panics
    ///
    /// It will panic if `sentence_chunk_size` of the configuration is 0.
    pub fn build(&self, cleaned_text: &str) -> Vec<Partition> {
        assert!(self.config.sentence_chunk_size >= 1);
        let citation_spans = self.detector.citation_spans(cleaned_text);
        let sentences = sentence_spans(cleaned_text);

        let mut partitions = vec![];
        let mut num_skipped = 0;
        for group in sentences.chunks(self.config.sentence_chunk_size) {
            let content = join_sentences(group.iter().map(|s| &cleaned_text[s.clone()]));
            if content.chars().count() < self.config.min_partition_length {
                num_skipped += 1;
                continue;
            }
            let masked: Vec<String> = group
                .iter()
                .map(|s| mask_range(cleaned_text, s.clone(), &citation_spans))
                .collect();
            let normalized_content = join_sentences(masked.iter().map(|s| s.as_str()));
            let contains_citation = self.detector.contains_citation(&content);
            partitions.push(Partition {
                partition_index: partitions.len() + 1,
                content,
                normalized_content,
                contains_citation,
            });
        }
        tracing::debug!(
            num_sentences = sentences.len(),
            num_partitions = partitions.len(),
            num_skipped,
            "built partitions"
        );
        partitions
    }
}

/// Builds partitions from a cleaned text with the built-in citation patterns.
///
/// # Panics
///
/// It will panic if `config.sentence_chunk_size` is 0.
///
/// # Examples
///
/// ```
/// use find_overlap::config::OverlapConfig;
/// use find_overlap::partition::build_partitions;
///
/// let config = OverlapConfig::default().min_partition_length(11).sentence_chunk_size(1);
/// let partitions = build_partitions("Too short. This sentence is long enough.", &config);
/// assert_eq!(partitions.len(), 1);
/// assert_eq!(partitions[0].partition_index, 1);
/// assert_eq!(partitions[0].content, "This sentence is long enough.");
/// ```
pub fn build_partitions(cleaned_text: &str, config: &OverlapConfig) -> Vec<Partition> {
    assert!(config.sentence_chunk_size >= 1);
    PartitionBuilder::new(config, &DEFAULT_DETECTOR).build(cleaned_text)
}
