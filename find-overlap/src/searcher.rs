//! Searcher of overlapping passages between two documents.
use crate::citation::CitationDetector;
use crate::config::OverlapConfig;
use crate::errors::Result;
use crate::matcher::{MatchedPair, Matcher};
use crate::partition::{Partition, PartitionBuilder};
use crate::report::Report;

/// Searcher wiring normalization, citation masking, partitioning, and matching.
///
/// # Examples
///
/// ```
/// use find_overlap::{OverlapConfig, OverlapSearcher};
///
/// let config = OverlapConfig::default().sentence_chunk_size(1).min_partition_length(20);
/// let searcher = OverlapSearcher::new(config).unwrap();
///
/// let source = searcher.partition("The cat sat on the mat very quietly today. Unrelated words here.");
/// let target = searcher.partition("Today the cat sat very quietly on the mat.");
/// let report = searcher.compare(&source, &target);
///
/// assert_eq!(report.summary.matching_pairs_count, 1);
/// assert_eq!(report.matches[0].source.partition_index, 1);
/// assert_eq!(report.matches[0].similarity_score, 100);
/// ```
#[derive(Debug)]
pub struct OverlapSearcher {
    config: OverlapConfig,
    detector: CitationDetector,
    shows_progress: bool,
}

impl OverlapSearcher {
    /// Creates an instance with the built-in citation patterns.
    ///
    /// # Errors
    ///
    /// An error will be returned if `config` has an out-of-range value.
    pub fn new(config: OverlapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            detector: CitationDetector::default(),
            shows_progress: false,
        })
    }

    /// Shows the progress via the standard error output?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Replaces the citation detector.
    pub fn citation_detector(mut self, detector: CitationDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Normalizes a raw document and splits it into partitions.
    pub fn partition<S>(&self, raw_text: S) -> Vec<Partition>
    where
        S: AsRef<str>,
    {
        let partitions = PartitionBuilder::new(&self.config, &self.detector).build_from_raw(raw_text);
        if self.shows_progress {
            eprintln!(
                "[OverlapSearcher::partition] Produced {} partitions",
                partitions.len()
            );
        }
        partitions
    }

    /// Partitions a document given page by page, where every page is followed by a space.
    pub fn partition_pages<I, P>(&self, pages: I) -> Vec<Partition>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut text = String::new();
        for page in pages {
            text.push_str(page.as_ref());
            text.push(' ');
        }
        self.partition(text)
    }

    /// Searches the best match in `target` for every partition of `source`.
    pub fn find_matches<'a>(
        &self,
        source: &'a [Partition],
        target: &'a [Partition],
    ) -> Vec<MatchedPair<'a>> {
        self.matcher().find_matches(source, target)
    }

    /// Parallel version of [`Self::find_matches`].
    pub fn find_matches_in_parallel<'a>(
        &self,
        source: &'a [Partition],
        target: &'a [Partition],
    ) -> Vec<MatchedPair<'a>> {
        self.matcher().find_matches_in_parallel(source, target)
    }

    /// Matches partitions and assembles the report.
    pub fn compare<'a>(&self, source: &'a [Partition], target: &'a [Partition]) -> Report<'a> {
        let matches = self.find_matches(source, target);
        Report::new(&self.config, source, target, matches)
    }

    /// Parallel version of [`Self::compare`].
    pub fn compare_in_parallel<'a>(
        &self,
        source: &'a [Partition],
        target: &'a [Partition],
    ) -> Report<'a> {
        let matches = self.find_matches_in_parallel(source, target);
        Report::new(&self.config, source, target, matches)
    }

    /// Gets the configuration.
    pub const fn config(&self) -> &OverlapConfig {
        &self.config
    }

    fn matcher(&self) -> Matcher {
        Matcher::new(&self.config).shows_progress(self.shows_progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::citation::RegexPattern;

    #[test]
    fn test_invalid_config() {
        let config = OverlapConfig::default().sentence_chunk_size(0);
        assert!(OverlapSearcher::new(config).is_err());
        let config = OverlapConfig::default().similarity_cutoff(120);
        assert!(OverlapSearcher::new(config).is_err());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OverlapSearcher>();
    }

    #[test]
    fn test_partition_pages() {
        let config = OverlapConfig::default()
            .sentence_chunk_size(1)
            .min_partition_length(1);
        let searcher = OverlapSearcher::new(config).unwrap();
        let partitions = searcher.partition_pages(["First page.", "", "Second page."]);
        let contents: Vec<_> = partitions.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["First page.", "Second page."]);
    }

    #[test]
    fn test_custom_detector() {
        let config = OverlapConfig::default()
            .sentence_chunk_size(1)
            .min_partition_length(1);
        let footnote = RegexPattern::new("footnote", r"\^\d+", true).unwrap();
        let searcher = OverlapSearcher::new(config)
            .unwrap()
            .citation_detector(CitationDetector::empty().with_pattern(footnote));
        let partitions = searcher.partition("As noted before^3 and (Smith, 2019).");
        assert!(partitions[0].contains_citation);
        assert_eq!(
            partitions[0].normalized_content,
            "As noted before <CIT>  and (Smith, 2019)."
        );
    }

    #[test]
    fn test_compare_empty_target() {
        let config = OverlapConfig::default().sentence_chunk_size(1);
        let searcher = OverlapSearcher::new(config).unwrap();
        let source =
            searcher.partition("This sentence is clearly long enough to pass the minimum length filter.");
        let target = searcher.partition("");
        let report = searcher.compare(&source, &target);
        assert_eq!(report.summary.total_partitions_source, 1);
        assert_eq!(report.summary.total_partitions_target, 0);
        assert!(report.is_empty());
    }
}
