//! Best-match search of partitions across two documents.
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{Metric, OverlapConfig, Processor};
use crate::partition::Partition;

/// Pair of partitions from the source and target documents whose score reaches the cutoff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchedPair<'a> {
    /// Partition of the source document.
    pub source: &'a Partition,
    /// Best-scoring partition of the target document.
    pub target: &'a Partition,
    /// Score in [0,100].
    pub similarity_score: u8,
    /// Name of the metric.
    pub similarity_metric: &'static str,
}

/// Searcher of the best-matching target partition for each source partition.
#[derive(Clone, Debug)]
pub struct Matcher {
    metric: Metric,
    processor: Processor,
    cutoff: u8,
    shows_progress: bool,
}

impl Matcher {
    /// Creates an instance with the metric, preprocessing, and cutoff of `config`.
    pub const fn new(config: &OverlapConfig) -> Self {
        Self {
            metric: config.metric,
            processor: config.processor,
            cutoff: config.similarity_cutoff,
            shows_progress: false,
        }
    }

    /// Prints the progress with stderr?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Finds the best-scoring candidate for a query, returning its position and score.
    ///
    /// Both sides are compared after preprocessing. The first candidate wins among equal
    /// scores. Returns `None` only if `candidates` is empty.
    pub fn best_match<S>(&self, query: &str, candidates: &[S]) -> Option<(usize, u8)>
    where
        S: AsRef<str>,
    {
        let query = self.processor.process(query);
        let candidates: Vec<String> = candidates
            .iter()
            .map(|c| self.processor.process(c.as_ref()))
            .collect();
        self.best_processed(&query, &candidates)
    }

    /// Searches the best match in `target` for every partition of `source`, keeping the pairs
    /// whose score reaches the cutoff, in the order of `source`.
    pub fn find_matches<'a>(
        &self,
        source: &'a [Partition],
        target: &'a [Partition],
    ) -> Vec<MatchedPair<'a>> {
        if target.is_empty() {
            return vec![];
        }
        let candidates = self.process_all(target);
        let start = Instant::now();

        let mut matched = vec![];
        for (i, partition) in source.iter().enumerate() {
            if self.shows_progress && (i + 1) % 100 == 0 {
                eprintln!(
                    "[Matcher::find_matches] Processed {}/{}...",
                    i + 1,
                    source.len()
                );
            }
            if let Some(pair) = self.match_one(partition, target, &candidates) {
                matched.push(pair);
            }
        }
        self.report_done("find_matches", start, matched.len());
        matched
    }

    /// Parallel version of [`Self::find_matches`], returning the same pairs in the same order.
    pub fn find_matches_in_parallel<'a>(
        &self,
        source: &'a [Partition],
        target: &'a [Partition],
    ) -> Vec<MatchedPair<'a>> {
        if target.is_empty() {
            return vec![];
        }
        let candidates = self.process_all(target);
        let start = Instant::now();

        // One slot per source partition.
        let slots: Vec<Option<MatchedPair>> = source
            .par_iter()
            .map(|partition| self.match_one(partition, target, &candidates))
            .collect();
        let matched: Vec<_> = slots.into_iter().flatten().collect();
        self.report_done("find_matches_in_parallel", start, matched.len());
        matched
    }

    fn process_all(&self, partitions: &[Partition]) -> Vec<String> {
        partitions
            .iter()
            .map(|p| self.processor.process(&p.normalized_content))
            .collect()
    }

    fn match_one<'a>(
        &self,
        partition: &'a Partition,
        target: &'a [Partition],
        candidates: &[String],
    ) -> Option<MatchedPair<'a>> {
        let query = self.processor.process(&partition.normalized_content);
        let (j, score) = self.best_processed(&query, candidates)?;
        tracing::trace!(
            source = partition.partition_index,
            target = target[j].partition_index,
            score,
            "best match"
        );
        (score >= self.cutoff).then(|| MatchedPair {
            source: partition,
            target: &target[j],
            similarity_score: score,
            similarity_metric: self.metric.name(),
        })
    }

    fn best_processed(&self, query: &str, candidates: &[String]) -> Option<(usize, u8)> {
        let mut best: Option<(usize, u8)> = None;
        for (j, candidate) in candidates.iter().enumerate() {
            let score = self.metric.score(query, candidate);
            if best.map_or(true, |(_, s)| s < score) {
                best = Some((j, score));
                if score == 100 {
                    break;
                }
            }
        }
        best
    }

    fn report_done(&self, method: &str, start: Instant, num_matched: usize) {
        if self.shows_progress {
            eprintln!(
                "[Matcher::{method}] Done in {} sec, #matched={num_matched}",
                start.elapsed().as_secs_f64()
            );
        }
        tracing::debug!(num_matched, "matched partitions");
    }
}

/// Searches the best match in `target` for every partition of `source` under `config`.
pub fn find_matches<'a>(
    source: &'a [Partition],
    target: &'a [Partition],
    config: &OverlapConfig,
) -> Vec<MatchedPair<'a>> {
    Matcher::new(config).find_matches(source, target)
}
