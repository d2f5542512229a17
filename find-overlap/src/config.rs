//! Tunables of the overlap search.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FindOverlapError, Result};

/// Default minimum score in [0,100] for a pair to be reported.
pub const DEFAULT_SIMILARITY_CUTOFF: u8 = 80;
/// Default minimum number of characters in a partition.
pub const DEFAULT_MIN_PARTITION_LENGTH: usize = 64;
/// Default number of sentences grouped into a partition.
pub const DEFAULT_SENTENCE_CHUNK_SIZE: usize = 3;

/// How a trailing references section is recognized and removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceMode {
    /// Cuts from a "REFERENCES"/"REFERÊNCIAS" heading at a line start.
    Heading,
    /// Also cuts from the first ABNT-style list entry or "Acesso em:" marker.
    Strict,
    /// Keeps the whole text.
    Keep,
}

impl FromStr for ReferenceMode {
    type Err = &'static str;
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "heading" => Ok(Self::Heading),
            "strict" => Ok(Self::Strict),
            "keep" => Ok(Self::Keep),
            _ => Err("Could not parse a reference mode"),
        }
    }
}

/// Similarity metric used to score two partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// [`fuzzy_ratio::token_set_ratio`].
    TokenSet,
    /// [`fuzzy_ratio::token_sort_ratio`].
    TokenSort,
    /// [`fuzzy_ratio::ratio`].
    Ratio,
}

impl Metric {
    /// Gets the name reported with each matched pair.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TokenSet => "token_set_ratio",
            Self::TokenSort => "token_sort_ratio",
            Self::Ratio => "ratio",
        }
    }

    /// Scores two preprocessed strings, rounding half to even into [0,100].
    pub fn score(self, a: &str, b: &str) -> u8 {
        let score = match self {
            Self::TokenSet => fuzzy_ratio::token_set_ratio(a, b),
            Self::TokenSort => fuzzy_ratio::token_sort_ratio(a, b),
            Self::Ratio => fuzzy_ratio::ratio(a, b),
        };
        score.round_ties_even().clamp(0., 100.) as u8
    }
}

impl FromStr for Metric {
    type Err = &'static str;
    fn from_str(metric: &str) -> Result<Self, Self::Err> {
        match metric {
            "token_set" => Ok(Self::TokenSet),
            "token_sort" => Ok(Self::TokenSort),
            "ratio" => Ok(Self::Ratio),
            _ => Err("Could not parse a metric option"),
        }
    }
}

/// Preprocessing applied to both sides right before scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Processor {
    /// Lower-cases, replaces non-alphanumeric characters with spaces, and trims.
    /// Non-ASCII letters and digits are kept.
    Full,
    /// Only lower-cases.
    Lowercase,
}

impl FromStr for Processor {
    type Err = &'static str;
    fn from_str(processor: &str) -> Result<Self, Self::Err> {
        match processor {
            "full" => Ok(Self::Full),
            "lowercase" => Ok(Self::Lowercase),
            _ => Err("Could not parse a processor option"),
        }
    }
}

impl Processor {
    /// Preprocesses a string before scoring.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_overlap::config::Processor;
    ///
    /// assert_eq!(Processor::Full.process("  Hello, World! <CIT> "), "hello  world   cit");
    /// assert_eq!(Processor::Lowercase.process("Hello, World!"), "hello, world!");
    /// ```
    pub fn process(self, text: &str) -> String {
        match self {
            Self::Full => {
                let replaced: String = text
                    .to_lowercase()
                    .chars()
                    .map(|c| if c.is_alphanumeric() { c } else { ' ' })
                    .collect();
                replaced.trim().to_string()
            }
            Self::Lowercase => text.to_lowercase(),
        }
    }
}

/// Configuration shared by every stage of the pipeline.
///
/// All fields can be omitted when deserializing; missing ones take their defaults.
///
/// # Examples
///
/// ```
/// use find_overlap::config::{Metric, OverlapConfig};
///
/// let config = OverlapConfig::default().similarity_cutoff(90).sentence_chunk_size(1);
/// assert_eq!(config.similarity_cutoff, 90);
/// assert_eq!(config.metric, Metric::TokenSet);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Minimum score in [0,100] for a pair to be reported.
    pub similarity_cutoff: u8,
    /// Minimum number of characters in a partition.
    pub min_partition_length: usize,
    /// Number of sentences grouped into a partition (must be more than 0).
    pub sentence_chunk_size: usize,
    /// How a trailing references section is removed.
    pub reference_mode: ReferenceMode,
    /// Similarity metric.
    pub metric: Metric,
    /// Preprocessing before scoring.
    pub processor: Processor,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            similarity_cutoff: DEFAULT_SIMILARITY_CUTOFF,
            min_partition_length: DEFAULT_MIN_PARTITION_LENGTH,
            sentence_chunk_size: DEFAULT_SENTENCE_CHUNK_SIZE,
            reference_mode: ReferenceMode::Heading,
            metric: Metric::TokenSet,
            processor: Processor::Full,
        }
    }
}

impl OverlapConfig {
    /// Sets the similarity cutoff.
    pub const fn similarity_cutoff(mut self, cutoff: u8) -> Self {
        self.similarity_cutoff = cutoff;
        self
    }

    /// Sets the minimum partition length in characters.
    pub const fn min_partition_length(mut self, length: usize) -> Self {
        self.min_partition_length = length;
        self
    }

    /// Sets the number of sentences per partition.
    pub const fn sentence_chunk_size(mut self, size: usize) -> Self {
        self.sentence_chunk_size = size;
        self
    }

    /// Sets the reference-removal mode.
    pub const fn reference_mode(mut self, mode: ReferenceMode) -> Self {
        self.reference_mode = mode;
        self
    }

    /// Sets the similarity metric.
    pub const fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the preprocessing before scoring.
    pub const fn processor(mut self, processor: Processor) -> Self {
        self.processor = processor;
        self
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.similarity_cutoff > 100 {
            return Err(FindOverlapError::input(format!(
                "Similarity cutoff must be in [0,100], but got {}.",
                self.similarity_cutoff
            )));
        }
        if self.sentence_chunk_size == 0 {
            return Err(FindOverlapError::input(
                "Sentence chunk size must not be 0.".to_string(),
            ));
        }
        Ok(())
    }
}
