//! Command-line options of the search configuration.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use find_overlap::config::{Metric, Processor, ReferenceMode};
use find_overlap::OverlapConfig;

/// Options overriding the values of a configuration file.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// TOML file of the configuration. Omitted values take their defaults.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Minimum similarity score in the range of [0,100] for a pair to be reported.
    #[clap(short = 'c', long)]
    pub similarity_cutoff: Option<u8>,

    /// Minimum number of characters in a partition.
    #[clap(short = 'm', long)]
    pub min_partition_length: Option<usize>,

    /// Number of sentences grouped into a partition (must be more than 0).
    #[clap(short = 'k', long)]
    pub sentence_chunk_size: Option<usize>,

    /// Similarity metric: token_set, token_sort, or ratio.
    #[clap(long)]
    pub metric: Option<Metric>,

    /// Removal of the references section: heading, strict, or keep.
    #[clap(long)]
    pub references: Option<ReferenceMode>,

    /// Preprocessing before scoring: full or lowercase.
    #[clap(long)]
    pub processor: Option<Processor>,
}

impl ConfigArgs {
    /// Loads the configuration file if given, and then applies the options.
    pub fn load(&self) -> Result<OverlapConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read the config file {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("Failed to parse the config file {}", path.display()))?
            }
            None => OverlapConfig::default(),
        };
        if let Some(cutoff) = self.similarity_cutoff {
            config.similarity_cutoff = cutoff;
        }
        if let Some(length) = self.min_partition_length {
            config.min_partition_length = length;
        }
        if let Some(size) = self.sentence_chunk_size {
            config.sentence_chunk_size = size;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(mode) = self.references {
            config.reference_mode = mode;
        }
        if let Some(processor) = self.processor {
            config.processor = processor;
        }
        Ok(config)
    }
}
