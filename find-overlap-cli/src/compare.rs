use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use find_overlap::OverlapSearcher;
use find_overlap_cli::args::ConfigArgs;
use find_overlap_cli::extract::load_pages;

#[derive(Parser, Debug)]
#[clap(
    name = "find-overlap-compare",
    about = "A program to find overlapping passages between two documents."
)]
struct Args {
    /// File path to the source document (.pdf or .txt).
    #[clap(short = 'a', long)]
    source_path: PathBuf,

    /// File path to the target document (.pdf or .txt).
    #[clap(short = 'b', long)]
    target_path: PathBuf,

    #[clap(flatten)]
    config: ConfigArgs,

    /// Searches the best matches in parallel.
    #[clap(short = 'p', long)]
    parallel: bool,
}

fn main() -> Result<()> {
    find_overlap_cli::init_tracing();
    let args = Args::parse();

    let config = args.config.load()?;
    let searcher = OverlapSearcher::new(config)?.shows_progress(true);

    // Both documents are extracted before any comparison.
    let source_pages = load_pages(&args.source_path)?;
    let target_pages = load_pages(&args.target_path)?;

    eprintln!("Partitioning documents...");
    let start = Instant::now();
    let source = searcher.partition_pages(&source_pages);
    let target = searcher.partition_pages(&target_pages);
    eprintln!(
        "Produced {} and {} partitions in {} sec",
        source.len(),
        target.len(),
        start.elapsed().as_secs_f64()
    );

    eprintln!("Finding the best matches...");
    let report = if args.parallel {
        searcher.compare_in_parallel(&source, &target)
    } else {
        searcher.compare(&source, &target)
    };
    eprintln!(
        "Matched {} of {} partitions",
        report.summary.matching_pairs_count, report.summary.total_partitions_source
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
