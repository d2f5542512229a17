use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use find_overlap::OverlapSearcher;
use find_overlap_cli::args::ConfigArgs;
use find_overlap_cli::extract::load_pages;

#[derive(Parser, Debug)]
#[clap(
    name = "find-overlap-dump",
    about = "A program to dump the partitions of a document as JSON lines."
)]
struct Args {
    /// File path to a document (.pdf or .txt).
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    #[clap(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    find_overlap_cli::init_tracing();
    let args = Args::parse();

    let searcher = OverlapSearcher::new(args.config.load()?)?;
    let pages = load_pages(&args.document_path)?;
    for partition in searcher.partition_pages(&pages) {
        println!("{}", serde_json::to_string(&partition)?);
    }

    Ok(())
}
