use find_overlap::{OverlapConfig, OverlapSearcher};

fn main() {
    let source = "Welcome to Jimbocho, the town of books and curry! \
        Its bookstores sell used books of every kind (Tanaka, 2015). \
        Many visitors come for the curry shops as well.";
    let target = "Jimbocho is the town of curry and books, welcome! \
        Used books of every kind are sold in its bookstores (Sato, 2020). \
        Few people know about the nearby river.";

    // Compares single sentences of at least 32 characters.
    let config = OverlapConfig::default()
        .sentence_chunk_size(1)
        .min_partition_length(32);
    let searcher = OverlapSearcher::new(config).unwrap();

    let source = searcher.partition(source);
    let target = searcher.partition(target);
    let report = searcher.compare(&source, &target);

    // The first two sentences are rewordings, and the citations are masked before scoring.
    let pairs: Vec<_> = report
        .matches
        .iter()
        .map(|m| (m.source.partition_index, m.target.partition_index))
        .collect();
    assert_eq!(pairs, vec![(1, 1), (2, 2)]);
}
