use find_overlap::citation::CITATION_PLACEHOLDER;
use find_overlap::config::{Metric, ReferenceMode};
use find_overlap::normalizer::{normalize, Normalizer};
use find_overlap::segmenter::{chunk, split_sentences};
use find_overlap::{OverlapConfig, OverlapSearcher};

const CAT: &str = "The cat sat on the mat very quietly today afternoon.";

const ESSAY: &str = "Fuzzy matching compares texts that were lightly edited.\n\
    Plagiarism often reorders words while keeping most of them.\n\
    A token set ratio ignores the order and the repetition of words.\n\
    Citations such as (Smith, 2019) should not inflate the score.\n\
    Numbers in brackets [4] are citations as well.\n\
    Short one.\n\
    The last sentence closes the essay without any citation at all.\n\
    \n\
    REFERENCES\n\
    SMITH, J. A book about matching. 2019.";

#[test]
fn test_identical_sentence() {
    let config = OverlapConfig::default()
        .sentence_chunk_size(1)
        .min_partition_length(50);
    let searcher = OverlapSearcher::new(config).unwrap();
    let source = searcher.partition(CAT);
    let target = searcher.partition(CAT);
    let report = searcher.compare(&source, &target);

    assert_eq!(report.summary.total_partitions_source, 1);
    assert_eq!(report.summary.total_partitions_target, 1);
    assert_eq!(report.matches.len(), 1);
    let pair = &report.matches[0];
    assert_eq!(pair.source.partition_index, 1);
    assert_eq!(pair.target.partition_index, 1);
    assert_eq!(pair.similarity_score, 100);
    assert_eq!(pair.similarity_metric, "token_set_ratio");
}

#[test]
fn test_empty_target() {
    let searcher = OverlapSearcher::new(OverlapConfig::default()).unwrap();
    let source = searcher.partition(ESSAY);
    let target = searcher.partition("");
    assert!(target.is_empty());
    let report = searcher.compare(&source, &target);
    assert!(report.matches.is_empty());
    assert_eq!(report.summary.total_partitions_target, 0);
    assert_eq!(report.coverage(), 0.);
}

#[test]
fn test_short_sentence_merged() {
    let text = "It rained. The streets of the old town were flooded by noon. Nobody went out.";
    let single = OverlapSearcher::new(OverlapConfig::default().sentence_chunk_size(1)).unwrap();
    // No sentence reaches 64 characters on its own.
    assert!(single.partition(text).is_empty());

    let merged = OverlapSearcher::new(OverlapConfig::default()).unwrap();
    let partitions = merged.partition(text);
    assert_eq!(partitions.len(), 1);
    assert_eq!(partitions[0].content, text);
}

#[test]
fn test_citation_masked() {
    let searcher = OverlapSearcher::new(OverlapConfig::default()).unwrap();
    let text = "Prior studies on reading habits found similar effects in children (Smith, 2019).";
    let partitions = searcher.partition(text);
    assert_eq!(partitions.len(), 1);
    let p = &partitions[0];
    assert!(p.contains_citation);
    assert_eq!(p.content, text);
    assert!(p.normalized_content.contains(CITATION_PLACEHOLDER));
    assert!(!p.normalized_content.contains("Smith"));
}

#[test]
fn test_references_removed() {
    let config = OverlapConfig::default()
        .sentence_chunk_size(1)
        .min_partition_length(1);
    let searcher = OverlapSearcher::new(config).unwrap();
    let partitions = searcher.partition(ESSAY);
    assert_eq!(partitions.len(), 7);
    assert!(partitions.iter().all(|p| !p.content.contains("REFERENCES")));
    assert!(partitions.iter().all(|p| !p.content.contains("SMITH")));

    let keep = OverlapConfig::default()
        .sentence_chunk_size(1)
        .min_partition_length(1)
        .reference_mode(ReferenceMode::Keep);
    let searcher = OverlapSearcher::new(keep).unwrap();
    let partitions = searcher.partition(ESSAY);
    assert!(partitions.iter().any(|p| p.content.contains("REFERENCES")));
}

#[test]
fn test_index_density() {
    for k in 1..=4 {
        let config = OverlapConfig::default()
            .sentence_chunk_size(k)
            .min_partition_length(40);
        let searcher = OverlapSearcher::new(config).unwrap();
        let partitions = searcher.partition(ESSAY);
        let indices: Vec<_> = partitions.iter().map(|p| p.partition_index).collect();
        let expected: Vec<_> = (1..=partitions.len()).collect();
        assert_eq!(indices, expected);
    }
}

#[test]
fn test_normalize_idempotent() {
    let cleaned = normalize(ESSAY);
    assert_eq!(normalize(&cleaned), cleaned);
    let strict = Normalizer::new(ReferenceMode::Strict);
    let cleaned = strict.normalize(ESSAY);
    assert_eq!(strict.normalize(&cleaned), cleaned);
}

#[test]
fn test_chunks_recover_cleaned_text() {
    let cleaned = normalize(ESSAY);
    let sentences = split_sentences(&cleaned);
    for k in 1..=5 {
        assert_eq!(chunk(&sentences, k).join(" "), cleaned);
    }
}

#[test]
fn test_all_partitions_kept_recover_text() {
    let config = OverlapConfig::default()
        .sentence_chunk_size(2)
        .min_partition_length(0);
    let searcher = OverlapSearcher::new(config).unwrap();
    let partitions = searcher.partition(ESSAY);
    let joined: Vec<_> = partitions.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(joined.join(" "), normalize(ESSAY));
}

#[test]
fn test_symmetric_token_set() {
    let pairs = [
        ("the cat sat on the mat", "a cat was on the mat"),
        ("completely different", "nothing shared here"),
        ("a b c", "c b a d"),
    ];
    for (x, y) in pairs {
        assert_eq!(
            fuzzy_ratio::token_set_ratio(x, y),
            fuzzy_ratio::token_set_ratio(y, x)
        );
        assert_eq!(Metric::TokenSet.score(x, y), Metric::TokenSet.score(y, x));
    }
}

#[test]
fn test_cutoff_monotonic() {
    let source_text = "The cat sat on the mat. A dog slept near the door. Birds sang in the morning. \
        The weather was mild and pleasant. Nobody expected the storm.";
    let target_text = "A cat sat on a mat. The dog slept by the door. Birds were singing at dawn. \
        The weather stayed mild. Everyone expected rain.";
    let mut last = usize::MAX;
    for cutoff in (0..=100).step_by(10) {
        let config = OverlapConfig::default()
            .sentence_chunk_size(1)
            .min_partition_length(1)
            .similarity_cutoff(cutoff);
        let searcher = OverlapSearcher::new(config).unwrap();
        let source = searcher.partition(source_text);
        let target = searcher.partition(target_text);
        let count = searcher.find_matches(&source, &target).len();
        assert!(count <= last);
        last = count;
    }
    assert_eq!(last, 0);
}

#[test]
fn test_parallel_equals_sequential() {
    for metric in [Metric::TokenSet, Metric::TokenSort, Metric::Ratio] {
        let config = OverlapConfig::default()
            .sentence_chunk_size(1)
            .min_partition_length(10)
            .similarity_cutoff(30)
            .metric(metric);
        let searcher = OverlapSearcher::new(config).unwrap();
        let source = searcher.partition(ESSAY);
        let target = searcher.partition(
            "A token set ratio ignores word order. Plagiarism keeps most words but reorders them.",
        );
        assert_eq!(
            searcher.compare(&source, &target),
            searcher.compare_in_parallel(&source, &target)
        );
    }
}

#[test]
fn test_citation_does_not_inflate() {
    let config = OverlapConfig::default()
        .sentence_chunk_size(1)
        .min_partition_length(1)
        .similarity_cutoff(0);
    let searcher = OverlapSearcher::new(config).unwrap();
    let source = searcher.partition("Reading improves memory (Smith, 2019).");
    let target = searcher.partition("Reading improves memory (Jones, 2021).");
    let matches = searcher.find_matches(&source, &target);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].similarity_score, 100);
}

#[test]
fn test_report_json() {
    let config = OverlapConfig::default()
        .sentence_chunk_size(1)
        .min_partition_length(50);
    let searcher = OverlapSearcher::new(config).unwrap();
    let source = searcher.partition(CAT);
    let target = searcher.partition(CAT);
    let report = searcher.compare(&source, &target);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["similarity_metric"], "token_set_ratio");
    assert_eq!(json["summary"]["total_partitions_source"], 1);
    assert_eq!(json["matches"][0]["source"]["content"], CAT);
    assert_eq!(json["matches"][0]["source"]["contains_citation"], false);
}

#[test]
fn test_surname_particles_masked() {
    let config = OverlapConfig::default()
        .sentence_chunk_size(1)
        .min_partition_length(1)
        .similarity_cutoff(0);
    let searcher = OverlapSearcher::new(config).unwrap();
    let source = searcher.partition("Reading improves memory (de Souza, 2019).");
    let target = searcher.partition("Reading improves memory (van Dijk et al., 2010).");
    assert!(source[0].contains_citation);
    assert!(target[0].contains_citation);
    let matches = searcher.find_matches(&source, &target);
    assert_eq!(matches[0].similarity_score, 100);
}
