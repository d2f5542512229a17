use std::time::Duration;

use rand::{thread_rng, Rng};

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use find_overlap::matcher::Matcher;
use find_overlap::{OverlapConfig, OverlapSearcher};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_TIME: Duration = Duration::from_secs(5);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const MIN_SENTENCES: usize = 100;
const MAX_SENTENCES: usize = 1000;
const WORDS_PER_SENTENCE: usize = 12;
const VOCABULARY: usize = 500;

fn random_text<R: Rng>(rng: &mut R, num_sentences: usize) -> String {
    let mut text = String::new();
    for _ in 0..num_sentences {
        for j in 0..WORDS_PER_SENTENCE {
            if j != 0 {
                text.push(' ');
            }
            text.push_str(&format!("w{}", rng.gen_range(0..VOCABULARY)));
        }
        text.push_str(". ");
    }
    text
}

fn criterion_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let mut rng = thread_rng();
    let source = random_text(&mut rng, MAX_SENTENCES);
    let target = random_text(&mut rng, MAX_SENTENCES);

    add_match_benches(&mut group, &source, &target);
}

macro_rules! bench_common {
    ($name:expr, $method:ident, $source:ident, $target:ident, $group:ident) => {
        let config = OverlapConfig::default();
        let searcher = OverlapSearcher::new(config.clone()).unwrap();
        let matcher = Matcher::new(&config);
        let mut num_sentences = MIN_SENTENCES;
        while num_sentences <= MAX_SENTENCES {
            let source = searcher.partition(prefix($source, num_sentences));
            let target = searcher.partition(prefix($target, num_sentences));
            let bench_name = format!("{}/{num_sentences}", $name);
            $group.bench_function(bench_name, |b| {
                b.iter(|| {
                    if matcher.$method(&source, &target).len() == usize::MAX {
                        panic!();
                    }
                });
            });
            num_sentences *= 10;
        }
    };
}

fn prefix(text: &str, num_sentences: usize) -> &str {
    text.match_indices(". ")
        .nth(num_sentences - 1)
        .map_or(text, |(i, _)| &text[..i + 1])
}

fn add_match_benches(group: &mut BenchmarkGroup<WallTime>, source: &str, target: &str) {
    bench_common!("find_matches", find_matches, source, target, group);
    bench_common!(
        "find_matches_in_parallel",
        find_matches_in_parallel,
        source,
        target,
        group
    );
}

criterion_group!(benches, criterion_uniform);
criterion_main!(benches);
